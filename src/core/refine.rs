use crate::domain::model::{find_experience_range, ActiveFilters, Advocate};
use std::borrow::Cow;

type FieldAccessor = fn(&Advocate) -> Cow<'_, str>;

/// 自由文字搜尋涵蓋的欄位：全名、城市、學位、電話
const SEARCHABLE_FIELDS: [FieldAccessor; 4] = [full_name_field, city_field, degree_field, phone_field];

fn full_name_field(advocate: &Advocate) -> Cow<'_, str> {
    Cow::Owned(advocate.full_name())
}

fn city_field(advocate: &Advocate) -> Cow<'_, str> {
    Cow::Borrowed(&advocate.city)
}

fn degree_field(advocate: &Advocate) -> Cow<'_, str> {
    Cow::Borrowed(&advocate.degree)
}

fn phone_field(advocate: &Advocate) -> Cow<'_, str> {
    Cow::Owned(advocate.phone_number.to_string())
}

/// Return the records that satisfy the search term and every active filter,
/// in their original order.
pub fn refine<'a>(
    records: &'a [Advocate],
    search_term: &str,
    filters: &ActiveFilters,
) -> Vec<&'a Advocate> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|advocate| matches_all(advocate, &needle, filters))
        .collect()
}

fn matches_all(advocate: &Advocate, needle: &str, filters: &ActiveFilters) -> bool {
    matches_search(advocate, needle)
        && matches_specialty(advocate, &filters.specialty)
        && matches_exact(&advocate.city, &filters.city)
        && matches_exact(&advocate.degree, &filters.degree)
        && matches_experience(advocate, &filters.experience_range)
}

/// `needle` must already be lower-cased.
fn matches_search(advocate: &Advocate, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    SEARCHABLE_FIELDS
        .iter()
        .any(|field| field(advocate).to_lowercase().contains(needle))
}

fn matches_specialty(advocate: &Advocate, specialty: &str) -> bool {
    specialty.is_empty() || advocate.specialties.iter().any(|s| s == specialty)
}

fn matches_exact(value: &str, selected: &str) -> bool {
    selected.is_empty() || value == selected
}

fn matches_experience(advocate: &Advocate, label: &str) -> bool {
    // 未知的區間標籤一律排除
    find_experience_range(label)
        .map(|range| range.contains(advocate.years_of_experience))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::too_many_arguments)]
    fn advocate(
        id: u64,
        first: &str,
        last: &str,
        city: &str,
        degree: &str,
        specialties: &[&str],
        years: f64,
        phone: u64,
    ) -> Advocate {
        Advocate {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            years_of_experience: years,
            phone_number: phone,
        }
    }

    fn scenario() -> Vec<Advocate> {
        vec![
            advocate(1, "John", "Doe", "Springfield", "MD", &["Cardiology"], 3.0, 5551234),
            advocate(2, "Jane", "Smith", "Shelbyville", "PhD", &["Psychology"], 12.0, 5555678),
        ]
    }

    fn directory() -> Vec<Advocate> {
        vec![
            advocate(1, "John", "Doe", "New York", "MD", &["Bipolar", "LGBTQ"], 10.0, 5551234567),
            advocate(2, "Jane", "Smith", "Los Angeles", "PhD", &["Trauma & PTSD"], 8.0, 5559876543),
            advocate(3, "Alice", "Johnson", "Chicago", "MSW", &["Eating disorders"], 0.5, 5554567890),
            advocate(4, "Michael", "Brown", "Houston", "MD", &["Bipolar"], 1.0, 5556543210),
            advocate(5, "Emily", "Davis", "Phoenix", "PhD", &["LGBTQ", "Trauma & PTSD"], 5.0, 5553210987),
            advocate(6, "Chris", "Martinez", "New York", "MSW", &[], 15.0, 5557890123),
        ]
    }

    fn refine_owned(records: &[Advocate], term: &str, filters: &ActiveFilters) -> Vec<Advocate> {
        refine(records, term, filters).into_iter().cloned().collect()
    }

    fn ids(refined: &[&Advocate]) -> Vec<u64> {
        refined.iter().map(|a| a.id).collect()
    }

    fn with_range(label: &str) -> ActiveFilters {
        ActiveFilters {
            experience_range: label.to_string(),
            ..ActiveFilters::default()
        }
    }

    #[test]
    fn test_scenario_search_by_first_name() {
        let records = scenario();
        let refined = refine(&records, "jane", &ActiveFilters::default());
        assert_eq!(ids(&refined), vec![2]);
    }

    #[test]
    fn test_scenario_specialty_filter() {
        let records = scenario();
        let filters = ActiveFilters {
            specialty: "Cardiology".to_string(),
            ..ActiveFilters::default()
        };
        assert_eq!(ids(&refine(&records, "", &filters)), vec![1]);
    }

    #[test]
    fn test_scenario_experience_filter() {
        let records = scenario();
        assert_eq!(ids(&refine(&records, "", &with_range("10+ years"))), vec![2]);
    }

    #[test]
    fn test_unconstrained_refinement_is_identity() {
        let records = directory();
        let refined = refine_owned(&records, "", &ActiveFilters::default());
        assert_eq!(refined, records);

        let empty: Vec<Advocate> = Vec::new();
        assert!(refine(&empty, "anything", &ActiveFilters::default()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_full_name() {
        let records = directory();
        assert_eq!(ids(&refine(&records, "JOHN DOE", &ActiveFilters::default())), vec![1]);
        // "john" also appears in "Alice Johnson"
        assert_eq!(ids(&refine(&records, "john", &ActiveFilters::default())), vec![1, 3]);
        assert_eq!(ids(&refine(&records, "e j", &ActiveFilters::default())), vec![3]);
    }

    #[test]
    fn test_search_covers_city_degree_and_phone() {
        let records = directory();
        let defaults = ActiveFilters::default();
        assert_eq!(ids(&refine(&records, "new york", &defaults)), vec![1, 6]);
        assert_eq!(ids(&refine(&records, "msw", &defaults)), vec![3, 6]);
        assert_eq!(ids(&refine(&records, "987654", &defaults)), vec![2]);
    }

    #[test]
    fn test_search_ignores_specialties_and_years() {
        let records = directory();
        let defaults = ActiveFilters::default();
        assert!(refine(&records, "bipolar", &defaults).is_empty());
        assert!(refine(&records, "trauma", &defaults).is_empty());
        // 15 years only appears as experience, never in the searchable fields
        assert!(refine(&records, "15.0", &defaults).is_empty());
    }

    #[test]
    fn test_search_soundness_and_completeness() {
        let records = directory();
        for term in ["a", "Ne", "md", "555", "son", "zzz", "ph"] {
            let needle = term.to_lowercase();
            let refined = refine(&records, term, &ActiveFilters::default());
            let matched: Vec<u64> = ids(&refined);
            for advocate in &records {
                let hit = [
                    advocate.full_name(),
                    advocate.city.clone(),
                    advocate.degree.clone(),
                    advocate.phone_number.to_string(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
                assert_eq!(hit, matched.contains(&advocate.id), "term {:?}, id {}", term, advocate.id);
            }
        }
    }

    #[test]
    fn test_categorical_filters_are_exact() {
        let records = directory();
        let filters = ActiveFilters {
            city: "New York".to_string(),
            ..ActiveFilters::default()
        };
        assert_eq!(ids(&refine(&records, "", &filters)), vec![1, 6]);

        let lower_case_city = ActiveFilters {
            city: "new york".to_string(),
            ..ActiveFilters::default()
        };
        assert!(refine(&records, "", &lower_case_city).is_empty());

        let degree = ActiveFilters {
            degree: "PhD".to_string(),
            ..ActiveFilters::default()
        };
        assert_eq!(ids(&refine(&records, "", &degree)), vec![2, 5]);

        let partial_specialty = ActiveFilters {
            specialty: "Trauma".to_string(),
            ..ActiveFilters::default()
        };
        assert!(refine(&records, "", &partial_specialty).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let records = directory();
        let filters = ActiveFilters {
            specialty: "LGBTQ".to_string(),
            city: String::new(),
            degree: "PhD".to_string(),
            experience_range: "5 to 10 years".to_string(),
        };
        assert_eq!(ids(&refine(&records, "", &filters)), vec![5]);
        assert!(refine(&records, "davis", &filters).len() == 1);
        assert!(refine(&records, "doe", &filters).is_empty());
    }

    #[test]
    fn test_experience_boundaries_are_half_open() {
        let records = directory();
        assert_eq!(ids(&refine(&records, "", &with_range("Less than 1 year"))), vec![3]);
        assert_eq!(ids(&refine(&records, "", &with_range("1 to 5 years"))), vec![4]);
        assert_eq!(ids(&refine(&records, "", &with_range("5 to 10 years"))), vec![2, 5]);
        assert_eq!(ids(&refine(&records, "", &with_range("10+ years"))), vec![1, 6]);
    }

    #[test]
    fn test_unknown_experience_range_excludes_everything() {
        let records = directory();
        assert!(refine(&records, "", &with_range("A long time")).is_empty());
        assert!(refine(&records, "", &with_range("")).is_empty());
    }

    #[test]
    fn test_refine_is_idempotent() {
        let records = directory();
        let filters = ActiveFilters {
            degree: "MD".to_string(),
            ..ActiveFilters::default()
        };
        let once = refine_owned(&records, "o", &filters);
        let twice = refine_owned(&once, "o", &filters);
        assert_eq!(once, twice);
    }
}
