use crate::domain::model::{Advocate, FilterOptions, RecordSet};

/// 從記錄集合推導篩選選項（專長攤平、城市、學位），皆去重
pub fn derive_filter_options(records: &[Advocate]) -> FilterOptions {
    let mut options = FilterOptions::default();

    for advocate in records {
        options
            .specialties
            .extend(advocate.specialties.iter().cloned());
        options.cities.insert(advocate.city.clone());
        options.degrees.insert(advocate.degree.clone());
    }

    options
}

/// Memoized [`derive_filter_options`], keyed on the record set's version token.
#[derive(Debug, Default)]
pub struct FilterOptionsCache {
    version: Option<u64>,
    options: FilterOptions,
}

impl FilterOptionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, record_set: &RecordSet) -> &FilterOptions {
        if self.version != Some(record_set.version()) {
            tracing::debug!(
                "Deriving filter options for record set v{} ({} records)",
                record_set.version(),
                record_set.len()
            );
            self.options = derive_filter_options(record_set.records());
            self.version = Some(record_set.version());
        }
        &self.options
    }

    pub fn cached_version(&self) -> Option<u64> {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate(id: u64, city: &str, degree: &str, specialties: &[&str]) -> Advocate {
        Advocate {
            id,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            years_of_experience: 2.0,
            phone_number: 5550000 + id,
        }
    }

    fn sample() -> Vec<Advocate> {
        vec![
            advocate(1, "Springfield", "MD", &["Cardiology", "Bipolar"]),
            advocate(2, "Shelbyville", "PhD", &["Psychology", "Bipolar"]),
            advocate(3, "Springfield", "MSW", &[]),
        ]
    }

    fn values(set: &std::collections::BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_empty_records_yield_empty_options() {
        let options = derive_filter_options(&[]);
        assert!(options.specialties.is_empty());
        assert!(options.cities.is_empty());
        assert!(options.degrees.is_empty());
        assert!(options.is_empty());
    }

    #[test]
    fn test_options_are_distinct() {
        let options = derive_filter_options(&sample());
        assert_eq!(values(&options.specialties), vec!["Bipolar", "Cardiology", "Psychology"]);
        assert_eq!(values(&options.cities), vec!["Shelbyville", "Springfield"]);
        assert_eq!(values(&options.degrees), vec!["MD", "MSW", "PhD"]);
    }

    #[test]
    fn test_options_independent_of_record_order() {
        let records = sample();
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(derive_filter_options(&records), derive_filter_options(&reversed));
    }

    #[test]
    fn test_cache_recomputes_only_on_version_change() {
        let mut cache = FilterOptionsCache::new();
        assert_eq!(cache.cached_version(), None);

        let first = RecordSet::new(1, sample());
        assert_eq!(cache.get(&first).cities.len(), 2);
        assert_eq!(cache.cached_version(), Some(1));

        // 同版本但內容不同：仍回傳快取結果
        let same_version = RecordSet::new(1, Vec::new());
        assert_eq!(cache.get(&same_version).cities.len(), 2);

        let second = RecordSet::new(2, vec![advocate(9, "Capital City", "DO", &["Sleep"])]);
        let options = cache.get(&second);
        assert_eq!(values(&options.cities), vec!["Capital City"]);
        assert_eq!(cache.cached_version(), Some(2));
    }
}
