use crate::core::refine::refine;
use crate::domain::model::{ActiveFilters, Advocate};

/// 搜尋字串與篩選條件合併成單一狀態，reset 時一起還原
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefinementState {
    search_term: String,
    filters: ActiveFilters,
}

impl RefinementState {
    pub fn new(search_term: impl Into<String>, filters: ActiveFilters) -> Self {
        Self {
            search_term: search_term.into(),
            filters,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_specialty(&mut self, specialty: impl Into<String>) {
        self.filters.specialty = specialty.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.filters.city = city.into();
    }

    pub fn set_degree(&mut self, degree: impl Into<String>) {
        self.filters.degree = degree.into();
    }

    pub fn set_experience_range(&mut self, label: impl Into<String>) {
        self.filters.experience_range = label.into();
    }

    pub fn set_filters(&mut self, filters: ActiveFilters) {
        self.filters = filters;
    }

    /// Restore the empty search term and default filters in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply<'a>(&self, records: &'a [Advocate]) -> Vec<&'a Advocate> {
        refine(records, &self.search_term, &self.filters)
    }
}
