use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// 一位 advocate 的名錄資料，載入後不可變
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: f64,
    pub phone_number: u64,
}

impl Advocate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// 記錄來源的回應格式 `{ "data": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvocatesPayload {
    pub data: Vec<Advocate>,
}

/// 一次載入得到的完整記錄集合，`version` 作為快取鍵
#[derive(Debug, Clone)]
pub struct RecordSet {
    version: u64,
    records: Arc<[Advocate]>,
}

impl RecordSet {
    pub fn new(version: u64, records: Vec<Advocate>) -> Self {
        Self {
            version,
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn records(&self) -> &[Advocate] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Named half-open bucket `[min, max)` over years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExperienceRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ExperienceRange {
    pub fn contains(&self, years: f64) -> bool {
        years >= self.min && years < self.max
    }
}

pub const ANY_EXPERIENCE: &str = "Any";

pub const EXPERIENCE_RANGES: [ExperienceRange; 5] = [
    ExperienceRange {
        label: ANY_EXPERIENCE,
        min: 0.0,
        max: f64::INFINITY,
    },
    ExperienceRange {
        label: "Less than 1 year",
        min: 0.0,
        max: 1.0,
    },
    ExperienceRange {
        label: "1 to 5 years",
        min: 1.0,
        max: 5.0,
    },
    ExperienceRange {
        label: "5 to 10 years",
        min: 5.0,
        max: 10.0,
    },
    ExperienceRange {
        label: "10+ years",
        min: 10.0,
        max: f64::INFINITY,
    },
];

pub fn find_experience_range(label: &str) -> Option<&'static ExperienceRange> {
    EXPERIENCE_RANGES.iter().find(|range| range.label == label)
}

/// 使用者目前選取的篩選條件，空字串代表不限制
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveFilters {
    pub specialty: String,
    pub city: String,
    pub degree: String,
    pub experience_range: String,
}

impl Default for ActiveFilters {
    fn default() -> Self {
        Self {
            specialty: String::new(),
            city: String::new(),
            degree: String::new(),
            experience_range: ANY_EXPERIENCE.to_string(),
        }
    }
}

/// Distinct values available as categorical filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub specialties: BTreeSet<String>,
    pub cities: BTreeSet<String>,
    pub degrees: BTreeSet<String>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.specialties.is_empty() && self.cities.is_empty() && self.degrees.is_empty()
    }
}
