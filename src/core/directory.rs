use crate::core::options::FilterOptionsCache;
use crate::core::state::RefinementState;
use crate::domain::model::{Advocate, FilterOptions, RecordSet};
use crate::domain::ports::RecordSource;
use crate::utils::error::DirectoryError;
use chrono::{DateTime, Utc};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch advocates.";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded { count: usize, at: DateTime<Utc> },
    Failed { message: String },
}

/// 一個使用者工作階段：記錄集合、載入狀態、篩選狀態與選項快取
pub struct Directory<S: RecordSource> {
    source: S,
    records: RecordSet,
    next_version: u64,
    status: LoadStatus,
    last_error: Option<DirectoryError>,
    state: RefinementState,
    options: FilterOptionsCache,
}

impl<S: RecordSource> Directory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            records: RecordSet::empty(),
            next_version: 1,
            status: LoadStatus::Idle,
            last_error: None,
            state: RefinementState::default(),
            options: FilterOptionsCache::new(),
        }
    }

    pub fn with_state(mut self, state: RefinementState) -> Self {
        self.state = state;
        self
    }

    /// Fetch from the source and replace the record set wholesale.
    ///
    /// A failed fetch never propagates: the record set becomes empty, the
    /// status turns into [`LoadStatus::Failed`] and the error is kept in
    /// [`Directory::last_error`]. No retry is attempted. If the returned
    /// future is dropped mid-fetch the status stays [`LoadStatus::Loading`]
    /// and the previous record set is kept.
    pub async fn load(&mut self) -> &LoadStatus {
        self.status = LoadStatus::Loading;
        tracing::info!("Loading advocates from {}", self.source.describe());

        let (records, status, error) = match self.source.fetch().await {
            Ok(records) => {
                tracing::info!("✅ Loaded {} advocates", records.len());
                let status = LoadStatus::Loaded {
                    count: records.len(),
                    at: Utc::now(),
                };
                (records, status, None)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Failed to fetch advocates: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                let status = LoadStatus::Failed {
                    message: FETCH_FAILED_MESSAGE.to_string(),
                };
                (Vec::new(), status, Some(e))
            }
        };

        self.records = RecordSet::new(self.next_version, records);
        self.next_version += 1;
        self.status = status;
        self.last_error = error;
        &self.status
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn last_error(&self) -> Option<&DirectoryError> {
        self.last_error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn record_set(&self) -> &RecordSet {
        &self.records
    }

    pub fn records(&self) -> &[Advocate] {
        self.records.records()
    }

    pub fn state(&self) -> &RefinementState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RefinementState {
        &mut self.state
    }

    pub fn refined(&self) -> Vec<&Advocate> {
        self.state.apply(self.records.records())
    }

    pub fn filter_options(&mut self) -> &FilterOptions {
        self.options.get(&self.records)
    }

    pub fn reset(&mut self) {
        tracing::debug!("Resetting search term and filters");
        self.state.reset();
    }
}
