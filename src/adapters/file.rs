use crate::adapters::parse_payload;
use crate::domain::model::Advocate;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// 從本機 JSON 檔案讀取記錄（與 HTTP 回應相同格式）
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn fetch(&self) -> Result<Vec<Advocate>> {
        tracing::debug!("Reading advocates from {}", self.path.display());
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_payload(&self.path.display().to_string(), &body)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
