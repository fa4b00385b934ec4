use crate::adapters::parse_payload;
use crate::domain::model::Advocate;
use crate::domain::ports::{ConfigProvider, RecordSource};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// 透過 `GET` 取得 `{ "data": [...] }` 的記錄來源
pub struct HttpRecordSource {
    client: Client,
    endpoint: String,
    headers: HashMap<String, String>,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            headers: HashMap::new(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut source = Self::new(
            config.api_endpoint(),
            Duration::from_secs(config.timeout_seconds()),
        )?;
        source.headers = config.headers();
        Ok(source)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<Vec<Advocate>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let mut request = self.client.get(&self.endpoint);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // 後端失敗時回傳 `{ "error": "..." }`
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(DirectoryError::SourceStatusError {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let records = parse_payload(&self.endpoint, &body)?;
        tracing::debug!("Decoded {} advocates from {}", records.len(), self.endpoint);
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.endpoint)
    }
}
