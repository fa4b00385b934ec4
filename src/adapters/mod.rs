// Adapters layer: concrete record sources (http, local file).

pub mod file;
pub mod http;

pub use file::FileRecordSource;
pub use http::HttpRecordSource;

use crate::domain::model::{Advocate, AdvocatesPayload};
use crate::domain::ports::{ConfigProvider, RecordSource};
use crate::utils::error::{DirectoryError, Result};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum PayloadDocument {
    Wrapped(AdvocatesPayload),
    Bare(Vec<Advocate>),
}

/// 解析 `{ "data": [...] }`，也接受單純的陣列
pub(crate) fn parse_payload(origin: &str, body: &str) -> Result<Vec<Advocate>> {
    match serde_json::from_str::<PayloadDocument>(body) {
        Ok(PayloadDocument::Wrapped(payload)) => Ok(payload.data),
        Ok(PayloadDocument::Bare(records)) => Ok(records),
        Err(e) => Err(DirectoryError::MalformedPayloadError {
            origin: origin.to_string(),
            message: e.to_string(),
        }),
    }
}

/// 依設定選擇來源：有 input_file 就讀本機檔案，否則走 HTTP
pub fn source_from_config<C: ConfigProvider>(config: &C) -> Result<Box<dyn RecordSource>> {
    match config.input_file() {
        Some(path) => Ok(Box::new(FileRecordSource::new(path))),
        None => Ok(Box::new(HttpRecordSource::from_config(config)?)),
    }
}
