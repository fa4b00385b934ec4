use crate::domain::model::Advocate;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// 提供完整、未篩選的記錄清單
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Advocate>>;

    /// 用於日誌的來源描述
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn input_file(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> HashMap<String, String>;
}

#[async_trait]
impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    async fn fetch(&self) -> Result<Vec<Advocate>> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
