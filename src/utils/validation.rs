use crate::domain::model::find_experience_range;
use crate::utils::error::{DirectoryError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> DirectoryError {
    DirectoryError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 記錄來源只接受 http(s)
pub fn validate_url(field: &str, raw: &str) -> Result<()> {
    if raw.is_empty() {
        return Err(invalid(field, raw, "URL cannot be empty"));
    }
    let url = Url::parse(raw).map_err(|e| invalid(field, raw, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(field, raw, format!("Unsupported URL scheme: {}", scheme))),
    }
}

pub fn validate_positive_number(field: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(field, value, format!("Value must be at least {}", min_value)));
    }
    Ok(())
}

/// 本機記錄檔：非空、無 NUL、副檔名為 `.json`
pub fn validate_json_file(field: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field, path, "Path contains null bytes"));
    }
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(()),
        Some(ext) => Err(invalid(
            field,
            path,
            format!("Unsupported file extension: {}. Expected a .json file", ext),
        )),
        None => Err(invalid(field, path, "File has no extension or invalid filename")),
    }
}

/// 年資區間必須是固定清單中的標籤
pub fn validate_experience_range(field: &str, label: &str) -> Result<()> {
    match find_experience_range(label) {
        Some(_) => Ok(()),
        None => Err(invalid(field, label, "Unknown experience range")),
    }
}
