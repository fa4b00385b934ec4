use crate::app::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::domain::model::ActiveFilters;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{
    validate_experience_range, validate_json_file, validate_positive_number,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/advocates";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub display: DisplayConfig,
    pub filters: FiltersConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub file: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<OutputFormat>,
}

/// 啟動時套用的初始搜尋與篩選條件（reset 仍回到預設值）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiltersConfig {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub city: Option<String>,
    pub degree: Option<String>,
    pub experience_range: Option<String>,
}

impl FiltersConfig {
    pub fn to_active_filters(&self) -> ActiveFilters {
        let defaults = ActiveFilters::default();
        ActiveFilters {
            specialty: self.specialty.clone().unwrap_or(defaults.specialty),
            city: self.city.clone().unwrap_or(defaults.city),
            degree: self.degree.clone().unwrap_or(defaults.degree),
            experience_range: self
                .experience_range
                .clone()
                .unwrap_or(defaults.experience_range),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn input_file(&self) -> Option<&str> {
        self.source.file.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        TomlConfig::timeout_seconds(self)
    }

    fn headers(&self) -> HashMap<String, String> {
        self.source.headers.clone().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.source.endpoint {
            validate_url("source.endpoint", endpoint)?;
        }

        if let Some(file) = &self.source.file {
            validate_json_file("source.file", file)?;
        }

        validate_positive_number("source.timeout_seconds", self.timeout_seconds(), 1)?;

        if let Some(label) = &self.filters.experience_range {
            validate_experience_range("filters.experience_range", label)?;
        }

        Ok(())
    }
}
