#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::app::render::OutputFormat;
use crate::core::{ConfigProvider, RefinementState};
use crate::domain::model::ActiveFilters;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{
    validate_experience_range, validate_json_file, validate_positive_number,
    validate_url, Validate,
};
use std::collections::HashMap;
use toml_config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};

/// 合併命令列與 TOML 後的最終設定：命令列 > TOML > 預設值
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_endpoint: String,
    pub input_file: Option<String>,
    pub timeout_seconds: u64,
    pub headers: HashMap<String, String>,
    pub format: OutputFormat,
    pub search: String,
    pub filters: ActiveFilters,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            input_file: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            headers: HashMap::new(),
            format: OutputFormat::default(),
            search: String::new(),
            filters: ActiveFilters::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            api_endpoint: config.api_endpoint().to_string(),
            input_file: config.input_file().map(str::to_string),
            timeout_seconds: config.timeout_seconds(),
            headers: config.headers(),
            format: config.display.format.unwrap_or_default(),
            search: config.filters.search.clone().unwrap_or_default(),
            filters: config.filters.to_active_filters(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Self::from_toml(&toml)
            }
            None => Self::default(),
        };

        if let Some(endpoint) = &cli.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(file) = &cli.input_file {
            settings.input_file = Some(file.clone());
        }
        if let Some(timeout) = cli.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        for header in &cli.headers {
            let (name, value) = parse_header(header)?;
            settings.headers.insert(name, value);
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }
        if let Some(search) = &cli.search {
            settings.search = search.clone();
        }
        if let Some(specialty) = &cli.specialty {
            settings.filters.specialty = specialty.clone();
        }
        if let Some(city) = &cli.city {
            settings.filters.city = city.clone();
        }
        if let Some(degree) = &cli.degree {
            settings.filters.degree = degree.clone();
        }
        if let Some(experience) = &cli.experience {
            settings.filters.experience_range = experience.clone();
        }

        Ok(settings)
    }

    pub fn initial_state(&self) -> RefinementState {
        RefinementState::new(self.search.clone(), self.filters.clone())
    }
}

/// 解析 `Name: value` 形式的標頭
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(DirectoryError::InvalidConfigValueError {
            field: "header".to_string(),
            value: raw.to_string(),
            reason: "Expected `Name: value`".to_string(),
        }),
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn input_file(&self) -> Option<&str> {
        self.input_file.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        match &self.input_file {
            Some(file) => {
                validate_json_file("input_file", file)?;
            }
            None => validate_url("api_endpoint", &self.api_endpoint)?,
        }
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_experience_range("experience_range", &self.filters.experience_range)?;
        Ok(())
    }
}
