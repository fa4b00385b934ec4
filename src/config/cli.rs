use crate::app::render::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "advocate-directory")]
#[command(about = "Search and filter the advocate directory")]
pub struct CliConfig {
    /// Record source endpoint returning `{"data": [...]}`
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Read advocates from a local JSON file instead of the endpoint
    #[arg(long)]
    pub input_file: Option<String>,

    /// TOML configuration file
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Extra request header, `Name: value`
    #[arg(long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// Free-text search over name, city, degree and phone number
    #[arg(long, short = 's')]
    pub search: Option<String>,

    #[arg(long)]
    pub specialty: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub degree: Option<String>,

    /// Experience range label, e.g. "1 to 5 years"
    #[arg(long)]
    pub experience: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "List available specialties, cities and degrees")]
    pub options: bool,

    #[arg(long, help = "List experience ranges")]
    pub ranges: bool,

    #[arg(long, short = 'i', help = "Read commands from stdin")]
    pub interactive: bool,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "advocate-directory",
            "--api-endpoint",
            "http://localhost:3000/api/advocates",
            "-s",
            "jane",
            "--experience",
            "10+ years",
            "--format",
            "json",
            "--header",
            "x-api-key: secret",
            "--options",
        ]);

        assert_eq!(config.search.as_deref(), Some("jane"));
        assert_eq!(config.experience.as_deref(), Some("10+ years"));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.headers, vec!["x-api-key: secret".to_string()]);
        assert!(config.options);
        assert!(!config.interactive);
    }
}
