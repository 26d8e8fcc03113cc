use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Returns
    /// A boxed ReportFormatter trait object appropriate for this format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Recommend dependency versions from BOM descriptors
#[derive(Parser, Debug)]
#[command(name = "bom-advisor")]
#[command(version = "0.3.0")]
#[command(about = "Recommend dependency versions from BOM descriptors", long_about = None)]
pub struct Args {
    /// Maven-layout repository root to resolve descriptors from
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Declared dependency in group:artifact:version notation.
    /// Can be specified multiple times: -d "org.x:bom:1.0" -d "org.y:app:2.0"
    #[arg(short, long = "dependency", value_name = "COORDINATE")]
    pub dependency: Vec<String>,

    /// Coordinate to look up in group:artifact notation.
    /// If none are given, every recommendation is reported.
    #[arg(short, long = "query", value_name = "MODULE")]
    pub query: Vec<String>,

    /// Build-level property in key=value notation, offered to descriptor
    /// interpolation. Can be specified multiple times.
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE")]
    pub property: Vec<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a config file (defaults to ./bom-advisor.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
