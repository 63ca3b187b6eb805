//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the run result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary table plus the full report.
    Full,
    /// Report Markdown only.
    Report,
    /// Whole outcome as JSON.
    Json,
}

/// 戦略コンサルティング・マルチエージェント分析
#[derive(Debug, Parser)]
#[command(name = "consilium", version, about)]
pub struct Cli {
    /// Client name
    #[arg(short = 'c', long)]
    pub client: Option<String>,

    /// Industry
    #[arg(short = 'i', long)]
    pub industry: Option<String>,

    /// Business challenge to analyze
    #[arg(long)]
    pub challenge: Option<String>,

    /// JSON data file with analysis buckets
    #[arg(short = 'f', long)]
    pub data_file: Option<PathBuf>,

    /// Fetch missing buckets from the model before the analysis
    #[arg(long)]
    pub fetch: bool,

    /// Save the fetched client profile as JSON
    #[arg(long, requires = "fetch")]
    pub save_data: Option<PathBuf>,

    /// Run with the bundled sample project instead of CLI inputs
    #[arg(long, conflicts_with_all = ["client", "data_file"])]
    pub sample: bool,

    /// Write the report Markdown to this path
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Disable the inter-agent dialogue stage
    #[arg(long)]
    pub no_dialogue: bool,

    /// Append run lifecycle events to this JSONL file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Full)]
    pub format: OutputFormat,

    /// Explicit configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip configuration files and use built-in defaults
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress bars and banners
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation_parses() {
        let cli = Cli::parse_from(["consilium", "--sample"]);
        assert!(cli.sample);
        assert_eq!(cli.format, OutputFormat::Full);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_project_flags() {
        let cli = Cli::parse_from([
            "consilium",
            "-c",
            "サンプル企業",
            "-i",
            "IT業界",
            "--challenge",
            "市場シェア拡大",
            "--no-dialogue",
            "-vv",
        ]);
        assert_eq!(cli.client.as_deref(), Some("サンプル企業"));
        assert!(cli.no_dialogue);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_sample_conflicts_with_client() {
        let result = Cli::try_parse_from(["consilium", "--sample", "-c", "A社"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_data_requires_fetch() {
        let result = Cli::try_parse_from(["consilium", "--save-data", "out.json"]);
        assert!(result.is_err());
    }
}
