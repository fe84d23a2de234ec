// CLI module for systran8-provider
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// systran8-provider - exercise a SYSTRAN 8 server through the provider contract
#[derive(Parser, Debug)]
#[command(name = "systran8-provider", version, about, long_about = None)]
pub struct Args {
    /// JSON settings file with `Url` and `Key`
    #[arg(short, long, env = "SYSTRAN8_SETTINGS")]
    pub config: Option<PathBuf>,

    /// Source locale
    #[arg(short, long, default_value = "en-US")]
    pub source: String,

    /// Target locales, tried in order
    #[arg(short, long = "target", default_values_t = ["zh-Hans".to_string(), "fr".to_string()])]
    pub targets: Vec<String>,

    /// Text to translate
    #[arg(long, default_value = "The dog is blue.")]
    pub text: String,

    /// Only list the locales reachable from the source locale
    #[arg(long)]
    pub list_targets: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log format (pretty, json)
    #[arg(long, default_value = "pretty")]
    pub log_format: String,
}
