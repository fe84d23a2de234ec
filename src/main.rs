// systran8-provider - SYSTRAN 8 machine translation provider for localization hosts
// Author: kelexine (https://github.com/kelexine)

use anyhow::{Context, Result};
use clap::Parser;
use systran8_provider::cli::Args;
use systran8_provider::config::{LoggingConfig, ServerSettings};
use systran8_provider::models::{SuggestionRequest, TranslationRequest};
use systran8_provider::utils::logging;
use systran8_provider::{Systran8Provider, TranslationProvider};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&LoggingConfig {
        level: args.log_level.clone(),
        format: args.log_format.clone(),
    })?;
    info!("Starting systran8-provider v{}", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.clone().unwrap_or_else(ServerSettings::default_path);
    let mut provider = Systran8Provider::from_config_file(&config_path)
        .with_context(|| format!("Failed to create provider from {}", config_path.display()))?;

    println!("{} - {}", provider.display_name(), provider.description());

    if args.list_targets {
        for target in provider.get_targets(&args.source)? {
            println!("{}", target);
        }
        return Ok(());
    }

    for target in &args.targets {
        if !provider.is_supported(&args.source, target)? {
            println!("{} > {} is not supported", args.source, target);
            continue;
        }
        provider.initialize(&args.source, target, None)?;

        let request_id = uuid::Uuid::new_v4().simple().to_string();
        let response = provider.translate(&TranslationRequest::new(&request_id, &args.text))?;
        println!("Translate from {} to {}", args.source, target);
        println!("   {}", response.source);
        match response.target() {
            Some(translated) => println!("   {}", translated),
            None => {
                for error in response.errors() {
                    println!("   {}", error.message());
                }
            }
        }

        let suggestions = provider.suggest(&SuggestionRequest::new(&request_id, &args.text))?;
        for suggestion in suggestions.iter().filter_map(|s| s.target()) {
            println!("   suggestion: {}", suggestion);
        }
    }

    Ok(())
}
