use anyhow::Context;
use clap::Parser;
use dishly::config::rules::RulesConfig;
use dishly::core::tags::TagRuleTable;
use dishly::utils::{logger, validation::Validate};
use dishly::{CliConfig, LocalStorage, SummaryEngine, SummaryPipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dishly CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let rules = match config.rules_file.as_deref() {
        Some(path) => RulesConfig::from_file(path)
            .with_context(|| format!("failed to load rule table from {path}"))?
            .into_table()?,
        None => TagRuleTable::builtin(),
    };

    if config.list_tags {
        for tag in rules.vocabulary() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = SummaryPipeline::new(storage, config, rules);
    let engine = SummaryEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Selection summary completed successfully!");
            println!("✅ Selection summary completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Selection summary failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
