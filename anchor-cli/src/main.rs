mod cli;

use std::fs;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anchor_catalog::default_hol_document;
use anchor_core::project::ProjectSelection;
use anchor_core::validate::validate_selection;
use anchor_core::CoreError;
use anchor_quote::EstimateGenerator;
use anchor_store::app_config::Config;
use anchor_store::{ConfigUpdate, FileBlobStore, OverrideStore};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "anchor_cli=info,anchor_store=info,anchor_catalog=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::Cli::parse();

    let config = Config::load().context("Failed to load config")?;
    let data_dir = args.data_dir.unwrap_or(config.storage.data_dir);
    tracing::info!("Using pricing data in {}", data_dir);

    let store = OverrideStore::open(Box::new(FileBlobStore::new(&data_dir)));

    match args.command {
        cli::Commands::Estimate { input } => {
            let raw = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input))?;
            let selection: ProjectSelection =
                serde_json::from_str(&raw).context("Selection document is not valid JSON")?;

            if let Err(errors) = validate_selection(&selection) {
                eprintln!("{}", serde_json::to_string_pretty(&errors)?);
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                return Err(CoreError::Validation(fields.join(", ")).into());
            }

            let estimate = EstimateGenerator::new(&store).generate(&selection);
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }
        cli::Commands::Pricing { command } => match command {
            cli::PricingCommands::Show => {
                println!("{}", serde_json::to_string_pretty(&store.get_configuration())?);
            }
            cli::PricingCommands::Apply { input } => {
                let raw = fs::read_to_string(&input)
                    .with_context(|| format!("Failed to read {}", input))?;
                let update: ConfigUpdate = serde_json::from_str(&raw)
                    .context("Update document is not a recognized notification payload")?;
                store.apply_update(update);
                println!("{}", serde_json::to_string_pretty(&store.get_configuration())?);
            }
            cli::PricingCommands::Seed => {
                println!("{}", serde_json::to_string_pretty(&default_hol_document())?);
            }
        },
    }

    Ok(())
}
