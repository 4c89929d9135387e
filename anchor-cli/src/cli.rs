use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "anchor", version, about = "ADU pricing and proposal estimates")]
pub struct Cli {
    /// Directory holding the persisted pricing blobs (overrides app config)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute an itemized estimate for a project selection document
    Estimate {
        /// Path to the selection JSON
        #[arg(long)]
        input: String,
    },
    /// Inspect or modify the pricing configuration
    Pricing {
        #[command(subcommand)]
        command: PricingCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum PricingCommands {
    /// Print the resolved configuration
    Show,
    /// Apply a configuration-changed notification document
    Apply {
        /// Path to the update JSON
        #[arg(long)]
        input: String,
    },
    /// Print the bundled default pricing document in HOL shape
    Seed,
}
