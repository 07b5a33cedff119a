#![doc = include_str!("../README.md")]

use clap::Parser;
use medialane_core::models::RangeError;
use medialane_store::StoreError;
use std::path::PathBuf;

mod catalog;
pub use catalog::{CatalogError, JsonCatalog, Simulated};

mod commands;
pub use commands::*;

mod config;
pub use config::{AppConfig, CatalogConfig, ViewConfig};

mod io;
pub use io::*;

// The top-level arguments: an optional config file and the subcommand to execute
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "MEDIALANE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig { view, catalog } = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::View {
                io,
                kind,
                filters,
                page,
            } => {
                let criteria = filters.criteria(view.sort).map_err(CliError::from)?;
                let request = page.request(view.per_page);
                kind.view(&io, catalog.latency, &criteria, request).await?;
            }
            Commands::Summary { io, kind, filters } => {
                let criteria = filters.criteria(view.sort).map_err(CliError::from)?;
                kind.summary(&io, catalog.latency, &criteria).await?;
            }
            Commands::Trade { io, actions } => {
                replay(&io, &actions).await?;
            }
            Commands::Schema {
                kind,
                summary,
                output,
            } => {
                commands::emit(&output, &kind.schema(summary))?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("invalid time range: {0}")]
    Range(#[from] RangeError),
    #[error("action {index} was refused: {err}")]
    Refused {
        index: usize,
        #[source]
        err: StoreError,
    },
}
