//! Clap adapter for bootfig.
//!
//! Compiled only with the `clap` Cargo feature (on by default). [`BootArgs`]
//! embeds into a service's own `#[derive(Parser)]` struct via
//! `#[command(flatten)]` and gives it `--config <PATH>` plus
//! `check|show|gen` subcommands.
//!
//! The bridge to the core is [`BootArgs::into_action()`], which yields a
//! [`ConfigAction`](crate::ConfigAction) or `None` when the service should
//! simply start.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use confique::Config;

use crate::builder::BootfigBuilder;
use crate::types::ConfigAction;

#[derive(Debug, Args)]
pub struct BootArgs {
    /// Path to the configuration file (default: config/config.toml).
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub action: Option<BootSubcommand>,
}

/// Available configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum BootSubcommand {
    /// Load the configuration and resolve all placeholders, then exit.
    Check,
    /// Print resolved configuration with environment-supplied values redacted.
    Show,
    /// Generate a commented sample configuration file.
    Gen {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl BootArgs {
    /// Point `builder` at `--config` when it was given.
    pub fn apply<C: Config>(&self, builder: BootfigBuilder<C>) -> BootfigBuilder<C> {
        match &self.config {
            Some(path) => builder.path(path.clone()),
            None => builder,
        }
    }

    /// `None` means no subcommand: run the service.
    pub fn into_action(self) -> Option<ConfigAction> {
        self.action.map(|action| match action {
            BootSubcommand::Check => ConfigAction::Check,
            BootSubcommand::Show => ConfigAction::Show,
            BootSubcommand::Gen { output } => ConfigAction::Gen { output },
        })
    }
}
