//! Command routing logic for CLI

use anyhow::Context;
use tidykit_gen::derive_generate_config;
use tracing::debug;

use crate::args::{Cli, Commands};
use crate::commands;

/// Resolve config (fatal when the key is missing), then run one subcommand.
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let cfg_generate = derive_generate_config(&cli.config_sources())
        .context("Chưa cấu hình API Key trong Secrets!")?;
    debug!(?cfg_generate, "config resolved");

    match cli.command {
        Commands::Normalize {
            file,
            out_dir,
            preview,
            phone_policy,
        } => {
            commands::normalize::run(&file, out_dir.as_deref(), preview, phone_policy.into())?;
            Ok(())
        }
        Commands::Generate { product, style } => {
            commands::generate::run(cfg_generate, &product, style.map(Into::into)).await
        }
    }
}
