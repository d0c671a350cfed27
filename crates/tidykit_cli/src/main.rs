//! `tidykit` command-line front end.
//!
//! - `tidykit normalize <file.xlsx>` : clean name/phone/date columns, write `Da_Sua_<file>`
//! - `tidykit generate --product ..` : request marketing copy from Gemini
//!
//! The API key (`GEMINI_KEY`, `.env` or `.streamlit/secrets.toml`) is checked
//! before any subcommand runs.

mod args;
mod commands;
mod router;

use clap::Parser;

use crate::args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env-backed flags.
    dotenvy::dotenv().ok();

    // RUST_LOG=debug for per-column details.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    router::route(cli).await
}
