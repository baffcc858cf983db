use crate::utils::error::Result;
use crate::utils::validation::{validate_bind_addr, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "replay-notables")]
#[command(about = "Summarizes the furthest and final eliminations of a decoded match record")]
pub struct CliConfig {
    /// Path to a decoded match record file. Omitting it prints `{}`.
    pub replay_path: Option<String>,

    #[arg(long, help = "Run the HTTP upload service instead of a one-shot parse")]
    pub serve: bool,

    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.serve {
            validate_bind_addr("bind", &self.bind)?;
        }

        // The replay path is never validated here: any missing or
        // unusable path is a soft failure that prints `{}`, not a
        // startup error.
        Ok(())
    }
}
