//! CLI argument parsing module for wpup

use clap::Parser;

/// WordPress packages updater
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wpup",
    version,
    about = "Updates @wordpress/* packages to a chosen dist-tag"
)]
pub struct CliArgs {
    /// Distribution tag to install (e.g. "latest", "next")
    #[arg(long, default_value = "latest")]
    pub dist_tag: String,
}
