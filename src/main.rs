//! wpup - WordPress packages updater CLI tool
//!
//! Re-installs every `@wordpress/*` package declared in package.json at
//! the requested dist-tag by running `yarn add <pkg>@<tag> ...`.

use clap::Parser;
use std::process::ExitCode;
use wpup::cli::CliArgs;
use wpup::updater::{Updater, UpdaterConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = UpdaterConfig::new().with_dist_tag(args.dist_tag);
    let updater = Updater::new(config);

    let status = updater.run().await;

    // Installer exit codes outside u8 range collapse to a generic failure
    ExitCode::from(u8::try_from(status).unwrap_or(1))
}
