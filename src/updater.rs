//! WordPress package update workflow
//!
//! This module provides:
//! - Workflow coordination: load manifest → filter → install
//! - The `@wordpress/` namespace filter over both dependency groups
//! - Installer invocation with the configured dist-tag

use crate::error::ManifestError;
use crate::installer::{CommandRunner, SystemCommandRunner};
use crate::manifest::PackageJson;
use colored::Colorize;
use std::path::PathBuf;

/// Namespace prefix identifying WordPress packages
pub const WORDPRESS_NAMESPACE: &str = "@wordpress/";

/// Package manager used to install packages
const INSTALLER: &str = "yarn";

/// Configuration for the updater
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Distribution tag to install (e.g. "latest", "next")
    pub dist_tag: String,
    /// Path to the package.json file
    pub manifest_path: PathBuf,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            dist_tag: "latest".to_string(),
            manifest_path: PathBuf::from("package.json"),
        }
    }
}

impl UpdaterConfig {
    /// Creates a config with the default tag and manifest path
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distribution tag (builder pattern)
    pub fn with_dist_tag(mut self, dist_tag: impl Into<String>) -> Self {
        self.dist_tag = dist_tag.into();
        self
    }

    /// Sets the manifest path (builder pattern)
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }
}

/// Result of an installer invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Exit status of the installer (0 on success)
    pub status: i32,
}

/// Updates all `@wordpress/*` packages declared in package.json to the
/// configured dist-tag
pub struct Updater<R: CommandRunner> {
    config: UpdaterConfig,
    runner: R,
}

impl Updater<SystemCommandRunner> {
    /// Create an updater that spawns the real installer
    pub fn new(config: UpdaterConfig) -> Self {
        Self::with_runner(config, SystemCommandRunner::new())
    }
}

impl<R: CommandRunner> Updater<R> {
    /// Create an updater with a custom command runner (for testing)
    pub fn with_runner(config: UpdaterConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Returns the names of all WordPress packages in the manifest.
    ///
    /// Regular dependencies come first, then devDependencies, each in
    /// declaration order. Duplicates across the two groups are kept.
    pub fn wordpress_packages(&self, manifest: &PackageJson) -> Vec<String> {
        manifest
            .dependencies
            .keys()
            .chain(manifest.dev_dependencies.keys())
            .filter(|name| name.starts_with(WORDPRESS_NAMESPACE))
            .cloned()
            .collect()
    }

    /// Installs the given packages at the configured dist-tag.
    ///
    /// An empty list is a no-op success. A spawn failure is reported
    /// and mapped to status 1 rather than propagated.
    pub fn install_packages(&self, packages: &[String]) -> InstallOutcome {
        if packages.is_empty() {
            println!("No WordPress packages found to update.");
            return InstallOutcome { status: 0 };
        }

        println!(
            "Updating {} WordPress packages to '{}'...",
            packages.len().to_string().green(),
            self.config.dist_tag.cyan()
        );

        let mut args = Vec::with_capacity(packages.len() + 1);
        args.push("add".to_string());
        args.extend(
            packages
                .iter()
                .map(|name| format!("{}@{}", name, self.config.dist_tag)),
        );

        match self.runner.run(INSTALLER, &args) {
            Ok(status) => InstallOutcome { status },
            Err(e) => {
                eprintln!("{} Error updating packages: {}", "✗".red(), e);
                InstallOutcome { status: 1 }
            }
        }
    }

    /// Loads the manifest, filters WordPress packages and installs
    /// them, returning the installer's exit status
    pub async fn try_run(&self) -> Result<i32, ManifestError> {
        let manifest = PackageJson::load(&self.config.manifest_path).await?;
        let packages = self.wordpress_packages(&manifest);
        Ok(self.install_packages(&packages).status)
    }

    /// Runs the update workflow, mapping any failure to exit code 1
    pub async fn run(&self) -> i32 {
        match self.try_run().await {
            Ok(status) => status,
            Err(e) => {
                eprintln!("{} Failed to update packages: {}", "✗".red(), e);
                1
            }
        }
    }
}
