//! Integration tests for wpup
//!
//! These tests verify:
//! - Manifest loading from disk feeding the filter
//! - The full load → filter → install pipeline through the public API
//! - Command-runner injection from outside the crate

use std::fs;
use std::io;
use std::sync::Mutex;
use tempfile::TempDir;
use wpup::installer::CommandRunner;
use wpup::manifest::PackageJson;
use wpup::updater::{Updater, UpdaterConfig};

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Command runner that records invocations instead of spawning
#[derive(Default)]
struct RecordingRunner {
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingRunner {
    fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<i32> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        Ok(0)
    }
}

#[tokio::test]
async fn test_load_and_filter_realistic_manifest() {
    let temp_dir = create_test_dir();
    let path = temp_dir.path().join("package.json");

    let package_json = r#"{
  "name": "gutenberg-plugin",
  "version": "1.0.0",
  "dependencies": {
    "@wordpress/api-fetch": "^6.0.0",
    "react": "^17.0.0",
    "@wordpress/blocks": "^11.0.0",
    "lodash": "^4.17.21"
  },
  "devDependencies": {
    "@wordpress/scripts": "^19.0.0",
    "jest": "^27.0.0"
  }
}"#;
    fs::write(&path, package_json).unwrap();

    let manifest = PackageJson::load(&path).await.unwrap();
    let runner = RecordingRunner::default();
    let updater = Updater::with_runner(UpdaterConfig::new(), &runner);
    let packages = updater.wordpress_packages(&manifest);

    assert_eq!(
        packages,
        vec![
            "@wordpress/api-fetch",
            "@wordpress/blocks",
            "@wordpress/scripts"
        ]
    );
}

#[tokio::test]
async fn test_pipeline_passes_tagged_packages_to_installer() {
    let temp_dir = create_test_dir();
    let path = temp_dir.path().join("package.json");
    fs::write(
        &path,
        r#"{
  "dependencies": {
    "@wordpress/api-fetch": "^6.0.0"
  },
  "devDependencies": {
    "@wordpress/scripts": "^19.0.0"
  }
}"#,
    )
    .unwrap();

    let config = UpdaterConfig::new()
        .with_dist_tag("next")
        .with_manifest_path(&path);
    let runner = RecordingRunner::default();
    let updater = Updater::with_runner(config, &runner);

    let status = updater.run().await;
    assert_eq!(status, 0);

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    let (program, args) = &calls[0];
    assert_eq!(program, "yarn");
    assert_eq!(
        args,
        &vec![
            "add".to_string(),
            "@wordpress/api-fetch@next".to_string(),
            "@wordpress/scripts@next".to_string()
        ]
    );
}

#[tokio::test]
async fn test_pipeline_without_wordpress_packages_skips_installer() {
    let temp_dir = create_test_dir();
    let path = temp_dir.path().join("package.json");
    fs::write(
        &path,
        r#"{
  "dependencies": {
    "react": "^17.0.0"
  }
}"#,
    )
    .unwrap();

    let config = UpdaterConfig::new().with_manifest_path(&path);
    let runner = RecordingRunner::default();
    let updater = Updater::with_runner(config, &runner);

    let status = updater.run().await;
    assert_eq!(status, 0);
    assert!(runner.calls().is_empty());
}
