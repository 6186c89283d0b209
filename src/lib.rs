//! wpup - WordPress packages updater library
//!
//! This library provides the core functionality for re-installing all
//! `@wordpress/*` packages declared in a project's package.json at a
//! chosen distribution tag (e.g. `latest`, `next`) by delegating to the
//! package manager.

pub mod cli;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod updater;
