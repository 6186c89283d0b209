//! External installer invocation
//!
//! This module provides:
//! - A command-runner trait so the installer call is mockable in tests
//! - The system implementation that spawns the real process

use std::io;
use std::process::Command;

/// Trait for running an external command synchronously
pub trait CommandRunner {
    /// Run the command and return its exit code.
    ///
    /// The child inherits the parent's standard streams, so installer
    /// output goes directly to the user.
    fn run(&self, program: &str, args: &[String]) -> io::Result<i32>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[String]) -> io::Result<i32> {
        (**self).run(program, args)
    }
}

/// Default command runner that executes real processes
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Create a new system command runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<i32> {
        // .status() inherits stdio and blocks until the child exits
        let status = Command::new(program).args(args).status()?;

        // A missing code means the child was killed by a signal
        Ok(status.code().unwrap_or(1))
    }
}
