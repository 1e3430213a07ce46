//! Compile/Run Orchestration
//!
//! Writes submitted source to an ephemeral build directory, drives the
//! external compiler and simulator, and folds their output into a
//! [`RunOutcome`]. The build directory is removed on every exit path,
//! including timeouts and spawn failures.

pub mod runner;

pub use runner::ToolOutput;

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::annotate::{self, DiagnosticRecord};
use crate::config::Config;

const SOURCE_FILE: &str = "design.v";
const ARTIFACT_FILE: &str = "design.out";

/// External compiler and simulator, as configured at startup.
///
/// The compiler is invoked as `<compiler> -o <artifact> <source>` and is
/// expected to exit non-zero with line-referenced diagnostics on stderr.
/// The simulator is invoked as `<simulator> <artifact>`.
#[derive(Debug, Clone)]
pub struct Toolchain {
    compiler: PathBuf,
    simulator: PathBuf,
    timeout: Duration,
}

/// Result of one compile-and-run cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The compiler rejected the source.
    CompileError {
        errors: Vec<DiagnosticRecord>,
        raw: String,
    },
    /// The source compiled but the simulated program failed.
    RuntimeError { stdout: String, stderr: String },
    /// Compiled and ran to completion.
    Success { stdout: String, stderr: String },
}

impl Toolchain {
    pub fn new(compiler: PathBuf, simulator: PathBuf, timeout: Duration) -> Self {
        Self {
            compiler,
            simulator,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.compiler.clone(),
            config.simulator.clone(),
            config.tool_timeout,
        )
    }

    /// Compile `source` and, on success, simulate the produced artifact.
    ///
    /// Compiler rejection and simulator failure are ordinary outcomes, not
    /// errors; `Err` means the toolchain itself misbehaved (missing
    /// executable, timeout, unwritable build directory).
    pub fn compile_and_run(&self, source: &str) -> Result<RunOutcome> {
        let build_dir = tempfile::tempdir().context("creating build directory")?;
        let source_path = build_dir.path().join(SOURCE_FILE);
        let artifact_path = build_dir.path().join(ARTIFACT_FILE);
        fs::write(&source_path, source).context("writing source file")?;

        let mut compile = Command::new(&self.compiler);
        compile.arg("-o").arg(&artifact_path).arg(&source_path);
        let compiled = runner::run_with_timeout(compile, "compiler", self.timeout)?;

        if !compiled.success {
            log::info!("compile failed, annotating diagnostics");
            let errors = annotate::annotate(&compiled.stderr, source);
            return Ok(RunOutcome::CompileError {
                errors,
                raw: compiled.stderr,
            });
        }

        let mut simulate = Command::new(&self.simulator);
        simulate.arg(&artifact_path);
        let ran = runner::run_with_timeout(simulate, "simulator", self.timeout)?;

        if ran.success {
            Ok(RunOutcome::Success {
                stdout: ran.stdout,
                stderr: ran.stderr,
            })
        } else {
            log::info!("simulated program exited non-zero");
            Ok(RunOutcome::RuntimeError {
                stdout: ran.stdout,
                stderr: ran.stderr,
            })
        }
    }
}
