//! CLI module for the lot interpreter
//!
//! ## Modes
//!
//! - `lot FILE` - Execute a source file (batch mode)
//! - `lot` - Start the interactive shell, one statement line at a time
//! - `lot --lex FILE` / `lot --parse FILE` - Debug views of the frontend
//!
//! ## Modules
//!
//! - `commands` - Mode implementations
//! - `diagnostic` - miette rendering of syntax errors
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod diagnostic;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::database::{Database, StorageKind};
use crate::version::LOT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parking lot command interpreter
#[derive(Parser, Debug)]
#[command(name = "lot")]
#[command(version = LOT_VERSION)]
#[command(about = "Parking lot command interpreter", long_about = None)]
pub struct Cli {
    /// Source file to execute; starts the interactive shell when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Type of storage [memory|file]
    #[arg(long, value_name = "TYPE", default_value_t = StorageKind::Memory)]
    pub storage: StorageKind,

    /// File to store the database in (file storage only)
    #[arg(long = "storage-file", value_name = "PATH")]
    pub storage_file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,
}

impl Cli {
    /// Check flag combinations clap cannot express.
    pub fn validate(&self) -> CliResult<()> {
        match (self.storage, &self.storage_file) {
            (StorageKind::Memory, Some(_)) => Err(CliError::failure(
                r#"--storage-file flag is not allowed with "memory" storage"#,
            )),
            (StorageKind::File, None) => Err(CliError::failure(
                r#"with "file" storage type flag --storage-file is required"#,
            )),
            _ => Ok(()),
        }
    }

    fn open_database(&self) -> Database {
        tracing::info!(storage = %self.storage, "opening database");
        Database::open(self.storage, self.storage_file.clone())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file);
    }

    cli.validate()?;
    let mut db = cli.open_database();

    match &cli.file {
        Some(file) => {
            tracing::info!(file = %file.display(), "batch mode");
            commands::run_file(file, &mut db)
        }
        None => {
            tracing::info!("interactive mode");
            commands::start_shell(&mut db)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
