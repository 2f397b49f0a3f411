//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use lot_syntax::{lexer, parser};

use crate::database::Database;
use crate::exec::Executor;
use crate::shell::{EditorShell, LineSource, Shell, ShellError};

use super::diagnostic;
use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, rejecting missing or oversized files.
pub fn read_source(path: &Path) -> CliResult<String> {
    let name = path.display();
    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("source file {name}: {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "source file {name} is too large ({} bytes, max {MAX_SOURCE_SIZE} bytes)",
            metadata.len()
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("reading source code error: {e}")))
}

/// Parse and execute a whole source file against `db`.
///
/// A syntax error anywhere in the file stops everything before the first statement runs. Statement failures are
/// reported on stderr and do not change the exit code.
pub fn run_file(path: &Path, db: &mut Database) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let program = parser::parse_source(&source)
        .map_err(|errors| CliError::failure(diagnostic::render(&errors, &path.to_string_lossy(), &source)))?;

    let summary = Executor::stdio().execute(&program, db);
    tracing::info!(executed = summary.executed, failed = summary.failed, "program finished");
    Ok(ExitCode::SUCCESS)
}

/// Run the interactive shell on stdin until `exit` or end of input.
pub fn start_shell(db: &mut Database) -> CliResult<ExitCode> {
    let mut exec = Executor::stdio();
    let result = if io::stdin().is_terminal() {
        let mut shell = EditorShell::new().map_err(|e| CliError::failure(e.to_string()))?;
        run_session(&mut shell, &mut exec, db)
    } else {
        run_session(&mut Shell::stdin(false), &mut exec, db)
    };

    result.map_err(|e| CliError::failure(e.to_string()))?;
    Ok(ExitCode::SUCCESS)
}

/// Parse and execute every line from `lines`, sharing `db` across lines.
///
/// A line that fails to parse is reported as `parsing error: ...` and skipped.
pub fn run_session<L, O, E>(lines: &mut L, exec: &mut Executor<O, E>, db: &mut Database) -> Result<(), ShellError>
where
    L: LineSource + ?Sized,
    O: Write,
    E: Write,
{
    while let Some(line) = lines.read_line()? {
        match parser::parse_source(&line) {
            Ok(program) => {
                exec.execute(&program, db);
            }
            Err(errors) => exec.report_error(&format!("parsing error: {errors}")),
        }
    }
    Ok(())
}

/// Tokenize a file and print one token per line: `pos<TAB>KIND<TAB>literal`.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let mut out = io::stdout().lock();
    write_tokens(&mut out, &source).map_err(|e| CliError::failure(format!("writing output: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

fn write_tokens(out: &mut impl Write, source: &str) -> io::Result<()> {
    for token in lexer::lex(source) {
        writeln!(out, "{}\t{}\t{}", token.pos(), token.kind, token.literal)?;
    }
    out.flush()
}

/// Parse a file and print its canonical rendering.
pub fn parse_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    match parser::parse_source(&source) {
        Ok(program) => {
            if !program.is_empty() {
                println!("{program}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => Err(CliError::failure(diagnostic::render(
            &errors,
            &path.to_string_lossy(),
            &source,
        ))),
    }
}
