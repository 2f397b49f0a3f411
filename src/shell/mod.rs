//! Interactive line input.
//!
//! A [`LineSource`] hands the interpreter one line at a time and handles the shell builtins itself:
//! - `exit` prints `Goodbye!` and ends input.
//! - `history` prints every line entered so far.
//! - Blank lines are skipped.
//!
//! [`Shell`] reads from any `BufRead` (pipes, files, tests); [`EditorShell`] wraps `rustyline` for terminals.

use std::io::{self, BufRead, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

pub const PROMPT: &str = "$ ";
pub const GOODBYE_MSG: &str = "Goodbye!";

const EXIT_BUILTIN: &str = "exit";
const HISTORY_BUILTIN: &str = "history";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("shell error: {0}")]
    Io(#[from] io::Error),

    #[error("shell error: {0}")]
    Readline(#[from] ReadlineError),
}

/// A source of interpreter input, one line per call.
pub trait LineSource {
    /// The next line to execute, or `None` once input is over.
    fn read_line(&mut self) -> Result<Option<String>, ShellError>;
}

/// What to do with a raw input line.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Exit,
    History,
    Skip,
    Line,
}

/// Builtins match the whole line exactly; ` exit ` is an ordinary line.
fn classify(line: &str) -> Action {
    match line {
        EXIT_BUILTIN => Action::Exit,
        HISTORY_BUILTIN => Action::History,
        _ if line.trim().is_empty() => Action::Skip,
        _ => Action::Line,
    }
}

/// Lines a shell has handed out, printed by the `history` builtin.
#[derive(Debug, Default)]
struct History {
    lines: Vec<String>,
}

impl History {
    fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.lines.join("\n"))?;
        out.flush()
    }
}

// ============================================================================
// Buffered reader shell
// ============================================================================

/// Line source over any buffered reader.
pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
    interactive: bool,
    history: History,
}

impl Shell<io::StdinLock<'static>, io::Stdout> {
    /// Read from stdin, prompting only when `interactive` (stdin is a terminal).
    pub fn stdin(interactive: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), interactive)
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
            history: History::default(),
        }
    }

    /// Lines accepted so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history.lines
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.interactive {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> LineSource for Shell<R, W> {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            self.prompt()?;

            // Invalid UTF-8 becomes U+FFFD, which the scanner reports as ILLEGAL.
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);

            match classify(line) {
                Action::Exit => {
                    writeln!(self.output, "{GOODBYE_MSG}")?;
                    self.output.flush()?;
                    return Ok(None);
                }
                Action::History => self.history.print(&mut self.output)?,
                Action::Skip => {}
                Action::Line => {
                    self.history.lines.push(line.to_string());
                    return Ok(Some(line.to_string()));
                }
            }
        }
    }
}

// ============================================================================
// Line editor shell
// ============================================================================

/// Line source over a `rustyline` editor, with arrow-key history.
pub struct EditorShell {
    editor: DefaultEditor,
    history: History,
}

impl EditorShell {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            history: History::default(),
        })
    }
}

impl LineSource for EditorShell {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => match classify(&line) {
                    Action::Exit => {
                        println!("{GOODBYE_MSG}");
                        return Ok(None);
                    }
                    Action::History => self.history.print(&mut io::stdout())?,
                    Action::Skip => {}
                    Action::Line => {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            tracing::debug!(error = %e, "failed to record history entry");
                        }
                        self.history.lines.push(line.clone());
                        return Ok(Some(line));
                    }
                },
                // Ctrl-C drops the current line.
                Err(ReadlineError::Interrupted) => {}
                // Ctrl-D
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(input: &str, interactive: bool) -> Shell<&[u8], Vec<u8>> {
        Shell::new(input.as_bytes(), Vec::new(), interactive)
    }

    fn byte_shell(input: &[u8]) -> Shell<&[u8], Vec<u8>> {
        Shell::new(input, Vec::new(), false)
    }

    fn drain(shell: &mut impl LineSource) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = shell.read_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_read_lines() {
        let mut s = shell("status\r\ncreate_parking_lot 2\n", false);
        assert_eq!(drain(&mut s), ["status", "create_parking_lot 2"]);
        // Input stays closed.
        assert_eq!(s.read_line().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut s = shell("status", false);
        assert_eq!(drain(&mut s), ["status"]);
    }

    #[test]
    fn test_prompt_only_when_interactive() {
        let mut s = shell("status\n", true);
        s.read_line().unwrap();
        assert_eq!(String::from_utf8(s.into_output()).unwrap(), "$ ");

        let mut s = shell("status\n", false);
        s.read_line().unwrap();
        assert!(s.into_output().is_empty());
    }

    #[test]
    fn test_exit_builtin() {
        let mut s = shell("status\nexit\nleave 1\n", false);
        assert_eq!(drain(&mut s), ["status"]);
        assert_eq!(String::from_utf8(s.into_output()).unwrap(), "Goodbye!\n");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut s = shell("\n   \n\tstatus\n", true);
        assert_eq!(drain(&mut s), ["\tstatus"]);
        // One prompt per line read, plus one for the final EOF.
        assert_eq!(String::from_utf8(s.into_output()).unwrap(), "$ ".repeat(4));
    }

    #[test]
    fn test_history_builtin() {
        let mut s = shell("status\nleave 1\nhistory\n", false);
        assert_eq!(drain(&mut s), ["status", "leave 1"]);
        assert_eq!(s.history(), ["status", "leave 1"]);
        assert_eq!(String::from_utf8(s.into_output()).unwrap(), "status\nleave 1\n");
    }

    #[test]
    fn test_builtins_are_not_recorded() {
        let mut s = shell("history\nstatus\nhistory\n", false);
        drain(&mut s);
        assert_eq!(s.history(), ["status"]);
        assert_eq!(String::from_utf8(s.into_output()).unwrap(), "\nstatus\n");
    }

    #[test]
    fn test_builtins_match_whole_line() {
        let mut s = shell(" exit \nhistory \nexit\n", false);
        assert_eq!(drain(&mut s), [" exit ", "history "]);
        assert_eq!(String::from_utf8(s.into_output()).unwrap(), "Goodbye!\n");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_input() {
        let mut s = byte_shell(b"create_parking_lot 1\npark \xff\xfe White\nstatus\n");
        assert_eq!(
            drain(&mut s),
            ["create_parking_lot 1", "park \u{fffd}\u{fffd} White", "status"]
        );
    }

    #[test]
    fn test_invalid_utf8_builtin_is_a_line() {
        let mut s = byte_shell(b"exit\xff\nexit\n");
        assert_eq!(drain(&mut s), ["exit\u{fffd}"]);
    }
}
