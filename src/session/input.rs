use std::io::BufRead;

use eyre::{Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Eof,
    Interrupted,
}

/// Somewhere lines come from: a terminal editor, a pipe, a test buffer.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Input>;
}

/// Line editor for interactive use. Reports Ctrl-C as [`Input::Interrupted`].
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().wrap_err("Failed to initialize the line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn next_line(&mut self) -> Result<Input> {
        match self.editor.readline("") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(err) => Err(err).wrap_err("Failed to read from terminal"),
        }
    }
}

/// Plain buffered reader, used when stdin is not a terminal.
pub struct Piped<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Piped<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for Piped<R> {
    fn next_line(&mut self) -> Result<Input> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .wrap_err("Failed to read from standard input")?;
        if read == 0 {
            return Ok(Input::Eof);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Input::Line(line))
    }
}
