use std::io::Write;

use colored::Colorize;
use eyre::{Result, WrapErr};
use log::info;

use crate::convert::{interpret, Outcome};
use crate::filter::Filter;
use crate::globals::{PROGRAM, PROMPT, VERSION};
use crate::session::input::{Input, LineSource};

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    EndOfInput,
    Quit,
    Interrupted,
}

pub fn print_header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", format!("{PROGRAM}, version {VERSION}.").bold())?;
    writeln!(out)?;
    writeln!(out, "Enter numbers with a suffix, e.g. 2a98h 110101b 8916")?;
    writeln!(out, "for a hexadecimal, a binary and a decimal respectively.")?;
    writeln!(out)
}

/// Describes a partial filter; prints nothing for the full or empty filter.
pub fn print_filter<W: Write>(filter: &Filter, arg: &str, out: &mut W) -> std::io::Result<()> {
    if filter.is_partial() {
        writeln!(out, "Using filter: {arg} (only {})", filter.describe())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Ends the terminal line the user was typing on.
pub fn interrupted<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    out.flush()
}

/// Runs the interactive loop until input ends, the user quits, or Ctrl-C.
///
/// `arg` is the filter argument as typed, empty when none was given.
pub fn run<S, W>(filter: &Filter, arg: &str, source: &mut S, out: &mut W) -> Result<Exit>
where
    S: LineSource + ?Sized,
    W: Write,
{
    print_header(out).wrap_err("Failed to write header")?;
    print_filter(filter, arg, out).wrap_err("Failed to write filter")?;

    loop {
        writeln!(out, "{PROMPT}")?;
        out.flush()?;

        let line = match source.next_line()? {
            Input::Line(line) => line,
            Input::Eof => {
                info!("end of input");
                return Ok(Exit::EndOfInput);
            }
            Input::Interrupted => {
                interrupted(out)?;
                info!("interrupted");
                return Ok(Exit::Interrupted);
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        writeln!(out)?;
        if interpret(line, filter, out)? == Outcome::Quit {
            out.flush()?;
            info!("quit command received");
            return Ok(Exit::Quit);
        }
    }
}
