use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::info;

use crate::filter::{self, Filter};
use crate::globals::{PROGRAM, USAGE_EXIT_CODE};
use crate::session::{self, LineSource, Piped, Terminal};

/// Ctrl-C outside the line editor (piped input, or mid-conversion) ends the
/// line and exits cleanly. The editor catches Ctrl-C itself in raw mode.
fn install_interrupt_handler() -> Result<()> {
	ctrlc::set_handler(|| {
		let _ = session::interrupted(&mut io::stdout());
		info!("interrupted");
		process::exit(0);
	})
	.wrap_err("Failed to set Ctrl+C handler")
}

/// Interactively converts numbers between binary, octal, decimal and hexadecimal.
///
/// Type numbers with a base suffix (b, o, d, h), e.g. `2a98h 110101b 8916`.
/// A number without a suffix is decimal. Type `quit`, `exit` or `stop` to leave.
#[derive(Parser)]
#[command(name = PROGRAM, version)]
pub struct Cli {
	/// Bases to show, any of b, o, d, h (e.g. `hd` for hexadecimal and decimal)
	#[arg(allow_hyphen_values = true)]
	pub filter: Option<String>,

	#[arg(hide = true, allow_hyphen_values = true)]
	pub extra: Vec<String>,
}

impl Cli {
	/// Positional arguments as typed, filter first.
	fn positionals(&self) -> Vec<String> {
		self.filter.iter().chain(self.extra.iter()).cloned().collect()
	}

	pub fn run(&self) -> Result<()> {
		if !io::stdout().is_terminal() {
			colored::control::set_override(false);
		}

		let filter = match Filter::from_args(&self.positionals()) {
			Ok(filter) => filter,
			Err(err) => {
				info!("rejected arguments: {err}");
				let mut rng = rand::thread_rng();
				filter::report(&err, &mut io::stdout().lock(), &mut rng, PROGRAM)
					.wrap_err("Failed to print usage")?;
				process::exit(USAGE_EXIT_CODE);
			}
		};
		info!("showing {} base(s)", filter.len());
		install_interrupt_handler()?;

		let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
			Box::new(Terminal::new()?)
		} else {
			Box::new(Piped::new(io::stdin().lock()))
		};
		let arg = self.filter.as_deref().unwrap_or_default();
		// Unlocked so the interrupt handler can still write.
		let exit = session::run(&filter, arg, &mut *source, &mut io::stdout())?;
		info!("session ended: {exit:?}");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::errors::FilterError;

	#[test]
	fn no_arguments() {
		let cli = Cli::try_parse_from(["baseconv"]).unwrap();
		assert!(cli.positionals().is_empty());
		assert_eq!(Filter::from_args(&cli.positionals()), Ok(Filter::all()));
	}

	#[test]
	fn single_filter_argument() {
		let cli = Cli::try_parse_from(["baseconv", "hd"]).unwrap();
		assert_eq!(cli.filter.as_deref(), Some("hd"));
		assert_eq!(Filter::from_args(&cli.positionals()), Filter::parse("hd"));
	}

	#[test]
	fn empty_filter_argument() {
		let cli = Cli::try_parse_from(["baseconv", ""]).unwrap();
		let filter = Filter::from_args(&cli.positionals()).unwrap();
		assert!(filter.is_empty());
	}

	#[test]
	fn extra_arguments_are_collected() {
		let cli = Cli::try_parse_from(["baseconv", "h", "d", "b"]).unwrap();
		assert_eq!(cli.positionals(), vec!["h", "d", "b"]);
		assert_eq!(
			Filter::from_args(&cli.positionals()),
			Err(FilterError::TooManyArguments)
		);
	}

	#[test]
	fn hyphenated_filter_reaches_the_filter_parser() {
		let cli = Cli::try_parse_from(["baseconv", "-b"]).unwrap();
		assert_eq!(cli.filter.as_deref(), Some("-b"));
		assert_eq!(
			Filter::from_args(&cli.positionals()),
			Err(FilterError::InvalidCode('-'))
		);
	}

	#[test]
	fn hyphenated_extra_argument_is_too_many() {
		let cli = Cli::try_parse_from(["baseconv", "12", "-x"]).unwrap();
		assert_eq!(cli.positionals(), vec!["12", "-x"]);
		assert_eq!(
			Filter::from_args(&cli.positionals()),
			Err(FilterError::TooManyArguments)
		);
	}

	#[test]
	fn help_and_version_still_work() {
		let help = Cli::try_parse_from(["baseconv", "--help"]).err().unwrap();
		assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
		let version = Cli::try_parse_from(["baseconv", "--version"]).err().unwrap();
		assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
	}

	#[test]
	fn command_definition_is_valid() {
		use clap::CommandFactory;
		Cli::command().debug_assert();
	}
}
