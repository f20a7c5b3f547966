use std::io::{self, Write};

use colored::Colorize;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::base::Base;
use crate::errors::FilterError;

/// One line per accepted code, sorted by code, e.g. `  b - binary`.
pub fn accepted_codes() -> Vec<String> {
	Base::sorted_by_code()
		.into_iter()
		.map(|base| format!("  {} - {}", base.code(), base.name()))
		.collect()
}

/// Picks two distinct codes at random and builds an example invocation.
///
/// Returns `None` if fewer than two codes exist.
pub fn usage_example<R: Rng + ?Sized>(rng: &mut R, program: &str) -> Option<String> {
	let codes: Vec<char> = Base::sorted_by_code().iter().map(|base| base.code()).collect();
	if codes.len() < 2 {
		return None;
	}
	let picked: String = codes.choose_multiple(rng, 2).collect();
	Some(format!("Usage example: {program} {picked}"))
}

/// Writes the guidance shown before the program exits on a bad filter.
pub fn report<W: Write, R: Rng + ?Sized>(
	err: &FilterError,
	out: &mut W,
	rng: &mut R,
	program: &str,
) -> io::Result<()> {
	match err {
		FilterError::TooManyArguments => {
			writeln!(out, "{}", "Too many arguments.".red())?;
			writeln!(out, "Usage: {program} [FILTER]")?;
		}
		FilterError::InvalidCode(_) => {
			writeln!(out, "{}", "Filter is invalid.".red())?;
			writeln!(out, "Accepted filter codes:")?;
			for line in accepted_codes() {
				writeln!(out, "{line}")?;
			}
			if let Some(example) = usage_example(rng, program) {
				writeln!(out, "{example}")?;
			}
		}
	}
	Ok(())
}
