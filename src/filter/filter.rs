use std::collections::BTreeSet;

use itertools::Itertools;

use crate::base::Base;
use crate::errors::FilterError;

/// The bases shown during a session.
///
/// Besides the set itself, the filter remembers the order in which the codes
/// were typed so the "Using filter" line reads the way the user wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
	shown: BTreeSet<Base>,
	typed: Vec<Base>,
}

impl Filter {
	/// Shows every base.
	pub fn all() -> Self {
		Self {
			shown: Base::ALL.into_iter().collect(),
			typed: Base::ALL.to_vec(),
		}
	}

	/// Parses a filter argument such as `hd`.
	///
	/// An empty argument is valid and yields an empty filter.
	pub fn parse(arg: &str) -> Result<Self, FilterError> {
		let typed = arg
			.chars()
			.map(|c| Base::from_code(c).ok_or(FilterError::InvalidCode(c)))
			.collect::<Result<Vec<_>, _>>()?
			.into_iter()
			.unique()
			.collect::<Vec<_>>();

		Ok(Self {
			shown: typed.iter().copied().collect(),
			typed,
		})
	}

	/// Builds the filter from the positional arguments after the program name.
	pub fn from_args(args: &[String]) -> Result<Self, FilterError> {
		match args {
			[] => Ok(Self::all()),
			[arg] => Self::parse(arg),
			_ => Err(FilterError::TooManyArguments),
		}
	}

	/// Shown bases in table order (binary, octal, decimal, hexadecimal).
	pub fn iter(&self) -> impl Iterator<Item = Base> + '_ {
		self.shown.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.shown.len()
	}

	pub fn is_empty(&self) -> bool {
		self.shown.is_empty()
	}

	/// True when some, but not all, bases are shown.
	pub fn is_partial(&self) -> bool {
		!self.is_empty() && self.len() < Base::ALL.len()
	}

	/// Spells the filter out in words, e.g. `binary, decimal and hexadecimal`.
	pub fn describe(&self) -> String {
		let names: Vec<&str> = self.typed.iter().map(|base| base.name()).collect();
		match names.split_last() {
			None => String::new(),
			Some((last, [])) => last.to_string(),
			Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
		}
	}
}
