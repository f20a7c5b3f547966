use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use log::debug;

use crate::convert::token::{classify, parse_digits, Token};
use crate::errors::TokenError;
use crate::filter::Filter;

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Writes a blank line when dropped, whatever happened to the token.
struct BlankLineAfter<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> BlankLineAfter<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> Deref for BlankLineAfter<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        &*self.out
    }
}

impl<W: Write> DerefMut for BlankLineAfter<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut *self.out
    }
}

impl<W: Write> Drop for BlankLineAfter<'_, W> {
    fn drop(&mut self) {
        // Drop cannot report failures; the next write will.
        let _ = writeln!(self.out);
    }
}

/// Converts every token on `line`, one block of output per token.
///
/// Invalid numbers are reported inline. A quit command stops the line and
/// returns [`Outcome::Quit`].
pub fn interpret<W: Write>(line: &str, filter: &Filter, out: &mut W) -> io::Result<Outcome> {
    for token in line.split_whitespace() {
        let mut spaced = BlankLineAfter::new(out);
        match transform(token, filter, &mut *spaced) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => return Ok(Outcome::Quit),
            Err(err @ TokenError::Invalid(_)) => {
                debug!("rejected token {token:?}");
                writeln!(spaced, "{err}")?;
            }
            Err(TokenError::Io(err)) => return Err(err),
        }
    }
    Ok(Outcome::Continue)
}

/// Prints `token` in every base of `filter` except its own.
pub fn transform<W: Write>(token: &str, filter: &Filter, out: &mut W) -> Result<Outcome, TokenError> {
    let (digits, source) = match classify(token) {
        Token::Quit => return Ok(Outcome::Quit),
        Token::UnknownSuffix(suffix) => {
            debug!("skipping {token:?}: unknown suffix {suffix:?}");
            return Ok(Outcome::Continue);
        }
        Token::Number { digits, base } => (digits, base),
    };

    let value = parse_digits(digits, source).ok_or_else(|| TokenError::Invalid(token.to_string()))?;
    debug!("{token:?} is {value} read as {}", source.name());

    if !filter.is_empty() {
        writeln!(out, "{token}")?;
    }
    for base in filter.iter().filter(|base| *base != source) {
        writeln!(out, "{}: {}", base.title(), base.format(value))?;
    }
    Ok(Outcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str, filter: &Filter) -> (String, Outcome) {
        let mut out = Vec::new();
        let outcome = interpret(line, filter, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), outcome)
    }

    #[test]
    fn binary_token_with_default_filter() {
        let (text, outcome) = run("1010b", &Filter::all());
        assert_eq!(text, "1010b\nOctal: 12\nDecimal: 10\nHexadecimal: a\n\n");
        assert_eq!(outcome, Outcome::Continue);
    }

    #[test]
    fn bare_number_is_decimal() {
        let (text, _) = run("99", &Filter::all());
        assert_eq!(text, "99\nBinary: 1100011\nOctal: 143\nHexadecimal: 63\n\n");
    }

    #[test]
    fn negative_decimal_keeps_sign_everywhere() {
        let (text, _) = run("-10", &Filter::all());
        assert_eq!(text, "-10\nBinary: -1010\nOctal: -12\nHexadecimal: -a\n\n");
    }

    #[test]
    fn filter_limits_output() {
        let filter = Filter::parse("hd").unwrap();
        let (text, _) = run("255", &filter);
        assert_eq!(text, "255\nHexadecimal: ff\n\n");
    }

    #[test]
    fn source_base_outside_filter_still_echoes() {
        let filter = Filter::parse("b").unwrap();
        let (text, _) = run("ffh", &filter);
        assert_eq!(text, "ffh\nBinary: 11111111\n\n");
    }

    #[test]
    fn filter_of_only_the_source_base_echoes_token() {
        let filter = Filter::parse("d").unwrap();
        let (text, _) = run("42", &filter);
        assert_eq!(text, "42\n\n");
    }

    #[test]
    fn empty_filter_prints_only_spacing() {
        let filter = Filter::parse("").unwrap();
        let (text, _) = run("42 7h", &filter);
        assert_eq!(text, "\n\n");
    }

    #[test]
    fn invalid_number_is_reported_and_spaced() {
        let (text, outcome) = run("102b", &Filter::all());
        assert_eq!(text, "Entered number \"102b\" is invalid.\n\n");
        assert_eq!(outcome, Outcome::Continue);
    }

    #[test]
    fn empty_digits_are_invalid() {
        let (text, _) = run("h", &Filter::all());
        assert_eq!(text, "Entered number \"h\" is invalid.\n\n");
    }

    // Regression: an unrecognized suffix is skipped without an error message.
    #[test]
    fn unknown_suffix_is_silently_skipped() {
        let (text, outcome) = run("5z", &Filter::all());
        assert_eq!(text, "\n");
        assert_eq!(outcome, Outcome::Continue);

        let (text, _) = run("12q", &Filter::all());
        assert_eq!(text, "\n");
    }

    #[test]
    fn several_tokens_on_one_line() {
        let filter = Filter::parse("d").unwrap();
        let (text, _) = run("  ah 10b\tzz 9o ", &filter);
        assert_eq!(
            text,
            "ah\nDecimal: 10\n\n10b\nDecimal: 2\n\n\nEntered number \"9o\" is invalid.\n\n"
        );
    }

    #[test]
    fn quit_stops_the_line() {
        let filter = Filter::parse("d").unwrap();
        let (text, outcome) = run("ah quit 10b", &filter);
        assert_eq!(text, "ah\nDecimal: 10\n\n\n");
        assert_eq!(outcome, Outcome::Quit);
    }

    #[test]
    fn transform_has_no_side_effect_on_quit() {
        let mut out = Vec::new();
        let outcome = transform("exit", &Filter::all(), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Quit);
        assert!(out.is_empty());
    }

    #[test]
    fn blank_line_input_prints_nothing() {
        let (text, outcome) = run("   ", &Filter::all());
        assert_eq!(text, "");
        assert_eq!(outcome, Outcome::Continue);
    }
}
