use crate::base::Base;
use crate::globals::QUIT_COMMANDS;

/// What a single input token turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Quit,
    Number { digits: &'a str, base: Base },
    /// Ends in a letter that is not a base code. Skipped without a message.
    UnknownSuffix(char),
}

/// Splits a token into its digits and the base named by its suffix.
///
/// A token whose last character is an ASCII digit has no suffix and is
/// decimal. Other Unicode digits count as an unknown suffix.
pub fn classify(token: &str) -> Token<'_> {
    if QUIT_COMMANDS.contains(&token) {
        return Token::Quit;
    }
    match token.chars().next_back() {
        Some(last) if !last.is_ascii_digit() => {
            let digits = &token[..token.len() - last.len_utf8()];
            match Base::from_code(last) {
                Some(base) => Token::Number { digits, base },
                None => Token::UnknownSuffix(last),
            }
        }
        _ => Token::Number { digits: token, base: Base::Decimal },
    }
}

/// Parses `digits` as an integer in `base`.
///
/// Accepts an optional sign, a radix prefix matching the base (`0b`, `0o`,
/// `0x`) and single underscores between digits. Returns `None` for anything
/// else, including values outside the `i128` range.
pub fn parse_digits(digits: &str, base: Base) -> Option<i128> {
    let (negative, rest) = match digits.as_bytes().first() {
        Some(b'-') => (true, &digits[1..]),
        Some(b'+') => (false, &digits[1..]),
        _ => (false, digits),
    };
    let body = strip_radix_prefix(rest, base);
    if body.is_empty()
        || body.starts_with('_')
        || body.ends_with('_')
        || body.contains("__")
    {
        return None;
    }
    let cleaned: String = body.chars().filter(|c| *c != '_').collect();
    // from_str_radix would take a second sign here
    if !cleaned.chars().all(|c| c.is_digit(base.radix())) {
        return None;
    }
    let signed = if negative { format!("-{cleaned}") } else { cleaned };
    i128::from_str_radix(&signed, base.radix()).ok()
}

fn strip_radix_prefix(text: &str, base: Base) -> &str {
    let marker = match base {
        Base::Binary => 'b',
        Base::Octal => 'o',
        Base::Hexadecimal => 'x',
        Base::Decimal => return text,
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some(c)) if c.to_ascii_lowercase() == marker => {
            // a prefix followed by an underscore is allowed, e.g. 0x_ff
            chars.as_str().strip_prefix('_').unwrap_or(chars.as_str())
        }
        _ => text,
    }
}
