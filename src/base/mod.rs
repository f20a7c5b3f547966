mod table;

pub use table::BaseSpec;

use itertools::Itertools;
use table::TABLE;

/// One of the four supported bases. Ordered by ascending radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    /// Every base, in table order.
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    pub fn spec(self) -> &'static BaseSpec {
        &TABLE[self as usize]
    }

    /// Looks up a base by its one-letter code.
    pub fn from_code(code: char) -> Option<Base> {
        Self::ALL.into_iter().find(|base| base.code() == code)
    }

    /// Every base sorted by code letter, for listings shown to the user.
    pub fn sorted_by_code() -> Vec<Base> {
        Self::ALL.into_iter().sorted_by_key(|base| base.code()).collect()
    }

    pub fn code(self) -> char {
        self.spec().code
    }

    pub fn radix(self) -> u32 {
        self.spec().radix
    }

    /// Lowercase word, e.g. `hexadecimal`.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Capitalized word, e.g. `Hexadecimal`.
    pub fn title(self) -> String {
        let mut chars = self.name().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Renders `value` in this base without any prefix.
    pub fn format(self, value: i128) -> String {
        (self.spec().format)(value)
    }
}
