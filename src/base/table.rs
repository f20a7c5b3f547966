/// Static description of one supported base.
#[derive(Debug)]
pub struct BaseSpec {
    pub code: char,
    pub radix: u32,
    pub name: &'static str,
    pub format: fn(i128) -> String,
}

/// Indexed by `Base as usize`, so the order here is the order of the enum.
pub(super) const TABLE: [BaseSpec; 4] = [
    BaseSpec { code: 'b', radix: 2, name: "binary", format: binary },
    BaseSpec { code: 'o', radix: 8, name: "octal", format: octal },
    BaseSpec { code: 'd', radix: 10, name: "decimal", format: decimal },
    BaseSpec { code: 'h', radix: 16, name: "hexadecimal", format: hexadecimal },
];

// Rust's {:b}/{:o}/{:x} print two's complement for negatives; we want "-" + magnitude.
fn signed(value: i128, digits: impl Fn(u128) -> String) -> String {
    let magnitude = digits(value.unsigned_abs());
    if value < 0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

fn binary(value: i128) -> String {
    signed(value, |m| format!("{m:b}"))
}

fn octal(value: i128) -> String {
    signed(value, |m| format!("{m:o}"))
}

fn decimal(value: i128) -> String {
    value.to_string()
}

fn hexadecimal(value: i128) -> String {
    signed(value, |m| format!("{m:x}"))
}
