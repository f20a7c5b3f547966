/// Name used in usage lines and the header banner.
pub const PROGRAM: &str = "baseconv";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokens that end the session. Matched exactly, case-sensitive.
pub const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "stop"];

pub const PROMPT: &str = "Enter a number:";

/// Exit status for startup usage errors, same as clap's.
pub const USAGE_EXIT_CODE: i32 = 2;
