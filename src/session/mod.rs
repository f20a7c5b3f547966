mod input;
mod repl;

pub use input::{LineSource, Piped, Terminal};
pub use repl::{interrupted, run};
