mod filter;
mod help;

pub use filter::Filter;
pub use help::report;
