mod token;
mod transform;

pub use transform::{interpret, Outcome};
