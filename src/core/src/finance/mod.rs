mod cap;
mod contracts;

pub use cap::*;
pub use contracts::*;
