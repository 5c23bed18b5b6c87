mod machine;
mod phase;

pub use machine::*;
pub use phase::*;
