mod bracket;
mod ranking;

pub use bracket::*;
pub use ranking::*;
