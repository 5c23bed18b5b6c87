mod board;
pub(crate) mod prospect;
mod scouting;
mod selection;

pub use board::*;
pub use prospect::*;
pub use scouting::*;
pub use selection::*;
