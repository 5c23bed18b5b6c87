mod attributes;
mod contract;
mod generator;
mod injury;
mod player;
mod position;
mod statistics;

pub use attributes::*;
pub use contract::*;
pub use generator::*;
pub use injury::*;
pub use player::*;
pub use position::*;
pub use statistics::*;
