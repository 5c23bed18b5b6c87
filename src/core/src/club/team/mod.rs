mod persona;
mod team;

pub use persona::*;
pub use team::*;
