mod result;
mod simulator;
mod week;

pub use result::*;
pub use simulator::*;
pub use week::*;
