mod ai;
mod trade;
mod valuation;

pub use trade::*;
pub use valuation::*;
