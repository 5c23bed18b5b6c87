mod history;
mod ids;
mod injuries;
#[allow(clippy::module_inception)]
mod league;
mod notifications;
mod queries;
mod settings;

pub use history::*;
pub use ids::*;
pub use injuries::*;
pub use league::*;
pub use notifications::*;
pub use queries::*;
pub use settings::*;

#[cfg(test)]
pub(crate) use league::tests;
