//! Type-safe wrappers shared by the CLI and the library.

pub mod ids;
pub mod time;

pub use ids::PlayerId;
pub use time::Week;
