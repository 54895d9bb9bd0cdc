//! Platform-agnostic state and helpers shared by the views.

pub mod format;
pub mod intake;
pub mod session;
