//! Platform abstraction ports
//!
//! These traits keep presentation code free of `#[cfg]` branches and make the
//! screen testable with recording implementations.
//!
//! NOTE: The `Platform` struct that aggregates them lives in `crate::state`.

use std::{future::Future, pin::Pin};

/// Logging abstraction
pub trait LogProvider: Clone + 'static {
    fn info(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Blocking user-facing alert (message box with a single OK button)
pub trait AlertProvider: Clone + 'static {
    /// Resolves once the user dismisses the alert
    fn alert(&self, message: &str) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}
