//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates the platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/desktop.rs`
//! - Injected into Dioxus context by the composition root
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{AlertProvider, LogProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    log: Arc<dyn LogProviderDyn>,
    alert: Arc<dyn AlertProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait LogProviderDyn: Send + Sync {
    fn info(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

trait AlertProviderDyn: Send + Sync {
    fn alert(&self, message: &str) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

impl<T: LogProvider + Send + Sync> LogProviderDyn for T {
    fn info(&self, msg: &str) {
        LogProvider::info(self, msg)
    }
    fn debug(&self, msg: &str) {
        LogProvider::debug(self, msg)
    }
    fn warn(&self, msg: &str) {
        LogProvider::warn(self, msg)
    }
}

impl<T: AlertProvider + Send + Sync> AlertProviderDyn for T {
    fn alert(&self, message: &str) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        AlertProvider::alert(self, message)
    }
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<L, A>(log: L, alert: A) -> Self
    where
        L: LogProvider + Send + Sync,
        A: AlertProvider + Send + Sync,
    {
        Self {
            log: Arc::new(log),
            alert: Arc::new(alert),
        }
    }

    // -------------------------------------------------------------------------
    // Logging operations
    // -------------------------------------------------------------------------

    pub fn log_info(&self, msg: &str) {
        self.log.info(msg)
    }

    pub fn log_debug(&self, msg: &str) {
        self.log.debug(msg)
    }

    pub fn log_warn(&self, msg: &str) {
        self.log.warn(msg)
    }

    // -------------------------------------------------------------------------
    // Alert operations
    // -------------------------------------------------------------------------

    /// Show a blocking alert; resolves when the user dismisses it
    pub fn alert(&self, message: &str) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.alert.alert(message)
    }
}
