//! Desktop platform implementations
//!
//! Logging goes through tracing; alerts are native message boxes via rfd.

use std::{future::Future, pin::Pin};

use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::ports::outbound::platform::{AlertProvider, LogProvider};
use crate::state::Platform;

/// Window title used for alert boxes
const ALERT_TITLE: &str = "Contractor";

/// Desktop log provider using tracing
#[derive(Clone, Default)]
pub struct DesktopLogProvider;

impl LogProvider for DesktopLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// Desktop alert provider showing a native OK-only message box
#[derive(Clone, Default)]
pub struct DesktopAlertProvider;

impl AlertProvider for DesktopAlertProvider {
    fn alert(&self, message: &str) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let dialog = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(ALERT_TITLE)
            .set_description(message.to_string())
            .set_buttons(MessageButtons::Ok);
        Box::pin(async move {
            dialog.show().await;
        })
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(DesktopLogProvider, DesktopAlertProvider)
}
