//! The plugin window.

use std::future::Future;

use futures_util::future::ready;
use parking_lot::Mutex;

use crate::host::{HostError, HostResult};

/// Platform call that opens the plugin UI.
pub trait UiHost {
    /// Show the UI; must succeed before any request is handled
    fn show(&self) -> impl Future<Output = HostResult<()>>;
}

/// In-memory UI that records whether it is visible.
#[derive(Debug, Default)]
pub struct MemoryUi {
    visible: Mutex<bool>,
    broken: bool,
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// UI whose `show` always fails
    pub fn broken() -> Self {
        Self {
            visible: Mutex::new(false),
            broken: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.lock()
    }
}

impl UiHost for MemoryUi {
    fn show(&self) -> impl Future<Output = HostResult<()>> {
        if self.broken {
            return ready(Err(HostError::Rejected("showUI failed".into())));
        }
        *self.visible.lock() = true;
        ready(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_show_marks_visible() {
        let ui = MemoryUi::new();
        assert!(!ui.is_visible());
        ui.show().await.unwrap();
        assert!(ui.is_visible());
    }

    #[tokio::test]
    async fn test_broken_ui_stays_hidden() {
        let ui = MemoryUi::broken();
        assert!(ui.show().await.is_err());
        assert!(!ui.is_visible());
    }
}
