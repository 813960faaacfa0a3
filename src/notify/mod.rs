//! Notify module: the snackbar notification surface.
//!
//! Controllers report outcomes through a [`Snackbar`]. The host decides
//! how notices are shown; [`TracingSnackbar`] forwards them to the log and
//! [`RecordingSnackbar`] keeps them for later rendering or assertions.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info};

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// Confirmation or status message.
    Info,
    /// Something the user asked for did not happen.
    Error,
}

/// One user-visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text shown to the user.
    pub message: String,
}

impl Notice {
    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A transient notification surface.
pub trait Snackbar: Send + Sync {
    /// Show a confirmation message.
    fn show(&self, message: &str);

    /// Show an error message.
    fn error(&self, message: &str);
}

impl<S: Snackbar + ?Sized> Snackbar for Arc<S> {
    fn show(&self, message: &str) {
        (**self).show(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Snackbar that writes notices to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSnackbar;

impl Snackbar for TracingSnackbar {
    fn show(&self, message: &str) {
        info!(target: "wingrade::snackbar", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "wingrade::snackbar", "{message}");
    }
}

/// Snackbar that records every notice in order.
#[derive(Debug, Default)]
pub struct RecordingSnackbar {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSnackbar {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices recorded so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all recorded notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

impl Snackbar for RecordingSnackbar {
    fn show(&self, message: &str) {
        self.push(Notice::info(message));
    }

    fn error(&self, message: &str) {
        self.push(Notice::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order() {
        let snackbar = RecordingSnackbar::new();
        snackbar.show("Success! VDI created.");
        snackbar.error("Bad request");

        assert_eq!(
            snackbar.notices(),
            vec![Notice::info("Success! VDI created."), Notice::error("Bad request")]
        );
        assert_eq!(snackbar.take().len(), 2);
        assert!(snackbar.notices().is_empty());
    }

    #[test]
    fn test_shared_snackbar_forwards() {
        let recorder = Arc::new(RecordingSnackbar::new());
        let shared: Arc<dyn Snackbar> = recorder.clone();
        shared.error("offline");
        assert_eq!(recorder.notices()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_tracing_snackbar_does_not_panic() {
        TracingSnackbar.show("hello");
        TracingSnackbar.error("oops");
    }
}
