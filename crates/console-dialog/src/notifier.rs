//! The notifier seam used by state containers to surface errors to the user.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::dialog::ConsoleDialog;

/// Sink for user-facing error reports.
///
/// Both operations are synchronous and infallible from the caller's point of
/// view; a sink that cannot display anything simply drops the message.
pub trait Notifier: Send + Sync {
    /// Make the message surface visible.
    fn open(&self);

    /// Append a line of user-facing text.
    fn append_message(&self, text: &str);
}

/// Cloneable handle to a [`ConsoleDialog`] shared between the UI and the
/// state containers that report into it.
#[derive(Debug, Clone, Default)]
pub struct SharedConsoleDialog {
    inner: Arc<Mutex<ConsoleDialog>>,
}

impl SharedConsoleDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the dialog for reading or direct manipulation by the UI.
    pub fn lock(&self) -> MutexGuard<'_, ConsoleDialog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_open()
    }

    /// Snapshot of the message texts, oldest first.
    pub fn message_texts(&self) -> Vec<String> {
        self.lock().messages().map(|m| m.text.clone()).collect()
    }
}

impl Notifier for SharedConsoleDialog {
    fn open(&self) {
        self.lock().open();
    }

    fn append_message(&self, text: &str) {
        let id = self.lock().append_message(text);
        debug!(id, text, "console message appended");
    }
}
