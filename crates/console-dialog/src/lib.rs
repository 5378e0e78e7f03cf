//! Console dialog state: the user-facing message surface and the
//! [`Notifier`] seam state containers report errors through.
//!
//! The UI owns a [`SharedConsoleDialog`] and renders it; state containers
//! only see it as a `dyn Notifier`.

pub mod dialog;
pub mod notifier;

pub use dialog::{ConsoleDialog, ConsoleMessage};
pub use notifier::{Notifier, SharedConsoleDialog};
