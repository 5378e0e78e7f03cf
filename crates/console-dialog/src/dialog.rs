/// A line of text shown in the console dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleMessage {
    pub id: u64,
    pub text: String,
}

/// In-memory console dialog: a visibility flag plus an append-only log of
/// messages with monotonic IDs.
///
/// Rendering is a UI concern. This struct just holds what the UI shows.
#[derive(Debug, Clone)]
pub struct ConsoleDialog {
    open: bool,
    messages: Vec<ConsoleMessage>,
    next_id: u64,
}

impl ConsoleDialog {
    /// Create a closed dialog with no messages.
    pub fn new() -> Self {
        Self {
            open: false,
            messages: Vec::new(),
            next_id: 0,
        }
    }

    /// Make the dialog visible. Opening an open dialog is a no-op.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the dialog. Messages are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Append a line of text. Returns the assigned message ID.
    pub fn append_message(&mut self, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ConsoleMessage {
            id,
            text: text.into(),
        });
        id
    }

    /// Iterate over messages in insertion order (oldest first).
    pub fn messages(&self) -> impl Iterator<Item = &ConsoleMessage> {
        self.messages.iter()
    }

    /// Number of messages currently held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove all messages. IDs keep increasing afterwards.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

impl Default for ConsoleDialog {
    fn default() -> Self {
        Self::new()
    }
}
