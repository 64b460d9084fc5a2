// Outcome messages for the toolbar: every add/save/remove pushes one line
// per result here, success or danger, and screens drain the bag on render.

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

// Clones share one underlying list, so every editor and the desk report into
// the same toolbar.
#[derive(Debug, Clone, Default)]
pub struct MessageBag {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl MessageBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, severity: Severity, text: impl Into<String>) {
        self.messages.lock().push(Message {
            severity,
            text: text.into(),
        });
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }

    // Snapshot in push order.
    pub fn all(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}
