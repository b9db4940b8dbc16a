//! Document editor: a document is either being edited or saved.

use crate::core::{StateHistory, StateMachine, Transitions};
use crate::machines::respond;

/// Reply to a successful `save_document`.
pub const DOCUMENT_SAVED: &str = "Document saved.";
/// Reply to a successful `edit_document`.
pub const EDITING_DOCUMENT: &str = "Editing document.";

crate::state_enum! {
    /// State of a [`DocumentEditingSystem`].
    pub enum DocumentState {
        Editing,
        Saved,
    }
}

crate::label_enum! {
    /// Operations on an open document.
    pub enum DocumentEvent {
        Save => "save_document",
        Edit => "edit_document",
    }
}

impl Transitions for DocumentState {
    type Event = DocumentEvent;

    fn on(&self, event: DocumentEvent) -> Option<Self> {
        match (self, event) {
            (Self::Editing, DocumentEvent::Save) => Some(Self::Saved),
            (Self::Saved, DocumentEvent::Edit) => Some(Self::Editing),
            _ => None,
        }
    }
}

/// A single open document. New documents start in `Editing`.
#[derive(Clone, Debug)]
pub struct DocumentEditingSystem {
    machine: StateMachine<DocumentState>,
}

impl DocumentEditingSystem {
    /// A fresh document, in `Editing`.
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("document_editing", DocumentState::Editing),
        }
    }

    /// Current state of the document.
    pub fn state(&self) -> DocumentState {
        *self.machine.current_state()
    }

    /// Save the document. Saving an already saved document is rejected.
    pub fn save_document(&mut self) -> &'static str {
        respond(&mut self.machine, DocumentEvent::Save, DOCUMENT_SAVED)
    }

    /// Reopen a saved document for editing.
    pub fn edit_document(&mut self) -> &'static str {
        respond(&mut self.machine, DocumentEvent::Edit, EDITING_DOCUMENT)
    }

    /// Every accepted save and edit, oldest first.
    pub fn history(&self) -> &StateHistory<DocumentState> {
        self.machine.history()
    }
}

impl Default for DocumentEditingSystem {
    fn default() -> Self {
        Self::new()
    }
}
