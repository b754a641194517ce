// src/forms/dialog.rs
use crate::domain::Listing;

/// Whether the dialog is showing, and for which listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(Listing),
}

#[derive(Debug, Clone, Default)]
pub struct DialogPresenter {
    state: DialogState,
}

impl DialogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a listing. If already open, the target is replaced.
    pub fn open(&mut self, listing: Listing) {
        self.state = DialogState::Open(listing);
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    pub fn target(&self) -> Option<&Listing> {
        match &self.state {
            DialogState::Open(listing) => Some(listing),
            DialogState::Closed => None,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }
}
