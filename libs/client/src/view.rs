//! List and form state for the catalog screens
//!
//! A screen owns its entity list, a load state, a form that is either closed
//! or open for create/edit, an error string and a success flash that clears
//! itself after [`FLASH_DURATION`].

use std::time::{Duration, Instant};

pub mod category;
pub mod product;

pub use category::CategoryScreen;
pub use product::ProductScreen;

/// How long a success message stays visible
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadError(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open(FormMode),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        matches!(self, FormState::Open(_))
    }

    /// The ID being edited, if any
    pub fn editing(&self) -> Option<i64> {
        match self {
            FormState::Open(FormMode::Edit(id)) => Some(*id),
            _ => None,
        }
    }
}

/// A success message that expires on its own
#[derive(Debug, Clone, Default)]
pub struct Flash {
    message: Option<(String, Instant)>,
}

impl Flash {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), Instant::now()));
    }

    /// The message as seen at `now`
    pub fn current_at(&self, now: Instant) -> Option<&str> {
        match &self.message {
            Some((message, shown)) if now.saturating_duration_since(*shown) < FLASH_DURATION => {
                Some(message)
            }
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current_at(Instant::now())
    }
}
