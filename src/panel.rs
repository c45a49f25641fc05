//! Interactive state of the admin panel, independent of how it is drawn.
//!
//! Every user action maps onto one method here. A method performs at most one
//! mutating request, then reloads the list when that request succeeded.
//! Failures never escape: they become error notices.

use crate::model::{Template, TemplateId};
use crate::notify::{NoticeKind, Notices};
use crate::remote::{ApiError, TemplateApi};
use crate::session::Session;

mod form;
mod operations;

pub use self::form::{FormField, FormMode, TemplateForm};

pub const EMPTY_LIST_MESSAGE: &str = "No templates found. Create your first template below!";
pub const FAILED_LIST_MESSAGE: &str = "Failed to load templates. Please check your API key.";
pub const NO_KEY_MESSAGE: &str = "Set an API key to load templates.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this template?";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    NotLoaded,
    Loaded(Vec<Template>),
    Empty,
    Failed,
}

impl Listing {
    pub fn templates(&self) -> &[Template] {
        match self {
            Listing::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Text shown in place of the cards, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Listing::NotLoaded => Some(NO_KEY_MESSAGE),
            Listing::Loaded(_) => None,
            Listing::Empty => Some(EMPTY_LIST_MESSAGE),
            Listing::Failed => Some(FAILED_LIST_MESSAGE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Templates,
    Form,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

#[derive(Debug)]
pub struct Panel {
    session: Session,
    listing: Listing,
    expanded: Option<Template>,
    form: TemplateForm,
    mode: FormMode,
    focus: Focus,
    notices: Notices,
}

impl Panel {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            listing: Listing::NotLoaded,
            expanded: None,
            form: TemplateForm::default(),
            mode: FormMode::Create,
            focus: Focus::Templates,
            notices: Notices::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// The detail panel currently open, if any. At most one is open.
    pub fn expanded(&self) -> Option<&Template> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, id: TemplateId) -> bool {
        self.expanded.as_ref().is_some_and(|t| t.id == id)
    }

    pub fn form(&self) -> &TemplateForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TemplateForm {
        &mut self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notices.push(NoticeKind::Error, message);
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.notices.push(NoticeKind::Success, message);
    }

    /// Clones the current key, or reports that none is set.
    fn api_key_or_report(&mut self) -> Option<String> {
        match self.session.api_key() {
            Some(k) => Some(k.to_string()),
            None => {
                self.show_error(ApiError::MissingCredential.to_string());
                None
            }
        }
    }
}

/// "Failed to ..." for answers from the server, "Error ..." for everything
/// that never got one.
fn describe(err: &ApiError, failed: &str, errored: &str) -> String {
    match err {
        ApiError::MissingCredential => err.to_string(),
        ApiError::Status { .. } => format!("{}: {}", failed, err),
        ApiError::Transport(_) | ApiError::Decode(_) => format!("{}: {}", errored, err),
    }
}

#[cfg(test)]
#[path = "tests/panel/panel_tests.rs"]
mod tests;
