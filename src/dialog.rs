//! Create/edit dialog state machine
//!
//! The dialog owns the draft while the form is open and is the only place
//! validation runs. A successful submit closes the dialog immediately and
//! hands a [`MutationRequest`] to the caller; the network round-trip and
//! its notification happen after the user is already back on the list.

use crate::schema::{Draft, FieldErrors, Resource};

#[derive(Debug, Clone, PartialEq)]
enum DialogMode<R> {
    Closed,
    Create,
    /// Editing keeps the original record around so submit can diff
    /// against it and send only the changed fields.
    Edit { original: R },
}

/// Validated output of a submit, ready for the mutation coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRequest<R: Resource> {
    Create(R::Create),
    Update { id: String, patch: R::Patch },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogState<R: Resource> {
    mode: DialogMode<R>,
    draft: Draft,
    errors: FieldErrors,
}

impl<R: Resource> DialogState<R> {
    pub fn new() -> Self {
        Self {
            mode: DialogMode::Closed,
            draft: Draft::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, DialogMode::Closed)
    }

    /// Dialog title, doubling as the submit button label.
    pub fn title(&self) -> String {
        match self.mode {
            DialogMode::Closed => String::new(),
            DialogMode::Create => format!("Add {}", R::SINGULAR),
            DialogMode::Edit { .. } => format!("Edit {}", R::SINGULAR),
        }
    }

    pub fn open_create(&mut self) {
        self.mode = DialogMode::Create;
        self.draft = Draft::default();
        self.errors.clear();
    }

    pub fn open_edit(&mut self, record: &R) {
        self.mode = DialogMode::Edit { original: record.clone() };
        self.draft = record.to_draft();
        self.errors.clear();
    }

    /// Close and discard the draft without any network activity.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_text(&mut self, field: &'static str, value: impl Into<String>) {
        self.draft.set_text(field, value);
    }

    pub fn set_flag(&mut self, field: &'static str, value: bool) {
        self.draft.set_flag(field, value);
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Validate the draft. On success the dialog closes and the request for
    /// the coordinator is returned; on failure the dialog stays open with
    /// per-field messages set.
    pub fn submit(&mut self) -> Option<MutationRequest<R>> {
        if !self.is_open() {
            return None;
        }

        let valid = match R::validate(&self.draft) {
            Ok(valid) => valid,
            Err(errors) => {
                self.errors = errors;
                return None;
            }
        };

        let request = match std::mem::replace(&mut self.mode, DialogMode::Closed) {
            DialogMode::Closed => return None,
            DialogMode::Create => MutationRequest::Create(valid),
            DialogMode::Edit { original } => MutationRequest::Update {
                id: original.id().to_string(),
                patch: original.diff(&valid),
            },
        };
        self.draft = Draft::default();
        self.errors.clear();
        Some(request)
    }
}

impl<R: Resource> Default for DialogState<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gender, NewUser, User, UserPatch};

    fn sample() -> User {
        User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            gender: Gender::Female,
            banned: false,
        }
    }

    #[test]
    fn test_create_flow_validates_then_closes() {
        let mut dialog = DialogState::<User>::new();
        dialog.open_create();
        assert_eq!(dialog.title(), "Add user");

        dialog.set_text("name", "Bob");
        dialog.set_text("gender", "male");

        let request = dialog.submit().unwrap();
        assert_eq!(
            request,
            MutationRequest::Create(NewUser {
                name: "Bob".to_string(),
                gender: Gender::Male,
                banned: false,
            })
        );
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_invalid_submit_keeps_dialog_open_with_messages() {
        let mut dialog = DialogState::<User>::new();
        dialog.open_create();
        dialog.set_text("name", "ab");

        assert_eq!(dialog.submit(), None);
        assert!(dialog.is_open());
        assert_eq!(dialog.error("name"), Some("Name is required."));
        assert_eq!(dialog.error("gender"), Some("Gender has to be selected"));
    }

    #[test]
    fn test_edit_submit_diffs_against_original() {
        let mut dialog = DialogState::<User>::new();
        dialog.open_edit(&sample());
        assert_eq!(dialog.title(), "Edit user");
        assert_eq!(dialog.draft().text("name"), "Alice");

        dialog.set_flag("banned", true);

        let request = dialog.submit().unwrap();
        assert_eq!(
            request,
            MutationRequest::Update {
                id: "u1".to_string(),
                patch: UserPatch { banned: Some(true), ..UserPatch::default() },
            }
        );
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut dialog = DialogState::<User>::new();
        dialog.open_edit(&sample());
        dialog.set_text("name", "Mallory");

        dialog.cancel();
        assert!(!dialog.is_open());

        // Reopening starts from a clean slate, not the abandoned draft.
        dialog.open_create();
        assert_eq!(dialog.draft().text("name"), "");
    }

    #[test]
    fn test_submit_while_closed_is_a_no_op() {
        let mut dialog = DialogState::<User>::new();
        assert_eq!(dialog.submit(), None);
    }
}
