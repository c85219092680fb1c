//! Schema-driven resource descriptions
//!
//! Both admin screens run the exact same interaction logic; everything that
//! differs between them - field list, table columns, validation rules, the
//! quick action - lives in the [`Resource`] implementation for that record
//! type. The generic screen is instantiated once per implementation.

pub mod rules;

mod animal;
mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single form field value. Text inputs and selects carry text, the
/// checkbox carries a flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// In-progress, possibly-invalid form state. Fields stay unset until the
/// user touches them; validation decides what that means per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Draft {
    pub fn set_text(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, field: &'static str, value: bool) {
        self.values.insert(field, FieldValue::Flag(value));
    }

    /// Text content of a field; unset or non-text fields read as empty.
    pub fn text(&self, field: &str) -> &str {
        match self.values.get(field) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Flag content of a field; unset fields read as false.
    pub fn flag(&self, field: &str) -> bool {
        matches!(self.values.get(field), Some(FieldValue::Flag(true)))
    }
}

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Which input control the dialog renders for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Text,
    Number,
    Checkbox,
    Select(&'static [SelectOption]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn class(self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

/// A table column: header plus a pure projection of a record into cell text.
pub struct Column<R> {
    pub header: &'static str,
    pub align: Align,
    pub cell: fn(&R) -> String,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

/// One-click single-field mutation attached to every row, bypassing the
/// dialog entirely.
pub struct QuickAction<R: Resource> {
    pub label: &'static str,
    pub icon: &'static str,
    pub message: &'static str,
    pub build: fn(&R) -> R::Patch,
}

/// A managed resource collection.
///
/// `Create` is the record minus its server-assigned id; `Patch` is the
/// partial update where absent fields stay off the wire.
pub trait Resource: Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + 'static {
    type Create: Clone + std::fmt::Debug + PartialEq + Serialize + 'static;
    type Patch: Clone + std::fmt::Debug + PartialEq + Default + Serialize + 'static;

    /// Path segment of the collection, e.g. `users`.
    const COLLECTION: &'static str;
    /// Lowercase singular, used in button labels and dialog titles.
    const SINGULAR: &'static str;
    /// Capitalized singular, used in notification messages.
    const TITLE: &'static str;

    fn id(&self) -> &str;
    fn name(&self) -> &str;

    fn fields() -> &'static [FieldDef];
    fn columns() -> &'static [Column<Self>];
    fn quick_action() -> QuickAction<Self>;

    /// Seed an edit draft from an existing record.
    fn to_draft(&self) -> Draft;

    /// Validate a draft into a create payload, collecting every violation
    /// instead of stopping at the first one.
    fn validate(draft: &Draft) -> Result<Self::Create, FieldErrors>;

    /// Patch carrying only the fields where `edited` differs from `self`.
    fn diff(&self, edited: &Self::Create) -> Self::Patch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_reads_unset_fields_as_empty() {
        let draft = Draft::default();
        assert_eq!(draft.text("name"), "");
        assert!(!draft.flag("banned"));
    }

    #[test]
    fn test_draft_set_overwrites() {
        let mut draft = Draft::default();
        draft.set_text("name", "Rex");
        draft.set_text("name", "Felix");
        draft.set_flag("banned", true);
        assert_eq!(draft.text("name"), "Felix");
        assert!(draft.flag("banned"));
    }
}
