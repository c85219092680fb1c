//! Schema table for the user collection

use super::{rules, Align, Column, Control, Draft, FieldDef, FieldErrors, QuickAction, Resource, SelectOption};
use crate::types::{Gender, NewUser, User, UserPatch};

static GENDER_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "male", label: "Male" },
    SelectOption { value: "female", label: "Female" },
    SelectOption { value: "other", label: "Other" },
];

static FIELDS: &[FieldDef] = &[
    FieldDef { name: "name", label: "Name", control: Control::Text },
    FieldDef { name: "gender", label: "Gender", control: Control::Select(GENDER_OPTIONS) },
    FieldDef { name: "banned", label: "Banned", control: Control::Checkbox },
];

fn name_cell(user: &User) -> String {
    user.name.clone()
}

fn gender_cell(user: &User) -> String {
    user.gender.icon().to_string()
}

fn banned_cell(user: &User) -> String {
    if user.banned { "banned" } else { "innocent" }.to_string()
}

static COLUMNS: &[Column<User>] = &[
    Column { header: "Name", align: Align::Left, cell: name_cell },
    Column { header: "Gender", align: Align::Center, cell: gender_cell },
    Column { header: "Banned", align: Align::Center, cell: banned_cell },
];

fn toggle_ban(user: &User) -> UserPatch {
    UserPatch {
        banned: Some(!user.banned),
        ..UserPatch::default()
    }
}

impl Resource for User {
    type Create = NewUser;
    type Patch = UserPatch;

    const COLLECTION: &'static str = "users";
    const SINGULAR: &'static str = "user";
    const TITLE: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn columns() -> &'static [Column<Self>] {
        COLUMNS
    }

    fn quick_action() -> QuickAction<Self> {
        QuickAction {
            label: "Toggle ban",
            icon: "\u{1F528}", // 🔨
            message: "Ban status changed!",
            build: toggle_ban,
        }
    }

    fn to_draft(&self) -> Draft {
        let mut draft = Draft::default();
        draft.set_text("name", self.name.clone());
        draft.set_text("gender", self.gender.as_str());
        draft.set_flag("banned", self.banned);
        draft
    }

    fn validate(draft: &Draft) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = rules::check(
            &mut errors,
            "name",
            "Name is required.",
            rules::min_len(draft.text("name"), 3),
        );
        let gender = rules::check(
            &mut errors,
            "gender",
            "Gender has to be selected",
            rules::required_choice::<Gender>(draft.text("gender")),
        );
        // The ban flag defaults to false and can never fail validation.
        let banned = draft.flag("banned");

        match (name, gender) {
            (Some(name), Some(gender)) => Ok(NewUser { name, gender, banned }),
            _ => Err(errors),
        }
    }

    fn diff(&self, edited: &NewUser) -> UserPatch {
        UserPatch {
            name: (edited.name != self.name).then(|| edited.name.clone()),
            gender: (edited.gender != self.gender).then_some(edited.gender),
            banned: (edited.banned != self.banned).then_some(edited.banned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            gender: Gender::Female,
            banned: false,
        }
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let mut draft = Draft::default();
        draft.set_text("name", "ab");

        let errors = User::validate(&draft).unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required."));
        assert_eq!(
            errors.get("gender").map(String::as_str),
            Some("Gender has to be selected")
        );
    }

    #[test]
    fn test_validate_defaults_banned_to_false() {
        let mut draft = Draft::default();
        draft.set_text("name", "Alice");
        draft.set_text("gender", "female");

        let valid = User::validate(&draft).unwrap();
        assert!(!valid.banned);
        assert_eq!(valid.gender, Gender::Female);
    }

    #[test]
    fn test_draft_round_trips_through_validate() {
        let user = sample();
        let valid = User::validate(&user.to_draft()).unwrap();
        assert_eq!(valid.name, "Alice");
        assert_eq!(valid.gender, Gender::Female);
        assert!(!valid.banned);
    }

    #[test]
    fn test_diff_carries_only_changed_fields() {
        let user = sample();
        let edited = NewUser {
            name: "Alice".to_string(),
            gender: Gender::Female,
            banned: true,
        };

        let patch = user.diff(&edited);
        assert_eq!(patch.name, None);
        assert_eq!(patch.gender, None);
        assert_eq!(patch.banned, Some(true));
    }

    #[test]
    fn test_toggle_ban_builds_single_field_patch() {
        let user = sample();
        let patch = (User::quick_action().build)(&user);
        assert_eq!(patch, UserPatch { banned: Some(true), ..UserPatch::default() });
    }
}
