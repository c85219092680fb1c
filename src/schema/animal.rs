//! Schema table for the animal collection

use super::{rules, Align, Column, Control, Draft, FieldDef, FieldErrors, QuickAction, Resource, SelectOption};
use crate::types::{Animal, AnimalPatch, AnimalType, NewAnimal};

static TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "dog", label: "Dog" },
    SelectOption { value: "cat", label: "Cat" },
    SelectOption { value: "other", label: "Other" },
];

static FIELDS: &[FieldDef] = &[
    FieldDef { name: "name", label: "Name", control: Control::Text },
    FieldDef { name: "type", label: "Type", control: Control::Select(TYPE_OPTIONS) },
    FieldDef { name: "age", label: "Age", control: Control::Number },
];

fn name_cell(animal: &Animal) -> String {
    animal.name.clone()
}

fn kind_cell(animal: &Animal) -> String {
    animal.kind.as_str().to_string()
}

fn age_cell(animal: &Animal) -> String {
    format!("{}", animal.age)
}

static COLUMNS: &[Column<Animal>] = &[
    Column { header: "Name", align: Align::Left, cell: name_cell },
    Column { header: "Type", align: Align::Center, cell: kind_cell },
    Column { header: "Age", align: Align::Center, cell: age_cell },
];

fn increment_age(animal: &Animal) -> AnimalPatch {
    AnimalPatch {
        age: Some(animal.age + 1.0),
        ..AnimalPatch::default()
    }
}

impl Resource for Animal {
    type Create = NewAnimal;
    type Patch = AnimalPatch;

    const COLLECTION: &'static str = "animals";
    const SINGULAR: &'static str = "animal";
    const TITLE: &'static str = "Animal";

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
            label: "Increment age",
            icon: "+1",
            message: "Age incremented!",
            build: increment_age,
        }
    }

    fn to_draft(&self) -> Draft {
        let mut draft = Draft::default();
        draft.set_text("name", self.name.clone());
        draft.set_text("type", self.kind.as_str());
        draft.set_text("age", format!("{}", self.age));
        draft
    }

    fn validate(draft: &Draft) -> Result<NewAnimal, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = rules::check(
            &mut errors,
            "name",
            "Name has to be longer.",
            rules::min_len(draft.text("name"), 3),
        );
        let kind = rules::check(
            &mut errors,
            "type",
            "Type has to be selected",
            rules::required_choice::<AnimalType>(draft.text("type")),
        );
        let age = rules::check(
            &mut errors,
            "age",
            "Age has to be positive number",
            rules::positive(draft.text("age")),
        );

        match (name, kind, age) {
            (Some(name), Some(kind), Some(age)) => Ok(NewAnimal { name, kind, age }),
            _ => Err(errors),
        }
    }

    fn diff(&self, edited: &NewAnimal) -> AnimalPatch {
        AnimalPatch {
            name: (edited.name != self.name).then(|| edited.name.clone()),
            kind: (edited.kind != self.kind).then_some(edited.kind),
            age: (edited.age != self.age).then_some(edited.age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Animal {
        Animal {
            id: "a1".to_string(),
            name: "Rex".to_string(),
            kind: AnimalType::Dog,
            age: 3.0,
        }
    }

    #[test]
    fn test_validate_coerces_age_from_text() {
        let mut draft = Draft::default();
        draft.set_text("name", "Rex");
        draft.set_text("type", "dog");
        draft.set_text("age", "3");

        let valid = Animal::validate(&draft).unwrap();
        assert_eq!(valid.age, 3.0);
        assert_eq!(valid.kind, AnimalType::Dog);
    }

    #[test]
    fn test_validate_rejects_zero_and_garbage_age() {
        for bad in ["0", "-2", "abc", ""] {
            let mut draft = Draft::default();
            draft.set_text("name", "Rex");
            draft.set_text("type", "dog");
            draft.set_text("age", bad);

            let errors = Animal::validate(&draft).unwrap_err();
            assert_eq!(
                errors.get("age").map(String::as_str),
                Some("Age has to be positive number"),
                "age input {bad:?} should fail"
            );
        }
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let draft = Draft::default();
        let errors = Animal::validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("type"));
        assert!(errors.contains_key("age"));
    }

    #[test]
    fn test_increment_age_builds_single_field_patch() {
        let animal = sample();
        let patch = (Animal::quick_action().build)(&animal);
        assert_eq!(patch, AnimalPatch { age: Some(4.0), ..AnimalPatch::default() });
    }

    #[test]
    fn test_diff_detects_age_change() {
        let animal = sample();
        let edited = NewAnimal {
            name: "Rex".to_string(),
            kind: AnimalType::Dog,
            age: 5.0,
        };

        let patch = animal.diff(&edited);
        assert_eq!(patch, AnimalPatch { age: Some(5.0), ..AnimalPatch::default() });
    }
}
