//! Record types for the remote REST API
//!
//! Each collection has three shapes: the full record the server returns,
//! a create payload (record minus id) and a patch payload where every
//! field is optional and absent fields stay off the wire.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// User Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Gender::Male => "\u{2642}",   // ♂
            Gender::Female => "\u{2640}", // ♀
            Gender::Other => "?",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub banned: bool,
}

/// Create payload for `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub gender: Gender,
    pub banned: bool,
}

/// Partial update payload for `PATCH /users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
}

// ============================================================================
// Animal Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Cat,
    Dog,
    Other,
}

impl AnimalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Cat => "cat",
            AnimalType::Dog => "dog",
            AnimalType::Other => "other",
        }
    }
}

impl FromStr for AnimalType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cat" => Ok(AnimalType::Cat),
            "dog" => Ok(AnimalType::Dog),
            "other" => Ok(AnimalType::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AnimalType,
    pub age: f64,
}

/// Create payload for `POST /animals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAnimal {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AnimalType,
    pub age: f64,
}

/// Partial update payload for `PATCH /animals/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnimalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
}
