//! Animals screen

use dioxus::prelude::*;

use super::resource_screen;
use crate::types::Animal;

/// Animals management page
#[component]
pub fn AnimalsPage() -> Element {
    resource_screen::<Animal>()
}
