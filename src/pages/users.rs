//! Users screen

use dioxus::prelude::*;

use super::resource_screen;
use crate::types::User;

/// Users management page
#[component]
pub fn UsersPage() -> Element {
    resource_screen::<User>()
}
