//! Application shell and navigation

use dioxus::prelude::*;

use crate::routes::Route;
use super::Snackbar;

/// Layout wrapper: navigation bar, routed content, notification overlay.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            NavBar {}

            main {
                class: "p-6",
                Outlet::<Route> {}
            }

            // Floats above whatever screen is active so a late mutation
            // outcome still reaches the user.
            Snackbar {}
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center gap-6",
                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-blue-700",
                    "Shelter Admin"
                }

                div {
                    class: "flex items-center gap-1",
                    NavLink { to: Route::UsersPage {}, label: "Users" }
                    NavLink { to: Route::AnimalsPage {}, label: "Animals" }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    let route = use_route::<Route>();
    let is_active = route == to;

    rsx! {
        Link {
            to: to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-blue-100 text-blue-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{label}"
        }
    }
}
