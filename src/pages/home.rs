//! Landing page

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto text-center py-16",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Shelter Admin" }
            p { class: "text-gray-600", "Manage the user and animal collections." }

            div {
                class: "mt-8 flex justify-center gap-4",
                Link {
                    to: Route::UsersPage {},
                    class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                    "Users"
                }
                Link {
                    to: Route::AnimalsPage {},
                    class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                    "Animals"
                }
            }
        }
    }
}
