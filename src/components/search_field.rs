//! Search input with a clear button

use dioxus::prelude::*;

/// Free-text name filter. The clear button only appears while there is
/// something to clear.
#[component]
pub fn SearchField(value: Signal<String>) -> Element {
    let mut value = value;
    let has_text = !value.read().is_empty();

    rsx! {
        span {
            class: "inline-flex items-center gap-2",
            input {
                r#type: "text",
                placeholder: "Filter name",
                value: "{value}",
                class: "px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                oninput: move |e| value.set(e.value()),
            }
            if has_text {
                button {
                    class: "w-8 h-8 rounded-full text-gray-500 hover:text-gray-700 hover:bg-gray-100",
                    onclick: move |_| value.set(String::new()),
                    "\u{2715}"
                }
            }
        }
    }
}
