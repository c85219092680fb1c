//! Root application component

use dioxus::prelude::*;

use crate::api::{self, ApiClient};
use crate::routes::Route;
use crate::store::{Notifier, ResourceCache};
use crate::types::{Animal, User};

/// Root application component.
///
/// Provides the session-scoped store: one API client, one cache entry per
/// resource collection and the shared notification channel. Screens pick
/// these up through context instead of owning their own copies, so cached
/// data survives navigation between screens.
#[component]
pub fn App() -> Element {
    use_context_provider(|| ApiClient::new(api::api_base()));
    use_context_provider(|| Signal::new(ResourceCache::<User>::new()));
    use_context_provider(|| Signal::new(ResourceCache::<Animal>::new()));
    use_context_provider(|| Signal::new(Notifier::new()));

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        Router::<Route> {}
    }
}
