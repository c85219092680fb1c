//! Shelter Admin - Dioxus web console for the shelter REST API.
//!
//! Lists, searches, creates and edits the user and animal collections
//! exposed by the remote API, with one-click quick actions per row.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod dialog;
mod pages;
mod routes;
mod schema;
mod search;
mod store;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Base URL for the remote API, baked in at build time
    if let Some(url) = option_env!("API_URL") {
        api::init_api_base(url.to_string());
    }

    #[cfg(feature = "web")]
    dioxus::launch(app::App);
}
