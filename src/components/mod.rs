//! Reusable UI components

mod loading;
mod nav;
mod search_field;
mod snackbar;

pub use loading::*;
pub use nav::*;
pub use search_field::*;
pub use snackbar::*;
