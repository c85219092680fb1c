//! Application pages

mod animals;
mod home;
mod resource;
mod users;

pub use animals::*;
pub use home::*;
pub use resource::*;
pub use users::*;
