//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::Shell;
use crate::pages::{AnimalsPage, Home, UsersPage};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/users")]
        UsersPage {},

        #[route("/animals")]
        AnimalsPage {},
}
