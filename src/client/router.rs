use dioxus::prelude::*;

use crate::client::routes::{Confirm, Home, NotFound};

// Matched in declaration order; the catch-all must stay last.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/confirm/:token")]
    Confirm { token: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
