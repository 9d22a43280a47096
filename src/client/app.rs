use dioxus::document::Stylesheet;
use dioxus::prelude::*;

use crate::client::router::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx!(
        Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    )
}
