use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGithub;
use dioxus_free_icons::Icon;

use crate::client::components::Page;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Skald" }
        Meta {
            name: "description",
            content: "A small social platform for sharing posts and following other writers."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "Skald"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "This is a test instance of Skald"
                    }
                    p {
                        "Skald is a small social platform for sharing posts and following other writers.
                        Right now we are testing account registration and email activation end to end."
                    }
                    p {
                        "To participate, register an account through the API and check your inbox for
                        an activation mail. The link in that mail lands on this client's confirmation
                        page, which activates your account against the platform API."
                    }
                    p {
                        "Posts, comments, followers, and the personal feed are live on the API side
                        but do not have pages in this client yet. They are next on the list."
                    }
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        a { href: "https://github.com/autumn-order/skald",
                            button {
                                class: "btn btn-outline w-48 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaGithub
                                }
                                p {
                                    "Skald GitHub"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
