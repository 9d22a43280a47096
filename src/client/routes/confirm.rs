use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;

enum Activation {
    Idle,
    Submitting,
    Activated,
    Failed(String),
}

#[component]
pub fn Confirm(token: String) -> Element {
    let mut activation = use_signal(|| Activation::Idle);

    rsx!(
        Title { "Confirm Account | Skald" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body items-center gap-4",
                    h2 { class: "card-title",
                        "Confirm your account"
                    }
                    {match &*activation.read() {
                        Activation::Idle => rsx!(
                            p { class: "text-center",
                                "Thanks for signing up! Confirm below to activate your Skald account."
                            }
                            button {
                                class: "btn btn-primary w-40",
                                onclick: move |_| {
                                    #[cfg(feature = "web")]
                                    {
                                        let token = token.clone();
                                        activation.set(Activation::Submitting);
                                        spawn(async move {
                                            match crate::client::util::activate::activate_user(&token).await {
                                                Ok(()) => activation.set(Activation::Activated),
                                                Err(err) => {
                                                    tracing::error!(err);
                                                    activation.set(Activation::Failed(err));
                                                }
                                            }
                                        });
                                    }
                                },
                                "Confirm"
                            }
                        ),
                        Activation::Submitting => rsx!(
                            p { class: "text-center",
                                "Activating your account..."
                            }
                        ),
                        Activation::Activated => rsx!(
                            div { class: "text-green-600",
                                Icon {
                                    width: 48,
                                    height: 48,
                                    icon: FaCircleCheck
                                }
                            }
                            p { class: "text-center",
                                "Your account is active. Welcome to Skald!"
                            }
                            Link {
                                to: Route::Home {},
                                class: "btn btn-primary w-40",
                                "Go to Skald"
                            }
                        ),
                        Activation::Failed(err) => rsx!(
                            div { class: "text-red-600",
                                Icon {
                                    width: 48,
                                    height: 48,
                                    icon: FaCircleXmark
                                }
                            }
                            p { class: "text-center",
                                "Activation failed: {err}"
                            }
                            p { class: "text-center text-sm",
                                "Your activation link may have expired. Register again to receive a new mail."
                            }
                        ),
                    }}
                }
            }
        }
    )
}
