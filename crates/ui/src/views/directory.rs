use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn DirectoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();

    let resource = use_resource(move || {
        let directory = directory.clone();
        async move {
            directory
                .list_campsites()
                .await
                .map_err(|err| ViewError::new(err.to_string()))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Directory" }

            match state {
                ViewState::Idle => rsx! {
                    div {}
                },
                ViewState::Loading => rsx! {
                    div { class: "loading",
                        span { class: "loading__spinner" }
                        p { "Loading..." }
                    }
                },
                ViewState::Ready(campsites) => rsx! {
                    if campsites.is_empty() {
                        p { "No campsites yet." }
                    } else {
                        ul { class: "directory-list",
                            for campsite in campsites {
                                li {
                                    Link {
                                        to: Route::Campsite { campsite_id: campsite.id.value() },
                                        "{campsite.name}"
                                    }
                                    p { class: "directory-blurb", "{campsite.description}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    h4 { class: "view-error", "{err.message()}" }
                },
            }
        }
    }
}
