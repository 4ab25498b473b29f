use dioxus::prelude::*;
use dioxus_router::Link;

use directory_core::model::{Campsite, CampsiteId, Comment, ValidatedComment};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_comment_cards;

use super::components::{CampsiteCard, CommentsPanel};

#[derive(Clone, Debug, PartialEq)]
struct CampsiteData {
    campsite: Option<Campsite>,
    comments: Vec<Comment>,
}

/// Detail page for one campsite: breadcrumb, name, image card, and the
/// comments panel with its submit dialog.
///
/// Renders exactly one of: the loading indicator, the collaborator's error
/// message verbatim, the full layout, or an empty placeholder when the
/// campsite does not exist.
#[component]
pub fn CampsiteView(campsite_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let id = CampsiteId::new(campsite_id);

    let resource = use_resource(move || {
        let directory = directory.clone();
        async move {
            let campsite = directory
                .get_campsite(id)
                .await
                .map_err(|err| ViewError::new(err.to_string()))?;
            let comments = match &campsite {
                Some(_) => directory
                    .comments_for(id)
                    .await
                    .map_err(|err| ViewError::new(err.to_string()))?,
                None => Vec::new(),
            };
            Ok(CampsiteData { campsite, comments })
        }
    });

    let state = view_state_from_resource(resource);

    let directory_for_post = ctx.directory();
    let mut post_error = use_signal(|| None::<String>);
    let on_post = use_callback(move |draft: ValidatedComment| {
        let directory = directory_for_post.clone();
        let mut resource = resource;
        spawn(async move {
            match directory.post_comment(id, draft).await {
                Ok(_) => {
                    post_error.set(None);
                    resource.restart();
                }
                Err(err) => post_error.set(Some(err.to_string())),
            }
        });
    });

    match state {
        ViewState::Idle => rsx! {
            div {}
        },
        ViewState::Loading => rsx! {
            div { class: "page",
                div { class: "loading",
                    span { class: "loading__spinner" }
                    p { "Loading..." }
                }
            }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page",
                h4 { class: "view-error", "{err.message()}" }
            }
        },
        ViewState::Ready(data) => match data.campsite {
            Some(campsite) => rsx! {
                div { class: "page campsite-detail",
                    nav { class: "breadcrumb",
                        Link { to: Route::Directory {}, "Directory" }
                        span { class: "breadcrumb__current", "{campsite.name}" }
                    }
                    h2 { "{campsite.name}" }
                    hr {}
                    div { class: "detail-row",
                        CampsiteCard { campsite: campsite.clone() }
                        CommentsPanel {
                            comments: map_comment_cards(&data.comments),
                            post_error: post_error(),
                            on_post,
                        }
                    }
                }
            },
            None => rsx! {
                div {}
            },
        },
    }
}
