use dioxus::prelude::*;
use directory_core::model::{Campsite, ValidatedComment};

use crate::vm::CommentVm;

use super::form::CommentForm;

#[component]
pub(super) fn CampsiteCard(campsite: Campsite) -> Element {
    rsx! {
        div { class: "detail-card",
            img {
                class: "detail-card__image",
                src: "{campsite.image}",
                alt: "{campsite.name}",
            }
            div { class: "detail-card__body",
                p { "{campsite.description}" }
            }
        }
    }
}

#[component]
pub(super) fn CommentsPanel(
    comments: Vec<CommentVm>,
    post_error: Option<String>,
    on_post: Callback<ValidatedComment>,
) -> Element {
    rsx! {
        div { class: "comments-panel",
            h4 { "Comments" }
            for comment in comments {
                CommentCard { comment }
            }
            if let Some(message) = post_error {
                p { class: "comments-error", "{message}" }
            }
            CommentForm { on_post }
        }
    }
}

#[component]
fn CommentCard(comment: CommentVm) -> Element {
    rsx! {
        div { class: "comment",
            p { class: "comment__text", "{comment.text}" }
            p { class: "comment__meta",
                span { class: "comment__rating", "{comment.rating}/5" }
                " {comment.author}, {comment.posted_on}"
            }
        }
    }
}
