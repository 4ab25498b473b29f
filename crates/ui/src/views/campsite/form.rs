#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use directory_core::model::ValidatedComment;

use super::state::CommentFormState;

const RATING_OPTIONS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// The submit-comment trigger button plus its modal dialog.
///
/// The dialog-visibility flag and the field values live in a
/// `CommentFormState` signal; the component only wires events to it. On a
/// successful submit the validated draft goes to `on_post` and the dialog
/// closes itself.
#[component]
pub(super) fn CommentForm(on_post: Callback<ValidatedComment>) -> Element {
    let mut state = use_signal(CommentFormState::default);

    let submit = use_callback(move |()| {
        if let Some(draft) = state.write().submit() {
            on_post.call(draft);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<CommentFormTestHandles>() {
                handles.register(state, submit);
            }
        }
    }

    let form = state();

    rsx! {
        if form.open {
            div {
                class: "modal-overlay",
                onclick: move |_| state.write().toggle(),
                div {
                    class: "modal",
                    onclick: move |evt| evt.stop_propagation(),
                    header { class: "modal-header",
                        h3 { class: "modal-title", "Submit Comment" }
                        button {
                            class: "modal-close",
                            r#type: "button",
                            aria_label: "Close",
                            onclick: move |_| state.write().toggle(),
                            "×"
                        }
                    }
                    div { class: "modal-body",
                        div { class: "form-group",
                            label { class: "form-label", r#for: "rating", "Rating" }
                            select {
                                id: "rating",
                                class: if form.rating_error().is_some() {
                                    "form-control form-control--error"
                                } else {
                                    "form-control"
                                },
                                value: "{form.rating}",
                                oninput: move |evt| state.write().set_rating(evt.value()),
                                onblur: move |_| state.write().touch_rating(),
                                option { value: "", "" }
                                for option_value in RATING_OPTIONS {
                                    option { value: "{option_value}", "{option_value}" }
                                }
                            }
                            if let Some(message) = form.rating_error() {
                                p { class: "form-error", "{message}" }
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "author", "Your Name" }
                            input {
                                id: "author",
                                class: if form.author_error().is_some() {
                                    "form-control form-control--error"
                                } else {
                                    "form-control"
                                },
                                r#type: "text",
                                placeholder: "Your Name",
                                value: "{form.author}",
                                oninput: move |evt| state.write().set_author(evt.value()),
                                onblur: move |_| state.write().touch_author(),
                            }
                            if let Some(message) = form.author_error() {
                                p { class: "form-error", "{message}" }
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "text", "Comment" }
                            textarea {
                                id: "text",
                                class: "form-control",
                                rows: "6",
                                value: "{form.text}",
                                oninput: move |evt| state.write().set_text(evt.value()),
                            }
                        }
                        div { class: "form-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| submit.call(()),
                                "Submit"
                            }
                        }
                    }
                }
            }
        }
        button {
            class: "btn btn-outline comment-form-trigger",
            r#type: "button",
            onclick: move |_| state.write().toggle(),
            "Submit Comment"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CommentFormTestHandles {
    state: Rc<RefCell<Option<Signal<CommentFormState>>>>,
    submit: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl CommentFormTestHandles {
    pub(crate) fn register(&self, state: Signal<CommentFormState>, submit: Callback<()>) {
        *self.state.borrow_mut() = Some(state);
        *self.submit.borrow_mut() = Some(submit);
    }

    pub(crate) fn state(&self) -> Signal<CommentFormState> {
        (*self.state.borrow()).expect("comment form state registered")
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("comment form submit registered")
    }
}
