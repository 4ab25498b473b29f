use dioxus::prelude::WritableExt;
use directory_core::model::CampsiteId;
use storage::repository::Storage;

use super::test_harness::{sample_campsite, setup_view_harness_with_form};

#[tokio::test(flavor = "current_thread")]
async fn comment_form_validates_then_posts_exactly_once() {
    let storage = Storage::in_memory();
    storage
        .campsites
        .upsert_campsite(&sample_campsite(1))
        .await
        .expect("seed campsite");

    let mut harness = setup_view_harness_with_form(1, storage);
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness
        .form_handles
        .clone()
        .expect("form handles provided");
    let mut state = handles.state();
    let submit = handles.submit();

    // Closed by default.
    assert!(!harness.render().contains("modal-title"));

    state.write().toggle();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("modal-title"), "dialog not open in {html}");
    assert!(html.contains("Your Name"), "missing author field in {html}");
    assert!(
        !html.contains("Must select a rating"),
        "error shown before any interaction in {html}"
    );

    // Submitting an empty form keeps the dialog open, shows the rating
    // error, and posts nothing.
    submit.call(());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("modal-title"), "dialog closed early in {html}");
    assert!(
        html.contains("Must select a rating"),
        "missing rating error in {html}"
    );
    let comments = harness
        .storage
        .comments
        .list_comments(CampsiteId::new(1))
        .await
        .expect("list comments");
    assert!(comments.is_empty(), "comment posted despite invalid form");

    // A valid draft posts once, closes the dialog, and refreshes the list.
    {
        let mut form = state.write();
        form.set_rating("4".to_string());
        form.set_author("Bob".to_string());
        form.set_text("Nice".to_string());
    }
    submit.call(());
    harness.rebuild();
    harness.drive_async().await;
    harness.rebuild();

    let comments = harness
        .storage
        .comments
        .list_comments(CampsiteId::new(1))
        .await
        .expect("list comments");
    assert_eq!(comments.len(), 1, "expected exactly one posted comment");
    assert_eq!(comments[0].author, "Bob");
    assert_eq!(comments[0].text, "Nice");
    assert_eq!(comments[0].rating.value(), 4);

    let html = harness.render();
    assert!(!html.contains("modal-title"), "dialog still open in {html}");
    assert!(html.contains("Nice"), "posted comment not rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn comment_form_short_author_blocks_submission() {
    let storage = Storage::in_memory();
    storage
        .campsites
        .upsert_campsite(&sample_campsite(1))
        .await
        .expect("seed campsite");

    let mut harness = setup_view_harness_with_form(1, storage);
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness
        .form_handles
        .clone()
        .expect("form handles provided");
    let mut state = handles.state();
    let submit = handles.submit();

    {
        let mut form = state.write();
        form.toggle();
        form.set_rating("5".to_string());
        form.set_author("A".to_string());
    }
    submit.call(());
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Must be at least 2 characters"),
        "missing author error in {html}"
    );
    let comments = harness
        .storage
        .comments
        .list_comments(CampsiteId::new(1))
        .await
        .expect("list comments");
    assert!(comments.is_empty(), "comment posted despite short author");
}
