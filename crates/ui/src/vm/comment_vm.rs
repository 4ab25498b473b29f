use directory_core::model::Comment;

use super::time_fmt::format_comment_date;

/// Display shape for a single comment card.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentVm {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub rating: u8,
    pub posted_on: String,
}

/// Maps stored comments to display cards, preserving order.
#[must_use]
pub fn map_comment_cards(comments: &[Comment]) -> Vec<CommentVm> {
    comments
        .iter()
        .map(|comment| CommentVm {
            id: comment.id.value(),
            author: comment.author.clone(),
            text: comment.text.clone(),
            rating: comment.rating.value(),
            posted_on: format_comment_date(comment.posted_at),
        })
        .collect()
}
