mod campsite;
mod comment;
mod ids;

pub use campsite::Campsite;
pub use comment::{
    Comment, CommentDraft, CommentFieldErrors, Rating, RatingError, ValidatedComment,
};
pub use ids::{CampsiteId, CommentId, ParseIdError};
