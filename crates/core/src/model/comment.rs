use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{CampsiteId, CommentId};

//
// ─── COMMENT TYPES ─────────────────────────────────────────────────────────────
//

/// A 1-5 star rating attached to a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating, rejecting values outside 1..=5.
    ///
    /// # Errors
    ///
    /// Returns `RatingError` when the value is out of range.
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError)
        }
    }

    /// Returns the underlying value in 1..=5.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| RatingError)
            .and_then(Rating::new)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("rating must be a whole number between 1 and 5")]
pub struct RatingError;

/// A posted comment. Immutable once stored; display order is arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub campsite_id: CampsiteId,
    pub author: String,
    pub text: String,
    pub rating: Rating,
    pub posted_at: DateTime<Utc>,
}

//
// ─── COMMENT DRAFT VALIDATION ──────────────────────────────────────────────────
//

/// Raw field values collected from the comment form at submit time.
///
/// `rating` is the selected option exactly as the form produced it; an empty
/// string means nothing was selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub rating: String,
    pub author: String,
    pub text: String,
}

/// Per-field validation messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFieldErrors {
    pub rating: Option<&'static str>,
    pub author: Option<&'static str>,
}

impl CommentFieldErrors {
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.rating.is_some() || self.author.is_some()
    }
}

/// A draft that passed field validation and is ready to hand off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedComment {
    pub rating: Rating,
    pub author: String,
    pub text: String,
}

impl CommentDraft {
    /// Validates the collected field values.
    ///
    /// Rules: rating must be a selected option from 1..=5; author is
    /// required with length in 2..=15 characters; text is free-form and
    /// may be empty.
    ///
    /// # Errors
    ///
    /// Returns `CommentFieldErrors` with a message per failing field.
    pub fn validate(&self) -> Result<ValidatedComment, CommentFieldErrors> {
        let mut errors = CommentFieldErrors::default();

        let rating = match self.rating.parse::<Rating>() {
            Ok(rating) => Some(rating),
            Err(_) => {
                errors.rating = Some("Must select a rating");
                None
            }
        };

        let author_len = self.author.chars().count();
        if self.author.is_empty() {
            errors.author = Some("Required");
        } else if author_len < 2 {
            errors.author = Some("Must be at least 2 characters");
        } else if author_len > 15 {
            errors.author = Some("Must be 15 characters or less");
        }

        match (rating, errors.has_any()) {
            (Some(rating), false) => Ok(ValidatedComment {
                rating,
                author: self.author.clone(),
                text: self.text.clone(),
            }),
            _ => Err(errors),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
