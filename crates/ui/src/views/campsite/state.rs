use directory_core::model::{CommentDraft, CommentFieldErrors, ValidatedComment};

/// State machine for the submit-comment dialog.
///
/// Owns the single dialog-visibility flag plus the transient field values;
/// nothing here is persisted. A field's error is visible only once the field
/// has been touched (blurred) or a submit has been attempted.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CommentFormState {
    pub(crate) open: bool,
    pub(crate) rating: String,
    pub(crate) author: String,
    pub(crate) text: String,
    touched_rating: bool,
    touched_author: bool,
}

impl CommentFormState {
    pub(crate) fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub(crate) fn set_rating(&mut self, value: String) {
        self.rating = value;
    }

    pub(crate) fn set_author(&mut self, value: String) {
        self.author = value;
    }

    pub(crate) fn set_text(&mut self, value: String) {
        self.text = value;
    }

    pub(crate) fn touch_rating(&mut self) {
        self.touched_rating = true;
    }

    pub(crate) fn touch_author(&mut self) {
        self.touched_author = true;
    }

    pub(crate) fn rating_error(&self) -> Option<&'static str> {
        if self.touched_rating {
            self.errors().rating
        } else {
            None
        }
    }

    pub(crate) fn author_error(&self) -> Option<&'static str> {
        if self.touched_author {
            self.errors().author
        } else {
            None
        }
    }

    /// Submit transition.
    ///
    /// On success the dialog closes, the fields reset, and the validated
    /// draft is handed back for the caller-supplied post handler. On failure
    /// the dialog stays open and every field counts as touched so its error
    /// shows.
    pub(crate) fn submit(&mut self) -> Option<ValidatedComment> {
        match self.draft().validate() {
            Ok(draft) => {
                *self = Self::default();
                Some(draft)
            }
            Err(_) => {
                self.touched_rating = true;
                self.touched_author = true;
                None
            }
        }
    }

    fn draft(&self) -> CommentDraft {
        CommentDraft {
            rating: self.rating.clone(),
            author: self.author.clone(),
            text: self.text.clone(),
        }
    }

    fn errors(&self) -> CommentFieldErrors {
        match self.draft().validate() {
            Ok(_) => CommentFieldErrors::default(),
            Err(errors) => errors,
        }
    }
}
