use serde::{Deserialize, Serialize};

use crate::model::ids::CampsiteId;

/// A campsite in the directory.
///
/// Immutable: owned by the data layer and handed to the UI read-only.
/// `image` is a path or URL the UI can hand straight to an `img` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campsite {
    pub id: CampsiteId,
    pub name: String,
    pub description: String,
    pub image: String,
}

impl Campsite {
    #[must_use]
    pub fn new(
        id: CampsiteId,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}
