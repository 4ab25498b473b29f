use std::sync::Arc;

use directory_core::model::{Campsite, CampsiteId, Comment, CommentId, ValidatedComment};
use storage::repository::{CampsiteRepository, CommentRepository, NewCommentRecord};

use crate::Clock;
use crate::error::DirectoryServiceError;

/// Orchestrates campsite reads and comment posts.
///
/// Views treat `post_comment` as fire-and-forget; failures surface only to
/// whoever invoked the service.
#[derive(Clone)]
pub struct DirectoryService {
    clock: Clock,
    campsites: Arc<dyn CampsiteRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl DirectoryService {
    #[must_use]
    pub fn new(
        clock: Clock,
        campsites: Arc<dyn CampsiteRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            clock,
            campsites,
            comments,
        }
    }

    /// Fetch a campsite by id.
    ///
    /// Returns `Ok(None)` when the campsite does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if repository access fails.
    pub async fn get_campsite(
        &self,
        campsite_id: CampsiteId,
    ) -> Result<Option<Campsite>, DirectoryServiceError> {
        let campsite = self.campsites.get_campsite(campsite_id).await?;
        Ok(campsite)
    }

    /// List all campsites ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if repository access fails.
    pub async fn list_campsites(&self) -> Result<Vec<Campsite>, DirectoryServiceError> {
        let campsites = self.campsites.list_campsites().await?;
        Ok(campsites)
    }

    /// List a campsite's comments in the order they were posted.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Storage` if repository access fails.
    pub async fn comments_for(
        &self,
        campsite_id: CampsiteId,
    ) -> Result<Vec<Comment>, DirectoryServiceError> {
        let comments = self.comments.list_comments(campsite_id).await?;
        Ok(comments)
    }

    /// Store a validated comment against a campsite, stamping the post time
    /// from the service clock.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryServiceError::UnknownCampsite` if the campsite does
    /// not exist, or `DirectoryServiceError::Storage` if persistence fails.
    pub async fn post_comment(
        &self,
        campsite_id: CampsiteId,
        draft: ValidatedComment,
    ) -> Result<CommentId, DirectoryServiceError> {
        self.campsites
            .get_campsite(campsite_id)
            .await?
            .ok_or(DirectoryServiceError::UnknownCampsite)?;

        let record = NewCommentRecord::from_validated(campsite_id, draft, self.clock.now());
        let id = self.comments.append_comment(record).await?;
        Ok(id)
    }
}
