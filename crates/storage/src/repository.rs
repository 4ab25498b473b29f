use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directory_core::model::{
    Campsite, CampsiteId, Comment, CommentId, Rating, ValidatedComment,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),
}

/// Persisted shape for a comment that has not been assigned an id yet.
///
/// Repositories assign ids in arrival order, so listing comments back
/// preserves insertion order.
#[derive(Debug, Clone)]
pub struct NewCommentRecord {
    pub campsite_id: CampsiteId,
    pub author: String,
    pub text: String,
    pub rating: Rating,
    pub posted_at: DateTime<Utc>,
}

impl NewCommentRecord {
    #[must_use]
    pub fn from_validated(
        campsite_id: CampsiteId,
        draft: ValidatedComment,
        posted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            campsite_id,
            author: draft.author,
            text: draft.text,
            rating: draft.rating,
            posted_at,
        }
    }

    /// Convert the record into a stored `Comment` once an id is known.
    #[must_use]
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            campsite_id: self.campsite_id,
            author: self.author,
            text: self.text,
            rating: self.rating,
            posted_at: self.posted_at,
        }
    }
}

/// Repository contract for campsites.
#[async_trait]
pub trait CampsiteRepository: Send + Sync {
    /// Persist or update a campsite.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the campsite cannot be stored.
    async fn upsert_campsite(&self, campsite: &Campsite) -> Result<(), StorageError>;

    /// Fetch a campsite by id. Returns `Ok(None)` when missing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if repository access fails.
    async fn get_campsite(&self, id: CampsiteId) -> Result<Option<Campsite>, StorageError>;

    /// List all campsites ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if repository access fails.
    async fn list_campsites(&self) -> Result<Vec<Campsite>, StorageError>;
}

/// Repository contract for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Append a comment and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the comment cannot be stored.
    async fn append_comment(&self, record: NewCommentRecord) -> Result<CommentId, StorageError>;

    /// List a campsite's comments in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if repository access fails.
    async fn list_comments(&self, campsite_id: CampsiteId) -> Result<Vec<Comment>, StorageError>;
}

/// In-memory backend for tests and the seeded desktop app.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    campsites: Arc<Mutex<BTreeMap<CampsiteId, Campsite>>>,
    comments: Arc<Mutex<Vec<Comment>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampsiteRepository for InMemoryRepository {
    async fn upsert_campsite(&self, campsite: &Campsite) -> Result<(), StorageError> {
        let mut guard = self
            .campsites
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(campsite.id, campsite.clone());
        Ok(())
    }

    async fn get_campsite(&self, id: CampsiteId) -> Result<Option<Campsite>, StorageError> {
        let guard = self
            .campsites
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&id).cloned())
    }

    async fn list_campsites(&self) -> Result<Vec<Campsite>, StorageError> {
        let guard = self
            .campsites
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepository {
    async fn append_comment(&self, record: NewCommentRecord) -> Result<CommentId, StorageError> {
        let mut guard = self
            .comments
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let id = CommentId::new(guard.len() as u64 + 1);
        guard.push(record.into_comment(id));
        Ok(id)
    }

    async fn list_comments(&self, campsite_id: CampsiteId) -> Result<Vec<Comment>, StorageError> {
        let guard = self
            .comments
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .filter(|comment| comment.campsite_id == campsite_id)
            .cloned()
            .collect())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub campsites: Arc<dyn CampsiteRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let campsites: Arc<dyn CampsiteRepository> = Arc::new(repo.clone());
        let comments: Arc<dyn CommentRepository> = Arc::new(repo);
        Self {
            campsites,
            comments,
        }
    }
}
