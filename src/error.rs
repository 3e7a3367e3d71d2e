use thiserror::Error;

/// Errors surfaced while fetching messages from a backing store.
///
/// The threading engine itself has no failure modes: every operation on
/// conversations, folds, and mappings is total over its typed inputs. The
/// only errors that reach a caller originate in the store collaborator and
/// are propagated unchanged, with no retry and no partial result.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("folder `{folder}` not found")]
    FolderNotFound { folder: String },
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap an arbitrary backend failure.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        StoreError::Backend(err.into())
    }
}
