//! Message-store collaborator boundary.
//!
//! The threading engine performs no I/O of its own. It receives messages
//! from an implementation of [`MessageStore`], which is responsible for
//! fetching identity fields alongside the extracted `Message-Id`,
//! `In-Reply-To`, and `References` header values.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::model::Message;

/// Source of messages for the threading engine.
///
/// A failure listing a folder aborts thread computation for that folder
/// entirely; the engine neither catches nor retries it.
pub trait MessageStore {
    fn fetch_folder(&self, folder: &str) -> Result<Vec<Message>, StoreError>;
}

/// In-memory store keyed by folder name.
///
/// Used by the CLI utility and the test suite; production callers
/// implement [`MessageStore`] over their real mail backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    folders: HashMap<String, Vec<Message>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a folder with the given messages, replacing any previous
    /// contents.
    pub fn insert_folder(&mut self, folder: impl Into<String>, messages: Vec<Message>) {
        self.folders.insert(folder.into(), messages);
    }

    /// File a single message under the folder it names.
    pub fn add_message(&mut self, message: Message) {
        self.folders
            .entry(message.folder.clone())
            .or_default()
            .push(message);
    }
}

impl MessageStore for InMemoryStore {
    fn fetch_folder(&self, folder: &str) -> Result<Vec<Message>, StoreError> {
        self.folders
            .get(folder)
            .cloned()
            .ok_or_else(|| StoreError::FolderNotFound {
                folder: folder.to_string(),
            })
    }
}
