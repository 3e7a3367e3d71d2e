//! mailfold groups flat collections of email messages into conversation
//! threads using the `Message-Id`, `In-Reply-To`, and `References` header
//! relationships, and grows already-materialized threads incrementally as
//! new messages arrive.
//!
//! The crate is pure in-memory computation: message retrieval lives behind
//! the [`store::MessageStore`] trait, and failures there propagate to the
//! caller unchanged. See the [`threading`] module for the engine itself.

pub mod error;
pub mod headers;
pub mod model;
pub mod store;
pub mod threading;

pub use error::StoreError;
pub use model::{Message, MessageKey};
pub use store::{InMemoryStore, MessageStore};
pub use threading::{Conversation, ThreadableMapping, fold, thread_folder, thread_folders};
