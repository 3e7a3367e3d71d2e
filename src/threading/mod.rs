//! Mail conversation threading engine.
//!
//! Groups a flat collection of messages into conversations using the
//! `Message-Id` / `In-Reply-To` / `References` header relationships. The
//! engine computes connected components of messages linked through shared
//! reference tokens; it does not reconstruct parent/child trees or group
//! by subject.
//!
//! ## Threading Paths
//!
//! 1. **Batch folding**: wrap each message of a folder (sorted by
//!    ascending received date) in a singleton [`Conversation`] and run
//!    [`fold`] until no two remaining conversations share a token.
//! 2. **Incremental mapping**: build a [`ThreadableMapping`] once per
//!    batch and call [`ThreadableMapping::check_for`] to append newly-seen
//!    messages to an already-materialized thread without refolding.
//!
//! ## Module Structure
//!
//! - `conversation`: the deduplicated message aggregate and its
//!   relationship tests
//! - `fold`: the batch merge pass
//! - `mapping`: reverse indices for incremental thread growth
//! - `folder`: store-to-threads orchestration, per folder and in parallel

pub mod conversation;
pub mod fold;
pub mod folder;
pub mod mapping;

pub use conversation::Conversation;
pub use fold::{fold, fold_into};
pub use folder::{thread_folder, thread_folders};
pub use mapping::ThreadableMapping;
