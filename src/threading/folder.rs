//! Folder-level orchestration: fetch, normalize, fold.

use rayon::prelude::*;
use std::time::Instant;

use super::conversation::Conversation;
use super::fold::fold;
use crate::error::StoreError;
use crate::headers;
use crate::model::by_date_asc;
use crate::store::MessageStore;

/// Thread one folder: fetch its messages, apply the `In-Reply-To`
/// fallback, wrap each message in a singleton conversation, and fold.
///
/// Messages are folded in ascending received-date order so that replies
/// reference conversations the fold has already passed — the contract the
/// forward-only fold relies on.
///
/// A store failure aborts the computation for this folder and propagates
/// unchanged.
pub fn thread_folder<S: MessageStore>(
    store: &S,
    folder: &str,
) -> Result<Vec<Conversation>, StoreError> {
    let start = Instant::now();
    let mut messages = store.fetch_folder(folder)?;
    messages.sort_by(by_date_asc);

    let mut singletons = Vec::with_capacity(messages.len());
    for mut message in messages {
        headers::ensure_references(&mut message);
        singletons.push(Conversation::for_message(message));
    }

    let threads = fold(singletons);

    log::debug!(
        "threaded folder {}: {} thread(s) in {:.2}ms",
        folder,
        threads.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(threads)
}

/// Thread several folders in parallel.
///
/// Each folder is folded over its own independent instances; nothing is
/// shared between folders, and results are combined only after every fold
/// has finished. Per-folder outcomes are reported individually, so one
/// folder failing to list leaves the other folders' threads intact.
pub fn thread_folders<S>(
    store: &S,
    folders: &[&str],
) -> Vec<(String, Result<Vec<Conversation>, StoreError>)>
where
    S: MessageStore + Sync,
{
    folders
        .par_iter()
        .map(|folder| (folder.to_string(), thread_folder(store, folder)))
        .collect()
}
