//! Incremental thread growth without re-running the batch fold.
//!
//! A [`ThreadableMapping`] is built once over a batch of messages and then
//! queried repeatedly: given an already-materialized thread (an ordered,
//! caller-owned list of messages) and a set of newly-seen candidates, it
//! appends every indexed message that belongs with those candidates and
//! reports whether the thread changed.

use std::collections::{HashMap, HashSet};

use crate::model::{Message, MessageKey};

/// Reverse indices over one batch of messages.
///
/// - `references_index`: reference token → messages whose `References`
///   contain that token (messages that point *at* it)
/// - `message_id_index`: `Message-Id` → message(s) carrying that id
///
/// Index values keep batch order. Built once, read-only afterwards.
#[derive(Debug, Default)]
pub struct ThreadableMapping {
    references_index: HashMap<String, Vec<Message>>,
    message_id_index: HashMap<String, Vec<Message>>,
}

impl ThreadableMapping {
    /// Index a batch of messages.
    ///
    /// A message with neither a `Message-Id` nor reference tokens is
    /// simply absent from both indices.
    pub fn new(messages: &[Message]) -> Self {
        let mut mapping = Self::default();
        for message in messages {
            for token in &message.references {
                if token.is_empty() {
                    continue;
                }
                mapping
                    .references_index
                    .entry(token.clone())
                    .or_default()
                    .push(message.clone());
            }
            if let Some(id) = message.message_id.as_deref().filter(|id| !id.is_empty()) {
                mapping
                    .message_id_index
                    .entry(id.to_string())
                    .or_default()
                    .push(message.clone());
            }
        }
        mapping
    }

    /// Grow `thread` with every indexed message that belongs with one of
    /// `candidates`; returns whether anything was appended.
    ///
    /// For each candidate this pulls, in order: the messages that
    /// reference it, the candidate itself as indexed in the batch, and the
    /// message(s) each of its reference tokens points at. Appending is the
    /// only mutation — existing elements keep their order, and nothing is
    /// ever removed. A message already in `thread` (by `Message-Id`) or
    /// already appended during this call (by `(mail_id, folder)`) is
    /// skipped, so a message appended by one call is deduplicated in later
    /// calls against the same growing thread.
    pub fn check_for(&self, candidates: &[Message], thread: &mut Vec<Message>) -> bool {
        let existing_message_ids: HashSet<String> = thread
            .iter()
            .filter_map(|m| m.message_id.clone())
            .collect();
        let mut processed: HashSet<MessageKey> = HashSet::new();
        let mut changed = false;

        for candidate in candidates {
            if let Some(id) = candidate.message_id.as_deref() {
                for linked in self.refs(id) {
                    changed |=
                        append_if_new(linked, &existing_message_ids, &mut processed, thread);
                }
                for linked in self.by_message_id(id) {
                    changed |=
                        append_if_new(linked, &existing_message_ids, &mut processed, thread);
                }
            }
            for token in &candidate.references {
                for linked in self.by_message_id(token) {
                    changed |=
                        append_if_new(linked, &existing_message_ids, &mut processed, thread);
                }
            }
        }

        if changed {
            log::debug!("thread grew to {} message(s)", thread.len());
        }
        changed
    }

    /// Messages whose references contain `message_id`, in batch order.
    /// Empty when the id was never referenced.
    pub fn refs(&self, message_id: &str) -> &[Message] {
        self.references_index
            .get(message_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Message(s) carrying `message_id`, in batch order. Empty when the id
    /// is unknown to the batch.
    pub fn by_message_id(&self, message_id: &str) -> &[Message] {
        self.message_id_index
            .get(message_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Append `message` to `thread` unless the thread already holds its
/// `Message-Id` or this call already appended its key.
fn append_if_new(
    message: &Message,
    existing_message_ids: &HashSet<String>,
    processed: &mut HashSet<MessageKey>,
    thread: &mut Vec<Message>,
) -> bool {
    if message
        .message_id
        .as_ref()
        .is_some_and(|id| existing_message_ids.contains(id))
    {
        return false;
    }
    if !processed.insert(message.key()) {
        return false;
    }
    thread.push(message.clone());
    true
}
