//! Conversation aggregate: a deduplicated bag of messages plus derived
//! lookup sets for cheap relationship tests.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::{Message, MessageKey, by_date_desc};

/// A group of messages believed to belong to one email thread.
///
/// Membership is deduplicated by `(mail_id, folder)`. Two derived sets are
/// maintained incrementally on every insert, never recomputed from
/// scratch:
///
/// - `message_ids`: every `Message-Id` carried by a member
/// - `references`: every reference token carried by a member
///
/// Both are exactly the union over current members at all times, which
/// keeps the relationship tests below at hash-set lookup cost.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    keys: HashSet<MessageKey>,
    message_ids: HashSet<String>,
    references: HashSet<String>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conversation holding a single message.
    pub fn for_message(message: Message) -> Self {
        let mut conversation = Self::new();
        conversation.add_message(message);
        conversation
    }

    /// Start a conversation from a pre-existing collection of messages.
    pub fn from_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        let mut conversation = Self::new();
        for message in messages {
            conversation.add_message(message);
        }
        conversation
    }

    /// Insert a message, deduplicated by `(mail_id, folder)`.
    ///
    /// Re-adding an already-present message leaves membership and both
    /// derived sets unchanged.
    pub fn add_message(&mut self, message: Message) {
        if !self.keys.insert(message.key()) {
            return;
        }
        if let Some(id) = &message.message_id {
            self.message_ids.insert(id.clone());
        }
        for token in &message.references {
            self.references.insert(token.clone());
        }
        self.messages.push(message);
    }

    /// Absorb every message of `other` into `self`, merging the derived
    /// sets along the way.
    ///
    /// Taking `other` by value encodes the ownership contract: a joined
    /// conversation is gone, only the absorbing one lives on.
    pub fn join(&mut self, other: Conversation) {
        for message in other.messages {
            self.add_message(message);
        }
    }

    /// True when this conversation and `message` share a reference
    /// relationship: a member points at the message, both point at a
    /// common ancestor, or the message points at a member.
    pub fn is_linked_to_message(&self, message: &Message) -> bool {
        if !self.references.is_empty() {
            if let Some(id) = &message.message_id {
                if self.references.contains(id) {
                    return true;
                }
            }
            if message
                .references
                .iter()
                .any(|token| self.references.contains(token))
            {
                return true;
            }
        }
        !self.message_ids.is_empty()
            && message
                .references
                .iter()
                .any(|token| self.message_ids.contains(token))
    }

    /// Conversation-to-conversation variant of the relationship test:
    /// three pairwise intersection checks over the derived sets.
    pub fn is_linked_to(&self, other: &Conversation) -> bool {
        !self.references.is_disjoint(&other.message_ids)
            || !self.references.is_disjoint(&other.references)
            || !other.references.is_disjoint(&self.message_ids)
    }

    /// Member messages sorted by received date, newest first.
    pub fn messages(&self) -> Vec<&Message> {
        self.messages_sorted_by(by_date_desc)
    }

    /// Member messages sorted by a caller-provided comparator.
    ///
    /// Pure read; repeated calls with different comparators yield
    /// different orders over the same members without mutating anything.
    pub fn messages_sorted_by<F>(&self, mut cmp: F) -> Vec<&Message>
    where
        F: FnMut(&Message, &Message) -> Ordering,
    {
        let mut ordered: Vec<&Message> = self.messages.iter().collect();
        ordered.sort_by(|a, b| cmp(a, b));
        ordered
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn contains(&self, key: &MessageKey) -> bool {
        self.keys.contains(key)
    }

    /// `Message-Id` values of all members.
    pub fn message_ids(&self) -> &HashSet<String> {
        &self.message_ids
    }

    /// Reference tokens of all members.
    pub fn references(&self) -> &HashSet<String> {
        &self.references
    }
}
