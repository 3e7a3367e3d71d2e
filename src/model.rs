use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ===== Message Identity =====

/// Composite identity of a message within a batch.
///
/// Two messages with equal `(mail_id, folder)` are the same message; every
/// deduplication decision in the threading engine keys on this pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageKey {
    pub mail_id: String,
    pub folder: String,
}

// ===== Message Model =====

/// A message as handed over by the message store.
///
/// The threading engine reads only identity fields, the already-extracted
/// header values, and `received_date`. `in_reply_to` exists so the fallback
/// in [`crate::headers::ensure_references`] can be applied before a message
/// enters the engine; the engine itself never looks at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub mail_id: String,
    pub folder: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub in_reply_to: Option<String>,
    #[serde(default)]
    pub references: Vec<String>,
    pub received_date: DateTime<Utc>,
}

impl Message {
    pub fn key(&self) -> MessageKey {
        MessageKey {
            mail_id: self.mail_id.clone(),
            folder: self.folder.clone(),
        }
    }
}

// ===== Comparators =====

/// Default display order: received date descending (newest first).
pub fn by_date_desc(a: &Message, b: &Message) -> Ordering {
    b.received_date.cmp(&a.received_date)
}

/// Received date ascending (oldest first); the order messages must have
/// when they are folded.
pub fn by_date_asc(a: &Message, b: &Message) -> Ordering {
    a.received_date.cmp(&b.received_date)
}
