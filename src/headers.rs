//! Header normalization applied before messages enter the threading engine.
//!
//! The engine consumes already-extracted header strings; this module owns
//! the cleanup that has to happen upstream of it:
//!
//! - **Message-ID normalization**: strip angle brackets and whitespace
//! - **Reference extraction**: tokenize a raw `References` header value
//! - **In-Reply-To fallback**: synthesize a single-element reference list
//!   for messages that carry `In-Reply-To` but no `References`
//!
//! MIME decoding and charset handling are not done here; callers hand over
//! header values that are already plain strings.

use crate::model::Message;

/// Clean a message id by removing angle brackets and surrounding
/// whitespace. An id that is empty after cleanup carries no information
/// and becomes `None`.
pub fn normalize_message_id(raw: &str) -> Option<String> {
    let cleaned = raw.trim().trim_matches(&['<', '>'][..]).trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Extract message ids from a raw `References` header value.
///
/// Splits on whitespace rather than strict RFC grammar for better
/// compatibility with real-world producers. Token order is preserved.
pub fn extract_references(header_value: &str) -> Vec<String> {
    header_value
        .split_whitespace()
        .filter_map(normalize_message_id)
        .collect()
}

/// Substitute a single-element reference list from `In-Reply-To` when the
/// message has no reference tokens.
///
/// This must run before the message reaches the fold engine or a
/// [`crate::threading::ThreadableMapping`]; neither re-derives the
/// fallback on its own.
pub fn ensure_references(message: &mut Message) {
    if !message.references.is_empty() {
        return;
    }
    if let Some(parent) = message
        .in_reply_to
        .as_deref()
        .and_then(normalize_message_id)
    {
        message.references.push(parent);
    }
}
