//! Batch folding of conversations into maximal threads.
//!
//! `fold` repeatedly merges conversations linked through shared
//! `Message-Id` / reference tokens until no two remaining conversations
//! are linked. It computes connected components of the reference graph,
//! not a parent/child tree.
//!
//! ## Input Order Contract
//!
//! The walk is forward-only: once a conversation has served as an anchor
//! it is final and never re-examined. That is sound when the input list is
//! ordered so that a message's references point to conversations the walk
//! has already passed through, which holds for messages sorted by
//! ascending received date (replies reference earlier messages). With an
//! order that violates this, legitimately linked conversations can stay
//! split; see `forward_only_pass_depends_on_input_order` in the
//! integration tests. This is a deliberate approximation, kept as-is
//! rather than turned into a full transitive-closure pass.
//!
//! ## Complexity
//!
//! Each of up to N anchors runs one forward scan over the remainder of the
//! list, giving O(N²) worst case. Fine for per-folder batch sizes typical
//! of mail threading (hundreds to low thousands of messages).

use std::time::Instant;

use super::conversation::Conversation;

/// Collapse a list of conversations into maximal threads.
///
/// Walks the list front to back. Each position in turn becomes the anchor
/// of one absorption pass over everything after it; whatever the anchor
/// absorbs is removed from the list, and the anchor is final afterwards.
pub fn fold(mut conversations: Vec<Conversation>) -> Vec<Conversation> {
    let start = Instant::now();
    let input_len = conversations.len();

    let mut finalized = 0;
    while finalized < conversations.len() {
        let tail = conversations.split_off(finalized + 1);
        let kept = fold_into(&mut conversations[finalized], tail);
        conversations.extend(kept);
        finalized += 1;
    }

    log::debug!(
        "fold complete: {} conversation(s) -> {} thread(s) in {:.2}ms",
        input_len,
        conversations.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    conversations
}

/// One absorption pass: every candidate linked to `anchor` is joined into
/// it, in candidate order; the rest come back unchanged, order preserved.
///
/// The anchor's token sets grow as it absorbs, so a single pass can pick
/// up candidates that are only linked through an earlier absorption in the
/// same pass.
pub fn fold_into(
    anchor: &mut Conversation,
    candidates: Vec<Conversation>,
) -> Vec<Conversation> {
    let mut kept = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if anchor.is_linked_to(&candidate) {
            log::trace!(
                "absorbing conversation of {} message(s) into anchor",
                candidate.len()
            );
            anchor.join(candidate);
        } else {
            kept.push(candidate);
        }
    }
    kept
}
