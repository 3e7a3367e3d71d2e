//! Incremental thread growth scenarios.

use chrono::{DateTime, TimeZone, Utc};
use mailfold::{Message, ThreadableMapping};

fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

fn message(mail_id: &str, message_id: Option<&str>, refs: &[&str], day: u32) -> Message {
    Message {
        mail_id: mail_id.to_string(),
        folder: "INBOX".to_string(),
        subject: String::new(),
        message_id: message_id.map(str::to_string),
        in_reply_to: None,
        references: refs.iter().map(|r| r.to_string()).collect(),
        received_date: date(day),
    }
}

/// A new reply grows the thread once; repeating the call changes nothing.
#[test]
fn check_for_grows_thread_then_settles() {
    let m1 = message("m1", Some("a@x"), &[], 1);
    let m2 = message("m2", Some("b@x"), &["a@x"], 2);
    let mapping = ThreadableMapping::new(&[m1.clone(), m2.clone()]);

    let mut thread = vec![m1.clone()];

    let changed = mapping.check_for(&[m2.clone()], &mut thread);
    assert!(changed);
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].mail_id, "m1");
    assert_eq!(thread[1].mail_id, "m2");

    let changed_again = mapping.check_for(&[m2], &mut thread);
    assert!(!changed_again);
    assert_eq!(thread.len(), 2);
}

/// Growth is append-only: existing thread order is preserved and nothing
/// is removed across repeated calls with different candidates.
#[test]
fn check_for_appends_without_disturbing_existing_order() {
    let m1 = message("m1", Some("a@x"), &[], 1);
    let m2 = message("m2", Some("b@x"), &["a@x"], 2);
    let m3 = message("m3", Some("c@x"), &["a@x"], 3);
    let mapping = ThreadableMapping::new(&[m1.clone(), m2.clone(), m3.clone()]);

    let mut thread = vec![m1.clone()];
    assert!(mapping.check_for(&[m2], &mut thread));
    assert!(mapping.check_for(&[m3], &mut thread));

    let mail_ids: Vec<_> = thread.iter().map(|m| m.mail_id.as_str()).collect();
    assert_eq!(mail_ids, vec!["m1", "m2", "m3"]);
}

/// A candidate pulls in its own replies from the batch.
#[test]
fn check_for_pulls_replies_of_candidates() {
    let m1 = message("m1", Some("a@x"), &[], 1);
    let m2 = message("m2", Some("b@x"), &["a@x"], 2);
    let m3 = message("m3", Some("c@x"), &["b@x"], 3);
    let mapping = ThreadableMapping::new(&[m1.clone(), m2.clone(), m3.clone()]);

    // checking for m2 brings in m2 itself and m3, which references it
    let mut thread = vec![m1];
    assert!(mapping.check_for(&[m2], &mut thread));

    let mail_ids: Vec<_> = thread.iter().map(|m| m.mail_id.as_str()).collect();
    assert_eq!(mail_ids, vec!["m1", "m3", "m2"]);
}

/// Candidates unknown to the batch contribute nothing.
#[test]
fn check_for_ignores_unindexed_candidates() {
    let m1 = message("m1", Some("a@x"), &[], 1);
    let mapping = ThreadableMapping::new(&[m1.clone()]);

    let stranger = message("m9", Some("z@x"), &["q@x"], 9);
    let mut thread = vec![m1];
    assert!(!mapping.check_for(&[stranger], &mut thread));
    assert_eq!(thread.len(), 1);
}

/// Accessor behavior for absent keys: empty result, never an error.
#[test]
fn accessors_are_total() {
    let mapping = ThreadableMapping::new(&[]);
    assert!(mapping.refs("missing@x").is_empty());
    assert!(mapping.by_message_id("missing@x").is_empty());
}
