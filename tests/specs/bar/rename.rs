//! Rename round-trips: drafts, commits, and the stale-session guard.

use crate::prelude::*;
use similar_asserts::assert_eq;
use wsbar_engine::{CommitOutcome, NameStore};

#[test]
fn commit_all_round_trips_through_the_store() {
    let host = host(2, 0, renaming());
    let drafts = host.bar.model().open_rename_session();
    assert_eq!(drafts.len(), 2);

    host.bar.model().menu_entry_edited(0, "Work");
    host.bar.model().menu_entry_edited(1, "Chat");
    assert_eq!(
        host.bar.model().rename_all_requested(),
        CommitOutcome::Applied
    );

    // The store notification re-rendered the bar with the new names.
    assert_eq!(host.texts(), vec!["Work", "Chat"]);
    assert_eq!(
        host.names.writes(),
        vec![vec!["Work".to_string(), "Chat".to_string()]]
    );
}

#[test]
fn commit_one_round_trips_and_keeps_other_names() {
    let host = host_with_names(3, 0, &["Work", "Mail", "Chat"], renaming());
    host.bar.model().open_rename_session();
    host.bar.model().menu_entry_edited(0, "Unsaved");
    host.bar.model().menu_entry_committed(1, "Code").unwrap();

    assert_eq!(host.texts(), vec!["Work", "Code", "Chat"]);
    assert!(!host.bar.model().has_open_session());
}

#[test]
fn stale_session_commit_leaves_the_store_untouched() {
    let host = host_with_names(3, 0, &["Work", "Mail", "Chat"], renaming());
    host.bar.model().open_rename_session();

    // The host removes a workspace while the menu is open.
    host.source.set_count(2);
    assert_eq!(
        host.bar.model().rename_all_requested(),
        CommitOutcome::StaleSession
    );
    assert_eq!(host.names.write_count(), 0);

    // The already-delivered count change reconciled the UI.
    assert_eq!(host.texts(), vec!["Work", "Mail"]);
}

#[test]
fn drafts_opened_before_a_rename_elsewhere_do_not_leak_into_commit_one() {
    let host = host_with_names(2, 0, &["Work", "Mail"], renaming());
    host.bar.model().open_rename_session();
    host.bar.model().menu_entry_edited(0, "Unsaved");

    // Another writer replaces the list while the menu is open.
    host.names
        .set_names(vec!["Deep Work".to_string(), "Mail".to_string()]);

    host.bar.model().menu_entry_committed(1, "Inbox").unwrap();
    assert_eq!(host.texts(), vec!["Deep Work", "Inbox"]);
}

#[test]
fn closing_the_menu_discards_drafts() {
    let host = host_with_names(2, 0, &["Work", "Mail"], renaming());
    host.bar.model().open_rename_session();
    host.bar.model().menu_entry_edited(1, "Gone");
    host.bar.model().menu_closed();

    assert_eq!(host.names.write_count(), 0);
    assert_eq!(host.texts(), vec!["Work", "Mail"]);
}

#[test]
fn reopening_after_a_commit_snapshots_fresh_state() {
    let host = host(2, 0, renaming());
    host.bar.model().open_rename_session();
    host.bar.model().menu_entry_edited(0, "Work");
    assert_eq!(
        host.bar.model().rename_all_requested(),
        CommitOutcome::Applied
    );

    let drafts = host.bar.model().open_rename_session();
    let texts: Vec<&str> = drafts.iter().map(|d| d.text.as_str()).collect();
    assert_eq!(texts, vec!["Work", "2"]);
}
