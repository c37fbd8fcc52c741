// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transient state of an open rename menu.
//!
//! A session snapshots one draft per displayed indicator when the menu
//! opens, absorbs in-memory edits while it stays open, and is consumed by a
//! commit or discarded on close. Nothing in a session touches the host
//! stores; all writes go through the model.

use wsbar_core::IndicatorDescriptor;

/// One pending rename draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEntry {
    pub index: usize,
    pub text: String,
}

/// Outcome of a commit-all request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Drafts were written to the name store as one atomic replace.
    Applied,
    /// The session no longer matched the live workspace count (or there was
    /// no open session); the store was left untouched.
    StaleSession,
}

/// Pending per-indicator edits while the rename menu is open.
#[derive(Debug)]
pub struct RenameSession {
    entries: Vec<DraftEntry>,
}

impl RenameSession {
    /// Snapshot the currently displayed indicators as drafts, one per
    /// indicator, pre-filled with the text the user sees.
    pub fn open(descriptors: &[IndicatorDescriptor]) -> Self {
        let entries = descriptors
            .iter()
            .map(|descriptor| DraftEntry {
                index: descriptor.index,
                text: descriptor.display_text.clone(),
            })
            .collect();
        Self { entries }
    }

    /// Update one draft in place. Unknown indices are ignored; the entry
    /// set is fixed at open time.
    pub fn edit_draft(&mut self, index: usize, text: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.index == index) {
            entry.text = text.to_string();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn drafts(&self) -> &[DraftEntry] {
        &self.entries
    }

    /// Consume the session into the ordered name list for a whole-list
    /// store write.
    pub fn into_names(self) -> Vec<String> {
        self.entries.into_iter().map(|entry| entry.text).collect()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
