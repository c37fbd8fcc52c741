// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name-list resolution and editing helpers.
//!
//! The name list lives in the host settings store and its length may
//! legitimately differ from the workspace count (settings can load before
//! the window manager settles). Lookups are bounds-checked and fall back to
//! the positional label; an empty string counts as "no name set".

/// 1-based fallback label for a workspace with no custom name.
pub fn positional_label(index: usize) -> String {
    (index + 1).to_string()
}

/// Resolve the display text for a workspace.
///
/// A missing or empty entry falls back to the positional label, so the
/// result is never empty.
pub fn display_text(index: usize, names: &[String]) -> String {
    match names.get(index) {
        Some(name) if !name.is_empty() => name.clone(),
        _ => positional_label(index),
    }
}

/// Return a copy of `names` with the entry at `index` replaced by `text`.
///
/// The list is padded with empty strings when `index` is past the end, so
/// the write never drops names that other workspaces still use. Callers
/// hand the result to the store as one atomic whole-list write.
pub fn with_name_at(names: &[String], index: usize, text: impl Into<String>) -> Vec<String> {
    let mut updated = names.to_vec();
    if index >= updated.len() {
        updated.resize(index + 1, String::new());
    }
    updated[index] = text.into();
    updated
}

#[cfg(test)]
#[path = "name_list_tests.rs"]
mod tests;
