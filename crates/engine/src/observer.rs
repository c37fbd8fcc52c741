// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer registration handle.

/// Handle for one registered change observer.
///
/// Returned by a store's `observe` and passed back to `unobserve` at
/// teardown. Each [`crate::WorkspacesBar`] instance owns its handles; there
/// is no global listener state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}
