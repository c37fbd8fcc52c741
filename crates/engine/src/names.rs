// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host settings-store boundary for workspace names.

use crate::ObserverId;
use std::rc::Rc;

/// Persistent ordered list of workspace display names.
///
/// The list length may differ from the workspace count while the host
/// settles; readers bounds-check and fall back to positional labels. The
/// only write primitive is an atomic whole-list replace, which is what
/// makes concurrent renames last-writer-wins instead of lost-update.
pub trait NameStore {
    fn names(&self) -> Vec<String>;

    /// Atomic whole-list replace.
    fn set_names(&self, names: Vec<String>);

    /// Register a change observer; the handle deregisters it.
    fn observe(&self, observer: Rc<dyn Fn()>) -> ObserverId;

    fn unobserve(&self, id: ObserverId);
}
