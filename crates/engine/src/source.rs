// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host window-manager boundary.

use crate::ObserverId;
use std::rc::Rc;

/// Change notification from the workspace source.
///
/// The engine reacts to every variant the same way (full rebuild); the
/// distinction exists for the host side and for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceEvent {
    /// Number of workspaces changed.
    CountChanged,
    /// A different workspace became active.
    ActiveChanged,
    /// A window was added, removed, or moved across workspaces.
    WindowsChanged,
}

/// Read model and command surface of the host window manager.
///
/// `count()` is the single source of truth for how many workspaces exist;
/// valid indices are always `[0, count)`. `activate` takes effect
/// asynchronously: the switch is observed through a later
/// [`WorkspaceEvent::ActiveChanged`], never through a return value.
pub trait WorkspaceSource {
    fn count(&self) -> usize;

    fn active_index(&self) -> usize;

    fn has_windows(&self, index: usize) -> bool;

    /// Request a switch to the workspace at `index`.
    fn activate(&self, index: usize);

    /// Request the host-level overview toggle.
    fn toggle_overview(&self);

    /// Register a change observer; the handle deregisters it.
    fn observe(&self, observer: Rc<dyn Fn(WorkspaceEvent)>) -> ObserverId;

    fn unobserve(&self, id: ObserverId);
}
