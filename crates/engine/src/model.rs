// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Indicator model: host state in, descriptor list out, gestures back in.
//!
//! The model never patches indicators incrementally. Every relevant host
//! event triggers a full rebuild from `count()`, which makes refresh
//! idempotent and safe to re-enter: a store write inside a gesture handler
//! may synchronously fire a change notification that refreshes again, and
//! the nested refresh converges on the same list. No borrow is held across
//! a call into a collaborator.

use crate::session::{CommitOutcome, RenameSession};
use crate::{BarConfig, DraftEntry, ModelError, NameStore, PanelSurface, WorkspaceSource};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wsbar_core::{name_list, IndicatorDescriptor, PointerButton, VisualState};

/// Synchronization core between the host stores and the panel surface.
pub struct IndicatorModel<S, N, P> {
    source: Rc<S>,
    names: Rc<N>,
    surface: Rc<P>,
    renaming_enabled: Cell<bool>,
    session: RefCell<Option<RenameSession>>,
}

impl<S, N, P> IndicatorModel<S, N, P>
where
    S: WorkspaceSource,
    N: NameStore,
    P: PanelSurface,
{
    pub fn new(source: Rc<S>, names: Rc<N>, surface: Rc<P>, config: BarConfig) -> Self {
        Self {
            source,
            names,
            surface,
            renaming_enabled: Cell::new(config.renaming_enabled),
            session: RefCell::new(None),
        }
    }

    /// Derive the full indicator list from current host state.
    pub fn descriptors(&self) -> Vec<IndicatorDescriptor> {
        let count = self.source.count();
        let active = self.source.active_index();
        let names = self.names.names();
        (0..count)
            .map(|index| IndicatorDescriptor {
                index,
                display_text: name_list::display_text(index, &names),
                visual_state: VisualState::new(index == active, self.source.has_windows(index)),
            })
            .collect()
    }

    /// Rebuild the indicator list and push it to the surface.
    pub fn refresh(&self) {
        let descriptors = self.descriptors();
        tracing::debug!(
            count = descriptors.len(),
            active = self.source.active_index(),
            "refreshed workspace indicators"
        );
        self.surface.render(&descriptors);
    }

    /// Switch to the workspace at `index`, or toggle the overview when it
    /// is already active. The two are mutually exclusive.
    pub fn activate(&self, index: usize) -> Result<(), ModelError> {
        let count = self.source.count();
        if index >= count {
            return Err(ModelError::IndexOutOfRange { index, count });
        }
        if index == self.source.active_index() {
            tracing::debug!(index, "reclick on active workspace, toggling overview");
            self.source.toggle_overview();
        } else {
            tracing::debug!(index, "switching workspace");
            self.source.activate(index);
        }
        Ok(())
    }

    /// Write one name, preserving every other entry, as a single atomic
    /// whole-list replace. Pads with empty strings when the stored list is
    /// shorter than `index`.
    pub fn set_name(&self, index: usize, text: &str) -> Result<(), ModelError> {
        let count = self.source.count();
        if index >= count {
            return Err(ModelError::IndexOutOfRange { index, count });
        }
        let updated = name_list::with_name_at(&self.names.names(), index, text);
        self.names.set_names(updated);
        Ok(())
    }

    /// Surface callback: an indicator was clicked.
    ///
    /// Secondary/middle opens the rename session. Primary switches, except
    /// while the rename menu is open with renaming enabled: that click only
    /// closes the menu and must not also switch workspaces.
    pub fn indicator_clicked(&self, index: usize, button: PointerButton) -> Result<(), ModelError> {
        if button.opens_menu() {
            self.open_rename_session();
            return Ok(());
        }
        if self.renaming_enabled.get() && self.session.borrow().is_some() {
            tracing::debug!(index, "primary click suppressed while rename menu is open");
            return Ok(());
        }
        self.activate(index)
    }

    /// Surface callback: the rename menu opened. Snapshots current display
    /// texts as drafts and returns them for the menu's entry fields. An
    /// already-open session is replaced.
    pub fn open_rename_session(&self) -> Vec<DraftEntry> {
        let session = RenameSession::open(&self.descriptors());
        let drafts = session.drafts().to_vec();
        tracing::debug!(entries = drafts.len(), "rename session opened");
        *self.session.borrow_mut() = Some(session);
        drafts
    }

    /// Surface callback: one menu entry's text changed. In-memory only.
    pub fn menu_entry_edited(&self, index: usize, text: &str) {
        if let Some(session) = self.session.borrow_mut().as_mut() {
            session.edit_draft(index, text);
        }
    }

    /// Surface callback: one menu entry was committed (enter pressed).
    ///
    /// Writes that single name immediately; other indices keep their stored
    /// values, not their unsaved drafts. Any commit closes the session.
    pub fn menu_entry_committed(&self, index: usize, text: &str) -> Result<(), ModelError> {
        self.session.borrow_mut().take();
        self.set_name(index, text)
    }

    /// Surface callback: commit every pending draft as one atomic name-list
    /// replace.
    ///
    /// Refused when the draft count no longer matches the live workspace
    /// count: the snapshot predates a count change and writing it would
    /// clobber names for workspaces it never saw. The store is left
    /// untouched and the next refresh reconciles the UI.
    pub fn rename_all_requested(&self) -> CommitOutcome {
        let session = self.session.borrow_mut().take();
        let Some(session) = session else {
            tracing::warn!("commit-all with no open rename session");
            return CommitOutcome::StaleSession;
        };
        let count = self.source.count();
        if session.len() != count {
            tracing::warn!(
                drafts = session.len(),
                count,
                "refusing stale rename commit"
            );
            return CommitOutcome::StaleSession;
        }
        self.names.set_names(session.into_names());
        CommitOutcome::Applied
    }

    /// Surface callback: the rename menu closed without committing.
    pub fn menu_closed(&self) {
        self.session.borrow_mut().take();
    }

    pub fn renaming_enabled(&self) -> bool {
        self.renaming_enabled.get()
    }

    /// Host pushes settings changes down at runtime.
    pub fn set_renaming_enabled(&self, enabled: bool) {
        self.renaming_enabled.set(enabled);
    }

    pub fn has_open_session(&self) -> bool {
        self.session.borrow().is_some()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
