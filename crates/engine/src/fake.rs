// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake host collaborators for testing.
//!
//! Host-side setters fire the same change notifications a real host would,
//! including synchronously from inside `set_names`, so tests exercise the
//! re-entrant refresh path. Observer lists are cloned out before dispatch;
//! no borrow is held while a callback runs.
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{NameStore, ObserverId, PanelSurface, WorkspaceEvent, WorkspaceSource};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wsbar_core::IndicatorDescriptor;

/// Fake window manager: scripted count/active/occupancy plus recorded
/// commands.
pub struct FakeWorkspaceSource {
    count: Cell<usize>,
    active: Cell<usize>,
    occupied: RefCell<Vec<bool>>,
    activate_calls: RefCell<Vec<usize>>,
    overview_toggles: Cell<usize>,
    observers: RefCell<Vec<(ObserverId, Rc<dyn Fn(WorkspaceEvent)>)>>,
    next_observer: Cell<u64>,
}

impl FakeWorkspaceSource {
    pub fn new(count: usize, active: usize) -> Self {
        Self {
            count: Cell::new(count),
            active: Cell::new(active),
            occupied: RefCell::new(vec![false; count]),
            activate_calls: RefCell::new(Vec::new()),
            overview_toggles: Cell::new(0),
            observers: RefCell::new(Vec::new()),
            next_observer: Cell::new(0),
        }
    }

    /// Host-side: workspace count changed.
    pub fn set_count(&self, count: usize) {
        self.count.set(count);
        self.emit(WorkspaceEvent::CountChanged);
    }

    /// Host-side: the active workspace changed (e.g. a granted `activate`).
    pub fn set_active(&self, index: usize) {
        self.active.set(index);
        self.emit(WorkspaceEvent::ActiveChanged);
    }

    /// Host-side: a window appeared on or left a workspace.
    pub fn set_has_windows(&self, index: usize, has_windows: bool) {
        {
            let mut occupied = self.occupied.borrow_mut();
            if index >= occupied.len() {
                occupied.resize(index + 1, false);
            }
            occupied[index] = has_windows;
        }
        self.emit(WorkspaceEvent::WindowsChanged);
    }

    /// All recorded `activate` requests, in order.
    pub fn activate_calls(&self) -> Vec<usize> {
        self.activate_calls.borrow().clone()
    }

    /// Number of recorded overview-toggle requests.
    pub fn overview_toggles(&self) -> usize {
        self.overview_toggles.get()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn emit(&self, event: WorkspaceEvent) {
        let observers: Vec<_> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(event);
        }
    }
}

impl WorkspaceSource for FakeWorkspaceSource {
    fn count(&self) -> usize {
        self.count.get()
    }

    fn active_index(&self) -> usize {
        self.active.get()
    }

    fn has_windows(&self, index: usize) -> bool {
        self.occupied.borrow().get(index).copied().unwrap_or(false)
    }

    fn activate(&self, index: usize) {
        self.activate_calls.borrow_mut().push(index);
    }

    fn toggle_overview(&self) {
        self.overview_toggles.set(self.overview_toggles.get() + 1);
    }

    fn observe(&self, observer: Rc<dyn Fn(WorkspaceEvent)>) -> ObserverId {
        let id = ObserverId::new(self.next_observer.get());
        self.next_observer.set(id.raw() + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    fn unobserve(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(known, _)| *known != id);
    }
}

/// Fake settings store: in-memory name list with recorded writes.
pub struct FakeNameStore {
    names: RefCell<Vec<String>>,
    writes: RefCell<Vec<Vec<String>>>,
    observers: RefCell<Vec<(ObserverId, Rc<dyn Fn()>)>>,
    next_observer: Cell<u64>,
}

impl Default for FakeNameStore {
    fn default() -> Self {
        Self {
            names: RefCell::new(Vec::new()),
            writes: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            next_observer: Cell::new(0),
        }
    }
}

impl FakeNameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(names: &[&str]) -> Self {
        let store = Self::default();
        *store.names.borrow_mut() = names.iter().map(|s| s.to_string()).collect();
        store
    }

    /// All recorded whole-list writes, in order.
    pub fn writes(&self) -> Vec<Vec<String>> {
        self.writes.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn emit(&self) {
        let observers: Vec<_> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer();
        }
    }
}

impl NameStore for FakeNameStore {
    fn names(&self) -> Vec<String> {
        self.names.borrow().clone()
    }

    fn set_names(&self, names: Vec<String>) {
        *self.names.borrow_mut() = names.clone();
        self.writes.borrow_mut().push(names);
        // Real settings stores notify synchronously from within the write.
        self.emit();
    }

    fn observe(&self, observer: Rc<dyn Fn()>) -> ObserverId {
        let id = ObserverId::new(self.next_observer.get());
        self.next_observer.set(id.raw() + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    fn unobserve(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(known, _)| *known != id);
    }
}

/// Fake panel surface: records every rendered descriptor list.
#[derive(Default)]
pub struct FakePanelSurface {
    renders: RefCell<Vec<Vec<IndicatorDescriptor>>>,
}

impl FakePanelSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    pub fn last_render(&self) -> Option<Vec<IndicatorDescriptor>> {
        self.renders.borrow().last().cloned()
    }

    pub fn renders(&self) -> Vec<Vec<IndicatorDescriptor>> {
        self.renders.borrow().clone()
    }
}

impl PanelSurface for FakePanelSurface {
    fn render(&self, descriptors: &[IndicatorDescriptor]) {
        self.renders.borrow_mut().push(descriptors.to_vec());
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
