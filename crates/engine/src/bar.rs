// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owned bar instance: model plus observer wiring.
//!
//! `WorkspacesBar::create` is the factory the host calls once per panel
//! slot; dropping the bar deregisters its observers. There is no global
//! instance. Observers capture the model weakly, so a notification the host
//! delivers after teardown lands in an upgrade failure instead of a
//! use-after-free.

use crate::{BarConfig, IndicatorModel, NameStore, ObserverId, PanelSurface, WorkspaceSource};
use std::rc::Rc;

/// One workspaces bar wired to its host stores.
pub struct WorkspacesBar<S, N, P>
where
    S: WorkspaceSource,
    N: NameStore,
    P: PanelSurface,
{
    model: Rc<IndicatorModel<S, N, P>>,
    source: Rc<S>,
    names: Rc<N>,
    source_observer: ObserverId,
    names_observer: ObserverId,
}

impl<S, N, P> WorkspacesBar<S, N, P>
where
    S: WorkspaceSource + 'static,
    N: NameStore + 'static,
    P: PanelSurface + 'static,
{
    /// Build the model, register one observer per store, and render the
    /// initial indicator list.
    pub fn create(source: Rc<S>, names: Rc<N>, surface: Rc<P>, config: BarConfig) -> Self {
        let model = Rc::new(IndicatorModel::new(
            source.clone(),
            names.clone(),
            surface,
            config,
        ));

        let weak = Rc::downgrade(&model);
        let source_observer = source.observe(Rc::new(move |event| {
            if let Some(model) = weak.upgrade() {
                tracing::debug!(?event, "workspace event");
                model.refresh();
            }
        }));

        let weak = Rc::downgrade(&model);
        let names_observer = names.observe(Rc::new(move || {
            if let Some(model) = weak.upgrade() {
                tracing::debug!("name list changed");
                model.refresh();
            }
        }));

        model.refresh();

        Self {
            model,
            source,
            names,
            source_observer,
            names_observer,
        }
    }

    pub fn model(&self) -> &IndicatorModel<S, N, P> {
        &self.model
    }

    pub fn set_renaming_enabled(&self, enabled: bool) {
        self.model.set_renaming_enabled(enabled);
    }
}

impl<S, N, P> Drop for WorkspacesBar<S, N, P>
where
    S: WorkspaceSource,
    N: NameStore,
    P: PanelSurface,
{
    fn drop(&mut self) {
        tracing::debug!("tearing down workspaces bar observers");
        self.source.unobserve(self.source_observer);
        self.names.unobserve(self.names_observer);
    }
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
