//! Shared harness for the bar specs.

use std::rc::Rc;
use wsbar_engine::{
    BarConfig, FakeNameStore, FakePanelSurface, FakeWorkspaceSource, WorkspacesBar,
};

pub type Bar = WorkspacesBar<FakeWorkspaceSource, FakeNameStore, FakePanelSurface>;

/// A bar wired to fake host collaborators.
pub struct Host {
    pub source: Rc<FakeWorkspaceSource>,
    pub names: Rc<FakeNameStore>,
    pub surface: Rc<FakePanelSurface>,
    pub bar: Bar,
}

impl Host {
    /// Display texts of the most recent render.
    pub fn texts(&self) -> Vec<String> {
        self.surface
            .last_render()
            .unwrap()
            .into_iter()
            .map(|d| d.display_text)
            .collect()
    }

    /// Indices rendered with an active visual state.
    pub fn active_indices(&self) -> Vec<usize> {
        self.surface
            .last_render()
            .unwrap()
            .into_iter()
            .filter(|d| d.visual_state.is_active())
            .map(|d| d.index)
            .collect()
    }
}

pub fn host(count: usize, active: usize, config: BarConfig) -> Host {
    host_with_names(count, active, &[], config)
}

pub fn host_with_names(count: usize, active: usize, names: &[&str], config: BarConfig) -> Host {
    let source = Rc::new(FakeWorkspaceSource::new(count, active));
    let names = Rc::new(FakeNameStore::with_names(names));
    let surface = Rc::new(FakePanelSurface::new());
    let bar = WorkspacesBar::create(source.clone(), names.clone(), surface.clone(), config);
    Host {
        source,
        names,
        surface,
        bar,
    }
}

pub fn renaming() -> BarConfig {
    BarConfig {
        renaming_enabled: true,
    }
}
