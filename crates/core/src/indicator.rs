// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render-ready indicator state.
//!
//! Descriptors are ephemeral: the engine rebuilds the full list from host
//! state on every refresh and hands it to the panel surface. Nothing caches
//! a descriptor across refreshes, so a stale descriptor cannot outlive a
//! workspace-count change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual state of one workspace indicator.
///
/// The four states are the cross product of "is this the active workspace"
/// and "does it contain any windows". Surfaces typically map these to style
/// classes via [`VisualState::style_class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualState {
    ActiveOccupied,
    ActiveEmpty,
    InactiveOccupied,
    InactiveEmpty,
}

impl VisualState {
    /// Derive the visual state from the two host-provided flags.
    pub fn new(is_active: bool, has_windows: bool) -> Self {
        match (is_active, has_windows) {
            (true, true) => VisualState::ActiveOccupied,
            (true, false) => VisualState::ActiveEmpty,
            (false, true) => VisualState::InactiveOccupied,
            (false, false) => VisualState::InactiveEmpty,
        }
    }

    /// Returns true for the active workspace's states.
    pub fn is_active(self) -> bool {
        matches!(self, VisualState::ActiveOccupied | VisualState::ActiveEmpty)
    }

    /// Stable style-class name for surface styling.
    pub fn style_class(self) -> &'static str {
        match self {
            VisualState::ActiveOccupied => "active-occupied",
            VisualState::ActiveEmpty => "active-empty",
            VisualState::InactiveOccupied => "inactive-occupied",
            VisualState::InactiveEmpty => "inactive-empty",
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style_class())
    }
}

/// One entry of the rendered indicator list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorDescriptor {
    /// 0-based workspace index; dense and contiguous in `[0, count)`.
    pub index: usize,
    /// Custom name, or the positional label when no name is set.
    pub display_text: String,
    pub visual_state: VisualState,
}

#[cfg(test)]
#[path = "indicator_tests.rs"]
mod tests;
