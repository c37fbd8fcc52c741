// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pointer-button classification for indicator clicks.

use serde::{Deserialize, Serialize};

/// Which pointer button hit an indicator.
///
/// Decoded once at the panel-surface boundary; raw toolkit button codes
/// never cross into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    /// Secondary and middle clicks open the rename menu; primary switches.
    pub fn opens_menu(self) -> bool {
        matches!(self, PointerButton::Secondary | PointerButton::Middle)
    }
}
