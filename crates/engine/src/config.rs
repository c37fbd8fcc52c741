// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration.

/// Host-provided configuration for one bar instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarConfig {
    /// When true, a primary click is suppressed while the rename menu is
    /// open so closing the menu does not also switch workspaces.
    pub renaming_enabled: bool,
}
