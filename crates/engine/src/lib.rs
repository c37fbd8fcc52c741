// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! wsbar-engine: Indicator synchronization engine for a workspaces bar.
//!
//! Keeps a rendered list of workspace indicators consistent with the host's
//! window manager and settings store, and routes user gestures (activate,
//! rename) back into them. Single-threaded and event-driven: the host
//! delivers change notifications, the engine rebuilds the indicator list in
//! full and re-renders.

mod bar;
mod config;
mod error;
mod model;
mod names;
mod observer;
mod session;
mod source;
mod surface;

pub use bar::WorkspacesBar;
pub use config::BarConfig;
pub use error::ModelError;
pub use model::IndicatorModel;
pub use names::NameStore;
pub use observer::ObserverId;
pub use session::{CommitOutcome, DraftEntry, RenameSession};
pub use source::{WorkspaceEvent, WorkspaceSource};
pub use surface::PanelSurface;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNameStore, FakePanelSurface, FakeWorkspaceSource};
