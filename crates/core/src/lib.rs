// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wsbar-core: Domain types for the workspaces bar indicator engine

pub mod button;
pub mod indicator;
pub mod name_list;

pub use button::PointerButton;
pub use indicator::{IndicatorDescriptor, VisualState};
pub use name_list::{display_text, positional_label, with_name_at};
