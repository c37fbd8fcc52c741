// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the indicator engine

use thiserror::Error;

/// Errors that can occur in the indicator model.
///
/// An out-of-range index is a programming error at the surface boundary,
/// never a user-facing condition; indices are validated against the live
/// workspace count and never clamped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("workspace index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}
