// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host panel boundary.

use wsbar_core::IndicatorDescriptor;

/// Host UI container that renders the indicator row.
///
/// The engine pushes the full descriptor list on every refresh; the surface
/// owns widget identity, layout, and input decoding. Gestures come back in
/// as calls on [`crate::IndicatorModel`].
pub trait PanelSurface {
    fn render(&self, descriptors: &[IndicatorDescriptor]);
}
