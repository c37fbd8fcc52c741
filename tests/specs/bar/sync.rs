//! Indicator list stays consistent with host state.

use crate::prelude::*;
use similar_asserts::assert_eq;
use wsbar_engine::{BarConfig, NameStore};

#[test]
fn initial_render_reflects_the_host() {
    let host = host_with_names(3, 1, &["Work"], BarConfig::default());
    assert_eq!(host.texts(), vec!["Work", "2", "3"]);
    assert_eq!(host.active_indices(), vec![1]);
}

#[test]
fn count_growth_adds_positional_indicators() {
    let host = host(2, 0, BarConfig::default());
    host.source.set_count(4);
    assert_eq!(host.texts(), vec!["1", "2", "3", "4"]);
}

#[test]
fn count_shrink_drops_trailing_indicators() {
    let host = host_with_names(3, 0, &["Work", "Mail", "Chat"], BarConfig::default());
    host.source.set_count(2);
    assert_eq!(host.texts(), vec!["Work", "Mail"]);
}

#[test]
fn active_change_moves_the_highlight() {
    let host = host(3, 0, BarConfig::default());
    host.source.set_active(2);
    assert_eq!(host.active_indices(), vec![2]);
}

#[test]
fn window_occupancy_updates_the_visual_state() {
    let host = host(2, 0, BarConfig::default());
    host.source.set_has_windows(1, true);
    let occupied: Vec<usize> = host
        .surface
        .last_render()
        .unwrap()
        .into_iter()
        .filter(|d| !d.visual_state.is_active() && d.visual_state.style_class().ends_with("occupied"))
        .map(|d| d.index)
        .collect();
    assert_eq!(occupied, vec![1]);
}

#[test]
fn external_name_edits_show_up_without_a_rename_session() {
    let host = host(2, 0, BarConfig::default());
    host.names
        .set_names(vec!["Focus".to_string(), String::new()]);
    assert_eq!(host.texts(), vec!["Focus", "2"]);
}

#[test]
fn unchanged_host_state_renders_identically() {
    let host = host_with_names(3, 1, &["Work"], BarConfig::default());
    let first = host.surface.last_render().unwrap();
    host.bar.model().refresh();
    host.bar.model().refresh();
    assert_eq!(host.surface.last_render().unwrap(), first);
}
