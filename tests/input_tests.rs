// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn primary_button_rotates() {
    assert_eq!(drag_mode_for(0, false, false), DragMode::Rotate);
}

#[test]
fn secondary_or_modified_primary_pans() {
    assert_eq!(drag_mode_for(2, false, false), DragMode::Pan);
    assert_eq!(drag_mode_for(0, true, false), DragMode::Pan);
    assert_eq!(drag_mode_for(0, false, true), DragMode::Pan);
}

#[test]
fn other_buttons_do_nothing() {
    assert_eq!(drag_mode_for(1, false, false), DragMode::None);
    assert_eq!(drag_mode_for(3, true, true), DragMode::None);
}

#[test]
fn wheel_delta_is_normalized_to_pixels() {
    assert_eq!(wheel_delta_px(-53.0, 0, 16.0, 800.0), -53.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 800.0), -800.0);
}

#[test]
fn pointer_state_defaults_to_idle() {
    let p = PointerState::default();
    assert_eq!(p.mode, DragMode::None);
}
