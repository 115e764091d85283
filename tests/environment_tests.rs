// Host-side tests for environment image bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod environment {
    include!("../src/environment.rs");
}

use environment::*;

fn image(url: &str) -> EnvironmentImage {
    EnvironmentImage {
        url: url.to_string(),
        width: 2,
        height: 1,
        rgba: vec![0; 8],
    }
}

#[test]
fn small_images_keep_their_size() {
    assert_eq!(fit_texture_size(2048, 1024, 4096), (2048, 1024));
    assert_eq!(fit_texture_size(4096, 2048, 4096), (4096, 2048));
}

#[test]
fn large_images_are_scaled_to_fit() {
    assert_eq!(fit_texture_size(8192, 4096, 4096), (4096, 2048));
    assert_eq!(fit_texture_size(1000, 9000, 4096).1, 4096);
}

#[test]
fn degenerate_sizes_never_produce_zero() {
    assert_eq!(fit_texture_size(0, 0, 4096), (1, 1));
    let (w, h) = fit_texture_size(100_000, 1, 4096);
    assert_eq!(w, 4096);
    assert!(h >= 1);
}

#[test]
fn slot_accepts_only_current_request() {
    let mut slot = EnvironmentSlot::default();
    assert!(slot.begin("desktop.jpg"));
    assert!(!slot.begin("desktop.jpg"));
    assert!(slot.begin("mobile.jpg"));

    // desktop finished after mobile was requested
    assert!(!slot.deliver(image("desktop.jpg")));
    assert!(slot.ready.is_none());

    assert!(slot.deliver(image("mobile.jpg")));
    assert_eq!(slot.ready.as_ref().map(|i| i.url.as_str()), Some("mobile.jpg"));
}

#[test]
fn new_request_discards_undrawn_image() {
    let mut slot = EnvironmentSlot::default();
    slot.begin("a.jpg");
    assert!(slot.deliver(image("a.jpg")));
    slot.begin("b.jpg");
    assert!(slot.ready.is_none());
}
