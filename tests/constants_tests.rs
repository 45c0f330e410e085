// Host-side tests for the markup contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn attribute_is_a_data_attribute() {
    assert!(PARALLAX_ATTRIBUTE.starts_with("data-"));
    assert_eq!(attribute_selector(PARALLAX_ATTRIBUTE), "[data-parallax]");
}

#[test]
fn custom_property_is_a_css_variable() {
    assert!(PARALLAX_CUSTOM_PROPERTY.starts_with("--"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn only_vertical_motion_is_on_by_default() {
    assert!(DEFAULT_VERTICAL_FACTOR > 0.0);
    assert_eq!(DEFAULT_HORIZONTAL_FACTOR, 0.0);
    assert_eq!(DEFAULT_ROTATION_FACTOR, 0.0);
}
