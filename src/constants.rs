// Markup contract and motion defaults.

// Attribute carrying the per-element motion coefficients
pub const PARALLAX_ATTRIBUTE: &str = "data-parallax";

// Custom property written in variable mode (consumed by page stylesheets)
pub const PARALLAX_CUSTOM_PROPERTY: &str = "--parallaxY";

pub const TRANSFORM_PROPERTY: &str = "transform";

// Default coefficients for keys absent from the attribute
pub const DEFAULT_VERTICAL_FACTOR: f64 = 0.2; // translateY px per px of delta
pub const DEFAULT_HORIZONTAL_FACTOR: f64 = 0.0; // translateX px per px of delta
pub const DEFAULT_ROTATION_FACTOR: f64 = 0.0; // degrees per px of delta

#[inline]
pub fn attribute_selector(attribute: &str) -> String {
    format!("[{}]", attribute)
}
