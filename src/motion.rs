use crate::constants::{PARALLAX_CUSTOM_PROPERTY, TRANSFORM_PROPERTY};
use crate::options::MotionOptions;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.scroll_y + self.height / 2.0
    }
}

/// A single style write produced by one recompute.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleUpdate {
    Transform(String),
    CustomProperty(String),
}

impl StyleUpdate {
    pub fn property(&self) -> &'static str {
        match self {
            StyleUpdate::Transform(_) => TRANSFORM_PROPERTY,
            StyleUpdate::CustomProperty(_) => PARALLAX_CUSTOM_PROPERTY,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            StyleUpdate::Transform(v) | StyleUpdate::CustomProperty(v) => v,
        }
    }
}

// Signed distance from the viewport center to the anchor; positive when the
// anchor sits below the center.
#[inline]
pub fn delta_y(anchor_y: f64, viewport: Viewport) -> f64 {
    anchor_y - viewport.center_y()
}

pub fn compute_style(anchor_y: f64, viewport: Viewport, options: &MotionOptions) -> StyleUpdate {
    let delta = delta_y(anchor_y, viewport);
    let translate_y = delta * -1.0 * options.vertical_factor;
    if options.use_custom_property {
        return StyleUpdate::CustomProperty(format!("{}px", css_number(translate_y)));
    }
    let mut transform = format!("translateY({}px)", css_number(translate_y));
    // zero coefficients drop their term entirely
    if options.rotation_factor != 0.0 {
        transform.push_str(&format!(
            " rotate({}deg)",
            css_number(delta * options.rotation_factor)
        ));
    }
    if options.horizontal_factor != 0.0 {
        transform.push_str(&format!(
            " translateX({}px)",
            css_number(delta * options.horizontal_factor)
        ));
    }
    StyleUpdate::Transform(transform)
}

// `-0` would print as "-0"; CSS output wants "0".
#[inline]
pub fn css_number(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
