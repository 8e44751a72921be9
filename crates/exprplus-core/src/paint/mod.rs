//! Color model shared by the codec, the ramp style and the expression functions.
//!
//! Scope:
//! - 8-bit straight-alpha RGBA colors with derived HSL/HSV views
//! - color ramps (gradients sampled by a normalized position)

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorRamp, ColorStop, GradientRamp};
