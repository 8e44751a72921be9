//! Expressions+ core crate.
//!
//! This crate owns the color pieces the expression functions are built on:
//! the 8-bit RGBA color with its HSL/HSV views, the string codec, and named
//! gradient color ramps.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Color`, `ColorRamp`, `GradientRamp`, `ColorStop` |
//! | [`codec`] | `ColorCodec`, `ChannelCodec` |
//! | [`style`] | `RampSource`, `RampStyle` |
//! | [`error`] | `ColorParseError`, `RampError` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |

pub mod codec;
pub mod error;
pub mod logging;
pub mod paint;
pub mod style;

pub use codec::{ChannelCodec, ColorCodec};
pub use error::{ColorParseError, RampError};
pub use paint::{Color, ColorRamp, ColorStop, GradientRamp};
pub use style::{RampSource, RampStyle};
