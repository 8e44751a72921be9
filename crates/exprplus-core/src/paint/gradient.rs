use crate::error::RampError;

use super::Color;

/// A continuous mapping from a normalized position to a color.
///
/// Implementations clamp `position` to `[0, 1]` and treat NaN as 0.
pub trait ColorRamp: Send + Sync {
    fn color(&self, position: f64) -> Color;
}

/// A single intermediate gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Gradient ramp running from `color1` at 0 to `color2` at 1.
///
/// Semantics:
/// - Intermediate stops are kept sorted by offset.
/// - Between two stops each channel (alpha included) is interpolated
///   linearly and truncated toward zero.
/// - A discrete ramp returns the color of the last stop at or below the
///   position instead of interpolating.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRamp {
    pub color1: Color,
    pub color2: Color,
    stops: Vec<ColorStop>,
    pub discrete: bool,
}

impl GradientRamp {
    pub fn new(color1: Color, color2: Color) -> Self {
        Self {
            color1,
            color2,
            stops: Vec::new(),
            discrete: false,
        }
    }

    /// Ramp through `colors` spaced evenly over `[0, 1]`.
    ///
    /// Returns `None` when fewer than two colors are given.
    pub fn evenly_spaced(colors: &[Color]) -> Option<Self> {
        let (&first, rest) = colors.split_first()?;
        let (&last, middle) = rest.split_last()?;
        let step = 1.0 / (colors.len() - 1) as f64;
        let stops = middle
            .iter()
            .enumerate()
            .map(|(i, &c)| ColorStop::new(step * (i + 1) as f64, c))
            .collect();
        Some(Self::new(first, last).with_stops(stops))
    }

    pub fn with_stops(mut self, mut stops: Vec<ColorStop>) -> Self {
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        self.stops = stops;
        self
    }

    pub fn with_discrete(mut self, discrete: bool) -> Self {
        self.discrete = discrete;
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Builds a gradient from host-style properties.
    ///
    /// `stops` uses the `offset;color:offset;color` layout, e.g.
    /// `"0.25;253,174,97,255:0.5;255,255,191,255"`.
    pub fn from_props(color1: &str, color2: &str, stops: Option<&str>) -> Result<Self, RampError> {
        let mut ramp = Self::new(parse_color(color1)?, parse_color(color2)?);
        if let Some(stops) = stops.filter(|s| !s.trim().is_empty()) {
            let stops = stops
                .split(':')
                .map(parse_stop)
                .collect::<Result<Vec<_>, _>>()?;
            ramp = ramp.with_stops(stops);
        }
        Ok(ramp)
    }
}

impl ColorRamp for GradientRamp {
    fn color(&self, position: f64) -> Color {
        let t = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };
        if t >= 1.0 {
            return self.color2;
        }

        let mut lower = 0.0;
        let mut c1 = self.color1;
        for stop in &self.stops {
            if stop.offset > t {
                if self.discrete {
                    return c1;
                }
                return interpolate(c1, stop.color, (t - lower) / (stop.offset - lower));
            }
            lower = stop.offset;
            c1 = stop.color;
        }

        if self.discrete {
            return c1;
        }
        let span = 1.0 - lower;
        if span <= 0.0 {
            return self.color2;
        }
        interpolate(c1, self.color2, (t - lower) / span)
    }
}

fn interpolate(from: Color, to: Color, t: f64) -> Color {
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
    Color::new(
        lerp(from.r, to.r),
        lerp(from.g, to.g),
        lerp(from.b, to.b),
        lerp(from.a, to.a),
    )
}

fn parse_color(s: &str) -> Result<Color, RampError> {
    s.parse::<Color>().map_err(|source| RampError::Color { value: s.to_string(), source })
}

fn parse_stop(s: &str) -> Result<ColorStop, RampError> {
    let (offset, color) = s
        .split_once(';')
        .ok_or_else(|| RampError::StopSyntax(s.to_string()))?;
    let offset: f64 = offset
        .trim()
        .parse()
        .map_err(|_| RampError::StopOffset(offset.to_string()))?;
    if !(0.0..=1.0).contains(&offset) {
        return Err(RampError::StopOffset(offset.to_string()));
    }
    Ok(ColorStop::new(offset, parse_color(color)?))
}
