//! Named color ramps.

use std::collections::HashMap;

use crate::paint::{Color, ColorRamp, GradientRamp};

/// Looks up color ramps by name.
pub trait RampSource: Send + Sync {
    fn color_ramp(&self, name: &str) -> Option<&dyn ColorRamp>;
}

/// Five-class anchors for the built-in ramps, spaced evenly over `[0, 1]`.
const DEFAULT_RAMPS: &[(&str, &[[u8; 3]])] = &[
    ("Spectral", &[[215, 25, 28], [253, 174, 97], [255, 255, 191], [171, 221, 164], [43, 131, 186]]),
    ("RdYlGn", &[[215, 25, 28], [253, 174, 97], [255, 255, 192], [166, 217, 106], [26, 150, 65]]),
    ("RdYlBu", &[[215, 25, 28], [253, 174, 97], [255, 255, 191], [171, 217, 233], [44, 123, 182]]),
    ("Blues", &[[239, 243, 255], [189, 215, 231], [107, 174, 214], [49, 130, 189], [8, 81, 156]]),
    ("Greens", &[[237, 248, 233], [186, 228, 179], [116, 196, 118], [49, 163, 84], [0, 109, 44]]),
    ("Reds", &[[254, 229, 217], [252, 174, 145], [251, 106, 74], [222, 45, 38], [165, 15, 21]]),
    ("Greys", &[[255, 255, 255], [0, 0, 0]]),
    ("YlOrRd", &[[255, 255, 178], [254, 204, 92], [253, 141, 60], [240, 59, 32], [189, 0, 38]]),
    ("Viridis", &[[68, 1, 84], [59, 82, 139], [33, 145, 140], [94, 201, 98], [253, 231, 37]]),
];

/// A name → gradient registry. Names are case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct RampStyle {
    ramps: HashMap<String, GradientRamp>,
}

impl RampStyle {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The style shipped with the library: Spectral, RdYlGn, RdYlBu, Blues,
    /// Greens, Reds, Greys, YlOrRd and Viridis.
    pub fn default_style() -> Self {
        let mut style = Self::new();
        for &(name, anchors) in DEFAULT_RAMPS {
            let colors: Vec<Color> = anchors.iter().map(|&[r, g, b]| Color::rgb(r, g, b)).collect();
            if let Some(ramp) = GradientRamp::evenly_spaced(&colors) {
                style.insert(name, ramp);
            }
        }
        style
    }

    /// Adds or replaces a ramp. Returns the ramp previously stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, ramp: GradientRamp) -> Option<GradientRamp> {
        let name = name.into();
        let previous = self.ramps.insert(name.clone(), ramp);
        if previous.is_some() {
            log::debug!("color ramp '{name}' replaced");
        }
        previous
    }

    pub fn remove(&mut self, name: &str) -> Option<GradientRamp> {
        self.ramps.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&GradientRamp> {
        self.ramps.get(name)
    }

    /// Ramp names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ramps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }
}

impl RampSource for RampStyle {
    fn color_ramp(&self, name: &str) -> Option<&dyn ColorRamp> {
        self.ramps.get(name).map(|r| r as &dyn ColorRamp)
    }
}
