use exprplus_core::logging::LoggingConfig;
use exprplus_core::{GradientRamp, RampError};

/// Library configuration.
///
/// `logging` installs the `env_logger` backend when set; hosts that already
/// run a `log` backend leave it `None`.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    pub logging: Option<LoggingConfig>,
    /// Start from the built-in ramps before adding `ramps`.
    pub include_default_ramps: bool,
    /// Extra or overriding ramps, applied in order.
    pub ramps: Vec<RampDefinition>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            logging: None,
            include_default_ramps: true,
            ramps: Vec::new(),
        }
    }
}

/// A gradient ramp described with host-style properties.
///
/// `color1`/`color2` are color strings; `stops` uses the
/// `offset;color:offset;color` layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RampDefinition {
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub stops: Option<String>,
    pub discrete: bool,
}

impl RampDefinition {
    pub fn new(name: impl Into<String>, color1: impl Into<String>, color2: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color1: color1.into(),
            color2: color2.into(),
            ..Self::default()
        }
    }

    pub fn stops(mut self, stops: impl Into<String>) -> Self {
        self.stops = Some(stops.into());
        self
    }

    pub fn discrete(mut self, discrete: bool) -> Self {
        self.discrete = discrete;
        self
    }

    pub fn build(&self) -> Result<GradientRamp, RampError> {
        Ok(GradientRamp::from_props(&self.color1, &self.color2, self.stops.as_deref())?
            .with_discrete(self.discrete))
    }
}
