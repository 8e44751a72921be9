use anyhow::{bail, Context};

use exprplus_core::logging::init_logging;
use exprplus_core::{ChannelCodec, RampStyle};

use crate::catalog;
use crate::config::LibraryConfig;
use crate::context::EvalContext;
use crate::registry::{register_functions, unregister_functions, FunctionRegistry};
use crate::value::Value;

/// Outcome of a one-shot [`Library::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: Value,
    /// The evaluation error the function signalled, if any.
    pub error: Option<String>,
}

/// The function library bundled with its built-in collaborators: the channel
/// codec and a ramp style.
#[derive(Debug, Clone)]
pub struct Library {
    codec: ChannelCodec,
    style: RampStyle,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    /// Library with the default ramp style.
    pub fn new() -> Self {
        Self {
            codec: ChannelCodec,
            style: RampStyle::default_style(),
        }
    }

    pub fn from_config(config: LibraryConfig) -> anyhow::Result<Self> {
        if let Some(logging) = config.logging {
            init_logging(logging);
        }

        let mut style = if config.include_default_ramps {
            RampStyle::default_style()
        } else {
            RampStyle::new()
        };

        for def in &config.ramps {
            if def.name.trim().is_empty() {
                bail!("color ramp definition without a name");
            }
            let ramp = def
                .build()
                .with_context(|| format!("invalid color ramp definition '{}'", def.name))?;
            style.insert(def.name.clone(), ramp);
        }

        log::debug!("function library ready with {} color ramps", style.len());
        Ok(Self { codec: ChannelCodec, style })
    }

    pub fn style(&self) -> &RampStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut RampStyle {
        &mut self.style
    }

    /// A fresh evaluation context backed by this library's collaborators.
    pub fn context(&self) -> EvalContext<'_> {
        EvalContext::new(&self.codec, &self.style)
    }

    pub fn register<R: FunctionRegistry + ?Sized>(&self, registry: &mut R) -> Vec<&'static str> {
        register_functions(registry)
    }

    pub fn unregister<R: FunctionRegistry + ?Sized>(&self, registry: &mut R) {
        unregister_functions(registry)
    }

    /// Calls one function by name in a fresh context.
    pub fn evaluate(&self, name: &str, args: &[Value]) -> Evaluation {
        let mut ctx = self.context();
        let value = match catalog::function(name) {
            Some(f) => f.call(args, &mut ctx),
            None => {
                ctx.set_eval_error(format!("function {name} does not exist"));
                Value::Null
            }
        };
        Evaluation { value, error: ctx.take_eval_error() }
    }
}
