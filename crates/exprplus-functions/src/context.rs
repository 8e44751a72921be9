use exprplus_core::{Color, ColorCodec, RampSource};

use crate::value::Value;

/// Per-evaluation state handed to every function call.
///
/// Holds the host collaborators (color codec and ramp source) and the
/// evaluation error slot. Functions that report an error through
/// [`set_eval_error`](Self::set_eval_error) still return a usable value so
/// evaluation can continue.
pub struct EvalContext<'a> {
    codec: &'a dyn ColorCodec,
    ramps: &'a dyn RampSource,
    error: Option<String>,
}

impl<'a> EvalContext<'a> {
    pub fn new(codec: &'a dyn ColorCodec, ramps: &'a dyn RampSource) -> Self {
        Self { codec, ramps, error: None }
    }

    pub fn codec(&self) -> &'a dyn ColorCodec {
        self.codec
    }

    pub fn ramps(&self) -> &'a dyn RampSource {
        self.ramps
    }

    /// Records an evaluation error. A later error replaces an earlier one.
    pub fn set_eval_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("expression evaluation error: {message}");
        self.error = Some(message);
    }

    pub fn eval_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_eval_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn take_eval_error(&mut self) -> Option<String> {
        self.error.take()
    }

    /// Decodes a string argument as a color. Non-strings are not colors.
    pub(crate) fn decode(&self, value: &Value) -> Option<Color> {
        self.codec.decode_color(value.as_str()?)
    }

    pub(crate) fn encode(&self, color: Color) -> Value {
        Value::String(self.codec.encode_color(color))
    }
}
