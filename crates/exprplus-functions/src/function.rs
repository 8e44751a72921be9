use std::fmt;

use crate::context::EvalContext;
use crate::value::{NULL, Value};

/// Group the functions are listed under in the host's expression builder.
pub const GROUP: &str = "Expressions +";

/// Signature shared by every function body.
pub type FunctionBody = fn(&[Value], &mut EvalContext<'_>) -> Value;

/// A named expression function as handed to the host registry.
#[derive(Clone, Copy)]
pub struct ExprFunction {
    pub name: &'static str,
    pub group: &'static str,
    pub arity: usize,
    /// Plain-text help: syntax, arguments and an example.
    pub help: &'static str,
    body: FunctionBody,
}

impl ExprFunction {
    pub const fn new(name: &'static str, arity: usize, help: &'static str, body: FunctionBody) -> Self {
        Self { name, group: GROUP, arity, help, body }
    }

    /// Invokes the function.
    ///
    /// A wrong argument count is reported as an evaluation error and yields
    /// `Value::Null`.
    pub fn call(&self, args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
        if args.len() != self.arity {
            ctx.set_eval_error(format!(
                "function {} expects {} argument(s), got {}",
                self.name,
                self.arity,
                args.len()
            ));
            return Value::Null;
        }
        (self.body)(args, ctx)
    }
}

impl fmt::Debug for ExprFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprFunction")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// The `i`th argument, or Null when absent.
pub(crate) fn arg(args: &[Value], i: usize) -> &Value {
    args.get(i).unwrap_or(&NULL)
}
