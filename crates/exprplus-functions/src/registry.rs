//! Registration against the host's function registry.

use std::collections::HashMap;

use crate::catalog::FUNCTIONS;
use crate::context::EvalContext;
use crate::function::ExprFunction;
use crate::value::Value;

/// The host's global expression function registry.
pub trait FunctionRegistry {
    /// Returns false when the host refuses the function, e.g. because the
    /// name is already taken.
    fn register_function(&mut self, function: &'static ExprFunction) -> bool;

    fn unregister_function(&mut self, name: &str);
}

/// Registers every function, returning the names the host accepted.
///
/// Refused registrations are skipped.
pub fn register_functions<R: FunctionRegistry + ?Sized>(registry: &mut R) -> Vec<&'static str> {
    FUNCTIONS
        .iter()
        .filter_map(|f| {
            if registry.register_function(f) {
                log::debug!("registered expression function '{}'", f.name);
                Some(f.name)
            } else {
                log::debug!("host refused expression function '{}'", f.name);
                None
            }
        })
        .collect()
}

/// Unregisters every function by name.
pub fn unregister_functions<R: FunctionRegistry + ?Sized>(registry: &mut R) {
    for f in FUNCTIONS {
        registry.unregister_function(f.name);
    }
    log::debug!("unregistered {} expression functions", FUNCTIONS.len());
}

/// In-memory registry for hosts without one of their own, and for tests.
///
/// Refuses a second function under an existing name.
#[derive(Debug, Default)]
pub struct ExpressionRegistry {
    functions: HashMap<String, &'static ExprFunction>,
}

impl ExpressionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&'static ExprFunction> {
        self.functions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Calls a registered function. Unknown names report an evaluation error
    /// and yield `Value::Null`.
    pub fn call(&self, name: &str, args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
        match self.get(name) {
            Some(f) => f.call(args, ctx),
            None => {
                ctx.set_eval_error(format!("function {name} does not exist"));
                Value::Null
            }
        }
    }
}

impl FunctionRegistry for ExpressionRegistry {
    fn register_function(&mut self, function: &'static ExprFunction) -> bool {
        if self.functions.contains_key(function.name) {
            return false;
        }
        self.functions.insert(function.name.to_string(), function);
        true
    }

    fn unregister_function(&mut self, name: &str) {
        self.functions.remove(name);
    }
}
