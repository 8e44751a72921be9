//! Color, color-ramp and day-of-week functions for a host expression engine.
//!
//! Every function is a pure, stateless call over [`Value`]s. The host's
//! collaborators (a color codec and a source of named color ramps) arrive
//! through [`EvalContext`], and the functions are handed to the host's
//! registry through the [`FunctionRegistry`] trait.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value`] | `Value` |
//! | [`context`] | `EvalContext` |
//! | [`function`] | `ExprFunction`, `GROUP` |
//! | [`catalog`] | `FUNCTIONS`, the table of every function |
//! | [`registry`] | `FunctionRegistry`, `ExpressionRegistry`, `register_functions` |
//! | [`date`] | `DateInput`, `day_of_week` |
//! | [`config`] | `LibraryConfig`, `RampDefinition` |
//!
//! # Quick start
//!
//! ```rust
//! use exprplus_functions::{ExpressionRegistry, Library, Value};
//!
//! let library = Library::new();
//! let mut registry = ExpressionRegistry::new();
//! library.register(&mut registry);
//!
//! let mut ctx = library.context();
//! let out = registry.call("set_alpha", &["255,255,255,255".into(), 125.into()], &mut ctx);
//! assert_eq!(out, Value::from("255,255,255,125"));
//!
//! let dow = library.evaluate("dow", &["2013-07-01".into()]);
//! assert_eq!(dow.value, Value::Int(1));
//! ```

pub mod catalog;
mod color;
pub mod config;
pub mod context;
pub mod date;
pub mod function;
mod library;
mod ramp;
pub mod registry;
pub mod value;

pub use catalog::FUNCTIONS;
pub use config::{LibraryConfig, RampDefinition};
pub use context::EvalContext;
pub use function::{ExprFunction, GROUP};
pub use library::{Evaluation, Library};
pub use registry::{register_functions, unregister_functions, ExpressionRegistry, FunctionRegistry};
pub use value::Value;

#[cfg(test)]
mod function_tests {
    use super::*;

    fn eval(name: &str, args: &[Value]) -> Value {
        let out = Library::new().evaluate(name, args);
        assert_eq!(out.error, None, "{name} signalled an error");
        out.value
    }

    fn s(v: &str) -> Value { Value::from(v) }

    #[test] fn red_of_red() { assert_eq!(eval("red", &[s("255,0,0")]), Value::Int(255)); }
    #[test] fn red_of_garbage() { assert_eq!(eval("red", &[s("not,a,color")]), Value::Null); }
    #[test] fn dow_monday() { assert_eq!(eval("dow", &[s("2013-07-01")]), Value::Int(1)); }
    #[test] fn dow_garbage() { assert_eq!(eval("dow", &[s("not-a-date")]), Value::Null); }
    #[test] fn hex_input_accepted() { assert_eq!(eval("green", &[s("#00ff00")]), Value::Int(255)); }

    #[test]
    fn set_alpha_example() {
        assert_eq!(
            eval("set_alpha", &[s("255,255,255,255"), Value::Int(125)]),
            s("255,255,255,125")
        );
    }

    #[test]
    fn ramp_example() {
        assert_eq!(eval("ramp_color_rgb", &[s("Spectral"), Value::Double(0.3)]), s("253,190,115"));
    }

    #[test]
    fn missing_ramp_signals_error() {
        let out = Library::new().evaluate("ramp_color_rgb", &[s("NonexistentRamp"), Value::Double(0.5)]);
        assert_eq!(out.value, s("0,0,0"));
        assert!(out.error.is_some());
    }

    #[test]
    fn set_then_get_every_rgb_channel() {
        let pairs = [("set_red", "red"), ("set_green", "green"), ("set_blue", "blue"), ("set_alpha", "alpha")];
        for (setter, getter) in pairs {
            let c = eval(setter, &[s("10,20,30,40"), Value::Int(99)]);
            assert_eq!(eval(getter, &[c]), Value::Int(99), "{setter}/{getter}");
        }
    }

    #[test]
    fn set_then_get_lightness_and_value() {
        let c = eval("set_lightness", &[s("0,0,255"), Value::Int(30)]);
        assert_eq!(eval("lightness", &[c]), Value::Int(30));
        let c = eval("set_hsv_value", &[s("0,0,255"), Value::Int(40)]);
        assert_eq!(eval("hsv_value", &[c]), Value::Int(40));
    }
}
