use exprplus_core::Color;

use crate::context::EvalContext;
use crate::function::arg;
use crate::value::Value;

/// `ramp_color_rgb(ramp_name, position)`: the `R,G,B` part of a ramp color.
///
/// An unknown ramp reports an evaluation error and yields black. A position
/// that is not a number reports an evaluation error and samples at 0.
pub(crate) fn ramp_color_rgb(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    let name = arg(args, 0);
    let position = arg(args, 1);

    let ramps = ctx.ramps();
    let Some(ramp) = name.as_str().and_then(|n| ramps.color_ramp(n)) else {
        ctx.set_eval_error(format!("\"{name}\" is not a valid color ramp"));
        return rgb(Color::black());
    };

    let position = position.to_f64().unwrap_or_else(|| {
        ctx.set_eval_error(format!("Can not convert {position} to float"));
        0.0
    });

    rgb(ramp.color(position))
}

fn rgb(c: Color) -> Value {
    Value::String(format!("{},{},{}", c.r, c.g, c.b))
}
