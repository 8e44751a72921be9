//! Color channel accessors and mutators.
//!
//! Accessors take a color string and return an integer channel; mutators
//! take a color string and a new channel value and return a new color string.
//! Anything that fails to decode yields `Value::Null` without an evaluation
//! error.

use exprplus_core::Color;

use crate::context::EvalContext;
use crate::function::arg;
use crate::value::Value;

// ── accessors ─────────────────────────────────────────────────────────────

pub(crate) fn red(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    channel(args, ctx, |c| c.r.into())
}

pub(crate) fn green(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    channel(args, ctx, |c| c.g.into())
}

pub(crate) fn blue(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    channel(args, ctx, |c| c.b.into())
}

pub(crate) fn alpha(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    channel(args, ctx, |c| c.a.into())
}

/// Hue as an integer in `0..=360`.
pub(crate) fn hue(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    channel(args, ctx, |c| scaled(c.hue(), 1.0))
}

/// HSV saturation as an integer in `0..=100`.
pub(crate) fn saturation(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    channel(args, ctx, |c| scaled(c.hsv_saturation(), 100.0))
}

pub(crate) fn lightness(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    channel(args, ctx, |c| scaled(c.lightness(), 100.0))
}

pub(crate) fn hsv_value(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    channel(args, ctx, |c| scaled(c.value(), 100.0))
}

fn channel(args: &[Value], ctx: &EvalContext<'_>, get: impl Fn(Color) -> i64) -> Value {
    ctx.decode(arg(args, 0)).map_or(Value::Null, |c| Value::Int(get(c)))
}

/// Scales and truncates a projection. The small bias absorbs f32 noise such
/// as a hue of 119.99999 for pure green.
fn scaled(fraction: f32, scale: f32) -> i64 {
    (fraction * scale + 1e-3).floor() as i64
}

// ── mutators ──────────────────────────────────────────────────────────────

pub(crate) fn set_red(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    set_byte(args, ctx, Color::with_red)
}

pub(crate) fn set_green(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    set_byte(args, ctx, Color::with_green)
}

pub(crate) fn set_blue(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    set_byte(args, ctx, Color::with_blue)
}

pub(crate) fn set_alpha(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    set_byte(args, ctx, Color::with_alpha)
}

/// New hue in degrees; wraps modulo 360.
pub(crate) fn set_hue(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    set_projected(args, ctx, |v| v.rem_euclid(360.0), Color::with_hue)
}

/// New HSL saturation in `0..=100`.
pub(crate) fn set_saturation(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    set_projected(args, ctx, percent, Color::with_hsl_saturation)
}

/// New HSL lightness in `0..=100`.
pub(crate) fn set_lightness(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    set_projected(args, ctx, percent, Color::with_lightness)
}

/// New HSV value in `0..=100`.
pub(crate) fn set_hsv_value(args: &[Value], ctx: &mut EvalContext<'_>) -> Value {
    set_projected(args, ctx, percent, Color::with_value)
}

fn set_byte(args: &[Value], ctx: &EvalContext<'_>, set: fn(Color, u8) -> Color) -> Value {
    let Some(color) = ctx.decode(arg(args, 0)) else {
        return Value::Null;
    };
    let Some(v) = arg(args, 1).to_i64() else {
        return Value::Null;
    };
    ctx.encode(set(color, v.clamp(0, 255) as u8))
}

fn set_projected(
    args: &[Value],
    ctx: &EvalContext<'_>,
    normalize: fn(f64) -> f64,
    set: fn(Color, f32) -> Color,
) -> Value {
    let Some(color) = ctx.decode(arg(args, 0)) else {
        return Value::Null;
    };
    let Some(v) = arg(args, 1).to_f64().filter(|v| v.is_finite()) else {
        return Value::Null;
    };
    // Normalize in f64 so huge hues still wrap before narrowing to f32.
    ctx.encode(set(color, normalize(v) as f32))
}

fn percent(v: f64) -> f64 {
    v / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprplus_core::{ChannelCodec, RampStyle};

    fn eval(f: fn(&[Value], &mut EvalContext<'_>) -> Value, args: &[Value]) -> Value {
        let style = RampStyle::new();
        let mut ctx = EvalContext::new(&ChannelCodec, &style);
        let out = f(args, &mut ctx);
        assert!(!ctx.has_eval_error(), "color functions never signal errors");
        out
    }

    fn s(v: &str) -> Value { Value::from(v) }
    fn i(v: i64) -> Value { Value::Int(v) }

    // ── accessors ─────────────────────────────────────────────────────────

    #[test]
    fn rgb_channels() {
        assert_eq!(eval(red, &[s("255,0,0")]), i(255));
        assert_eq!(eval(green, &[s("0,255,0")]), i(255));
        assert_eq!(eval(blue, &[s("0,0,255")]), i(255));
    }

    #[test]
    fn rgb_channels_recovered_exactly() {
        for (r, g, b) in [(0, 0, 0), (1, 2, 3), (128, 64, 32), (255, 254, 253)] {
            let c = s(&format!("{r},{g},{b}"));
            assert_eq!(eval(red, &[c.clone()]), i(r));
            assert_eq!(eval(green, &[c.clone()]), i(g));
            assert_eq!(eval(blue, &[c]), i(b));
        }
    }

    #[test]
    fn alpha_channel() {
        assert_eq!(eval(alpha, &[s("255,255,255,125")]), i(125));
        assert_eq!(eval(alpha, &[s("255,255,255")]), i(255));
    }

    #[test]
    fn hsl_hsv_projections() {
        assert_eq!(eval(hue, &[s("255,0,0")]), i(0));
        assert_eq!(eval(hue, &[s("0,255,0")]), i(120));
        assert_eq!(eval(saturation, &[s("125,255,125")]), i(50));
        assert_eq!(eval(lightness, &[s("125,255,125")]), i(74));
        assert_eq!(eval(hsv_value, &[s("125,255,125")]), i(100));
    }

    #[test]
    fn gray_hue_is_zero() {
        assert_eq!(eval(hue, &[s("128,128,128")]), i(0));
    }

    #[test]
    fn malformed_color_is_null() {
        assert_eq!(eval(red, &[s("not,a,color")]), Value::Null);
        assert_eq!(eval(hue, &[s("")]), Value::Null);
        assert_eq!(eval(alpha, &[Value::Int(5)]), Value::Null);
        assert_eq!(eval(blue, &[]), Value::Null);
    }

    // ── mutators ──────────────────────────────────────────────────────────

    #[test]
    fn set_rgb_channels() {
        assert_eq!(eval(set_red, &[s("255,255,255"), i(125)]), s("125,255,255,255"));
        assert_eq!(eval(set_green, &[s("255,255,255"), i(125)]), s("255,125,255,255"));
        assert_eq!(eval(set_blue, &[s("255,255,255"), i(125)]), s("255,255,125,255"));
    }

    #[test]
    fn set_alpha_replaces_alpha_only() {
        assert_eq!(eval(set_alpha, &[s("255,255,255,255"), i(125)]), s("255,255,255,125"));
    }

    #[test]
    fn set_red_with_own_value_is_identity() {
        for c in ["10,20,30,40", "255,0,0,255", "0,0,0,0"] {
            let r = eval(red, &[s(c)]);
            assert_eq!(eval(set_red, &[s(c), r]), s(c));
        }
        // a three-component input comes back with its default alpha spelled out
        let r = eval(red, &[s("9,8,7")]);
        assert_eq!(eval(set_red, &[s("9,8,7"), r]), s("9,8,7,255"));
    }

    #[test]
    fn set_hsl_hsv_channels() {
        assert_eq!(eval(set_hue, &[s("0,255,0,255"), i(0)]), s("255,0,0,255"));
        assert_eq!(eval(set_saturation, &[s("0,255,0,255"), i(0)]), s("128,128,128,255"));
        assert_eq!(eval(set_lightness, &[s("0,255,0,255"), i(10)]), s("0,51,0,255"));
        assert_eq!(eval(set_hsv_value, &[s("0,255,0,255"), i(50)]), s("0,128,0,255"));
    }

    #[test]
    fn set_saturation_keeps_hue_lightness_and_alpha() {
        let out = eval(set_saturation, &[s("0,255,0,17"), i(50)]);
        assert_eq!(out, s("64,191,64,17"));
        assert_eq!(eval(hue, &[out.clone()]), i(120));
        assert_eq!(eval(lightness, &[out]), i(50));
    }

    #[test]
    fn set_saturation_above_hundred_clamps() {
        assert_eq!(eval(set_saturation, &[s("64,191,64,17"), i(150)]), s("0,255,0,17"));
    }

    #[test]
    fn set_hue_wraps_large_and_negative_values() {
        let c = s("0,255,0");
        assert_eq!(
            eval(set_hue, &[c.clone(), Value::Double(1e20)]),
            eval(set_hue, &[c.clone(), i(280)])
        );
        assert_eq!(eval(set_hue, &[c.clone(), i(-90)]), eval(set_hue, &[c.clone(), i(270)]));
        let out = eval(set_hue, &[c, Value::Double(1e39)]);
        let Value::Int(h) = eval(hue, &[out]) else { panic!("hue returned non-int") };
        let expected = 1e39_f64.rem_euclid(360.0) as i64;
        assert!((h - expected).abs() <= 1, "1e39 wrapped to {h}, expected {expected}");
    }

    #[test]
    fn set_hue_then_hue_recovers_value() {
        for base in ["255,0,0", "0,128,255", "200,50,90,10"] {
            for h in [0, 45, 90, 120, 200, 300, 359] {
                let out = eval(set_hue, &[s(base), i(h)]);
                let Value::Int(got) = eval(hue, &[out]) else { panic!("hue returned non-int") };
                let diff = (got - h).abs().min(360 - (got - h).abs());
                assert!(diff <= 1, "set_hue({base}, {h}) read back as {got}");
            }
        }
    }

    #[test]
    fn hsl_mutators_preserve_alpha() {
        assert_eq!(eval(set_hue, &[s("0,255,0,17"), i(240)]), s("0,0,255,17"));
        assert_eq!(eval(set_lightness, &[s("0,255,0,17"), i(50)]), s("0,255,0,17"));
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(eval(set_red, &[s("0,0,0"), i(300)]), s("255,0,0,255"));
        assert_eq!(eval(set_alpha, &[s("0,0,0"), i(-5)]), s("0,0,0,0"));
        assert_eq!(eval(set_lightness, &[s("0,255,0"), i(150)]), s("255,255,255,255"));
        assert_eq!(eval(set_hue, &[s("0,255,0"), i(480)]), s("0,255,0,255"));
    }

    #[test]
    fn numeric_strings_and_doubles_accepted() {
        assert_eq!(eval(set_red, &[s("0,0,0"), s("12")]), s("12,0,0,255"));
        assert_eq!(eval(set_hsv_value, &[s("0,255,0"), Value::Double(50.0)]), s("0,128,0,255"));
    }

    #[test]
    fn invalid_inputs_are_null() {
        assert_eq!(eval(set_red, &[s("nope"), i(1)]), Value::Null);
        assert_eq!(eval(set_red, &[s("0,0,0"), s("lots")]), Value::Null);
        assert_eq!(eval(set_hue, &[s("0,0,0"), Value::Null]), Value::Null);
        assert_eq!(eval(set_hue, &[s("0,0,0"), Value::Double(f64::INFINITY)]), Value::Null);
    }
}
