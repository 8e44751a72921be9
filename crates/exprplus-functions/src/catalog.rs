//! The table of every function this crate exposes.

use crate::color;
use crate::date;
use crate::function::ExprFunction;
use crate::ramp;

pub static FUNCTIONS: &[ExprFunction] = &[
    ExprFunction::new(
        "ramp_color_rgb",
        2,
        "Returns only the rgb part of a color ramp.\n\n\
         Syntax: ramp_color_rgb(ramp_name, value)\n\
         ramp_name: the name of the color ramp, for example 'Spectral'.\n\
         value: the position on the ramp, a real number between 0 and 1.\n\n\
         Example: ramp_color_rgb('Spectral', 0.3) -> '253,190,115'\n\n\
         The available color ramps depend on the host's style.",
        ramp::ramp_color_rgb,
    ),
    ExprFunction::new(
        "red",
        1,
        "Returns the red component of a color.\n\n\
         Syntax: red(color)\n\n\
         Example: red('255,0,0') -> 255",
        color::red,
    ),
    ExprFunction::new(
        "green",
        1,
        "Returns the green component of a color.\n\n\
         Syntax: green(color)\n\n\
         Example: green('0,255,0') -> 255",
        color::green,
    ),
    ExprFunction::new(
        "blue",
        1,
        "Returns the blue component of a color.\n\n\
         Syntax: blue(color)\n\n\
         Example: blue('0,0,255') -> 255",
        color::blue,
    ),
    ExprFunction::new(
        "alpha",
        1,
        "Returns the alpha component of a color.\n\n\
         Syntax: alpha(color)\n\n\
         Example: alpha('255,255,255,125') -> 125",
        color::alpha,
    ),
    ExprFunction::new(
        "hue",
        1,
        "Returns the hue of a color, an integer between 0 and 360.\n\n\
         Syntax: hue(color)\n\n\
         Example: hue('255,0,0') -> 0",
        color::hue,
    ),
    ExprFunction::new(
        "saturation",
        1,
        "Returns the saturation of a color, an integer between 0 and 100.\n\n\
         Syntax: saturation(color)\n\n\
         Example: saturation('125,255,125') -> 50",
        color::saturation,
    ),
    ExprFunction::new(
        "lightness",
        1,
        "Returns the lightness of a color, an integer between 0 and 100.\n\n\
         Syntax: lightness(color)\n\n\
         Example: lightness('125,255,125') -> 74",
        color::lightness,
    ),
    ExprFunction::new(
        "hsv_value",
        1,
        "Returns the hsv value of a color, an integer between 0 and 100.\n\n\
         Syntax: hsv_value(color)\n\n\
         Example: hsv_value('125,255,125') -> 100",
        color::hsv_value,
    ),
    ExprFunction::new(
        "set_red",
        2,
        "Sets the red component of a color.\n\n\
         Syntax: set_red(color, red)\n\
         red: an integer between 0 and 255.\n\n\
         Example: set_red('255,255,255', 125) -> '125,255,255,255'",
        color::set_red,
    ),
    ExprFunction::new(
        "set_green",
        2,
        "Sets the green component of a color.\n\n\
         Syntax: set_green(color, green)\n\
         green: an integer between 0 and 255.\n\n\
         Example: set_green('255,255,255', 125) -> '255,125,255,255'",
        color::set_green,
    ),
    ExprFunction::new(
        "set_blue",
        2,
        "Sets the blue component of a color.\n\n\
         Syntax: set_blue(color, blue)\n\
         blue: an integer between 0 and 255.\n\n\
         Example: set_blue('255,255,255', 125) -> '255,255,125,255'",
        color::set_blue,
    ),
    ExprFunction::new(
        "set_alpha",
        2,
        "Sets the alpha component of a color.\n\n\
         Syntax: set_alpha(color, alpha)\n\
         alpha: an integer between 0 and 255.\n\n\
         Example: set_alpha('255,255,255,255', 125) -> '255,255,255,125'",
        color::set_alpha,
    ),
    ExprFunction::new(
        "set_hue",
        2,
        "Sets the hue of a color.\n\n\
         Syntax: set_hue(color, hue)\n\
         hue: an integer between 0 and 360.\n\n\
         Example: set_hue('0,255,0,255', 0) -> '255,0,0,255'",
        color::set_hue,
    ),
    ExprFunction::new(
        "set_saturation",
        2,
        "Sets the saturation of a color.\n\n\
         Syntax: set_saturation(color, saturation)\n\
         saturation: an integer between 0 and 100.\n\n\
         Example: set_saturation('0,255,0,255', 0) -> '128,128,128,255'",
        color::set_saturation,
    ),
    ExprFunction::new(
        "set_lightness",
        2,
        "Sets the lightness of a color.\n\n\
         Syntax: set_lightness(color, lightness)\n\
         lightness: an integer between 0 and 100.\n\n\
         Example: set_lightness('0,255,0,255', 10) -> '0,51,0,255'",
        color::set_lightness,
    ),
    ExprFunction::new(
        "set_hsv_value",
        2,
        "Sets the hsv value of a color.\n\n\
         Syntax: set_hsv_value(color, value)\n\
         value: an integer between 0 and 100.\n\n\
         Example: set_hsv_value('0,255,0,255', 50) -> '0,128,0,255'",
        color::set_hsv_value,
    ),
    ExprFunction::new(
        "dow",
        1,
        "Returns the day of week for a date, from 0 (Sunday) to 6 (Saturday).\n\n\
         Syntax: dow(date)\n\
         date: a date or datetime value, or a string in the format 'yyyy-mm-dd'.\n\n\
         Example: dow('2013-07-01') -> 1",
        date::dow,
    ),
];

/// Looks up a function by name.
pub fn function(name: &str) -> Option<&'static ExprFunction> {
    FUNCTIONS.iter().find(|f| f.name == name)
}
