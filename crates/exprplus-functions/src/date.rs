use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::context::EvalContext;
use crate::function::arg;
use crate::value::Value;

/// The shapes of date input `dow` understands.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Date(NaiveDate),
    /// Only the date part is used.
    DateTime(NaiveDateTime),
    /// A `yyyy-mm-dd` string, not yet validated.
    Formatted(String),
}

impl DateInput {
    /// Classifies an expression value. Other value types are not dates.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Date(d) => Some(Self::Date(*d)),
            Value::DateTime(dt) => Some(Self::DateTime(*dt)),
            Value::String(s) => Some(Self::Formatted(s.clone())),
            _ => None,
        }
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(dt) => Some(dt.date()),
            Self::Formatted(s) => parse_iso_date(s),
        }
    }
}

/// Parses exactly `yyyy-mm-dd`: four-digit year, two-digit month and day.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    let shaped = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Day of week numbered 0 (Sunday) to 6 (Saturday), as PostgreSQL's `dow`.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday() % 7
}

pub(crate) fn dow(args: &[Value], _ctx: &mut EvalContext<'_>) -> Value {
    DateInput::from_value(arg(args, 0))
        .and_then(|input| input.to_date())
        .map_or(Value::Null, |date| Value::Int(day_of_week(date).into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprplus_core::{ChannelCodec, RampStyle};

    fn eval(v: Value) -> Value {
        let style = RampStyle::new();
        let mut ctx = EvalContext::new(&ChannelCodec, &style);
        let out = dow(&[v], &mut ctx);
        assert!(!ctx.has_eval_error());
        out
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_string() {
        assert_eq!(eval("2013-07-01".into()), Value::Int(1));
    }

    #[test]
    fn week_wraps_sunday_to_zero() {
        assert_eq!(eval("2013-07-06".into()), Value::Int(6));
        assert_eq!(eval("2013-07-07".into()), Value::Int(0));
    }

    #[test]
    fn structured_date() {
        assert_eq!(eval(ymd(2013, 7, 3).into()), Value::Int(3));
    }

    #[test]
    fn structured_datetime_uses_date_part() {
        let dt = ymd(2013, 7, 4).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(eval(dt.into()), Value::Int(4));
    }

    #[test]
    fn invalid_strings_are_null() {
        assert_eq!(eval("not-a-date".into()), Value::Null);
        assert_eq!(eval("2013-02-30".into()), Value::Null);
        assert_eq!(eval("2013-7-1".into()), Value::Null);
        assert_eq!(eval(" 2013-07-01".into()), Value::Null);
        assert_eq!(eval("".into()), Value::Null);
    }

    #[test]
    fn other_types_are_null() {
        assert_eq!(eval(Value::Int(20130701)), Value::Null);
        assert_eq!(eval(Value::Null), Value::Null);
        assert_eq!(eval(Value::Bool(true)), Value::Null);
    }

    #[test]
    fn leap_day() {
        assert_eq!(parse_iso_date("2012-02-29"), Some(ymd(2012, 2, 29)));
        assert_eq!(parse_iso_date("2013-02-29"), None);
    }
}
