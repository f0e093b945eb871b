//! Template expressions.
//!
//! The expression language is closed: dotted paths into the scope,
//! single-quoted string literals, and calls to a fixed helper set. No
//! general evaluation happens at render time; expressions are parsed
//! once when the template is compiled.

use tracing::warn;
use wamas_codec::parse_datetime_lenient;
use wamas_record::{resolve_segments, Value};

use crate::render::Scope;
use crate::{Error, Result};

/// The helper functions templates may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Helper {
    /// `get_date(v)`: calendar date part of a timestamp, `YYYY-MM-DD`.
    GetDate,
    /// `get_time(v)`: time-of-day part of a timestamp, `HH:MM:SS`.
    GetTime,
    /// `get_current_date()`: the scope's injected date, `YYYY-MM-DD`.
    GetCurrentDate,
    /// `unit_code(v)`: WAMAS house unit code to UBL unit code.
    UnitCode,
}

impl Helper {
    fn by_name(name: &str) -> Option<Self> {
        match name {
            "get_date" => Some(Self::GetDate),
            "get_time" => Some(Self::GetTime),
            "get_current_date" => Some(Self::GetCurrentDate),
            "unit_code" => Some(Self::UnitCode),
            _ => None,
        }
    }
}

/// A parsed template expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Single-quoted string literal.
    Literal(String),
    /// Dotted path resolved against the scope.
    Path(Vec<String>),
    /// Helper call over argument expressions.
    Call(Helper, Vec<Expr>),
}

impl Expr {
    /// Parse an expression from a directive attribute value.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::invalid_expression(text, "expression is empty"));
        }
        if let Some(inner) = text.strip_prefix('\'') {
            let inner = inner
                .strip_suffix('\'')
                .ok_or_else(|| Error::invalid_expression(text, "unterminated string literal"))?;
            return Ok(Self::Literal(inner.to_owned()));
        }
        if let Some((name, rest)) = text.split_once('(') {
            let name = name.trim();
            let args_src = rest
                .strip_suffix(')')
                .ok_or_else(|| Error::invalid_expression(text, "unterminated call"))?;
            let helper = Helper::by_name(name)
                .ok_or_else(|| Error::invalid_expression(text, "unknown helper function"))?;
            let mut args = Vec::new();
            for arg in args_src.split(',') {
                if arg.trim().is_empty() {
                    continue;
                }
                args.push(Self::parse(arg)?);
            }
            return Ok(Self::Call(helper, args));
        }
        let segments: Vec<String> = text.split('.').map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::invalid_expression(text, "empty path segment"));
        }
        Ok(Self::Path(segments))
    }

    /// Evaluate against a scope. A path that resolves nowhere is the
    /// missing sentinel, never an error.
    pub fn eval(&self, scope: &Scope<'_>) -> Value {
        match self {
            Self::Literal(text) => Value::from(text.as_str()),
            Self::Path(segments) => match scope.binding(&segments[0]) {
                Some(root) => resolve_segments(root, &segments[1..])
                    .cloned()
                    .unwrap_or(Value::Missing),
                None => Value::Missing,
            },
            Self::Call(helper, args) => eval_call(*helper, args, scope),
        }
    }
}

fn eval_call(helper: Helper, args: &[Expr], scope: &Scope<'_>) -> Value {
    let arg = |i: usize| args.get(i).map_or(Value::Missing, |a| a.eval(scope));
    match helper {
        Helper::GetDate => extract_timestamp_part(&arg(0), "%Y-%m-%d"),
        Helper::GetTime => extract_timestamp_part(&arg(0), "%H:%M:%S"),
        Helper::GetCurrentDate => Value::from(scope.today().format("%Y-%m-%d").to_string()),
        Helper::UnitCode => {
            let code = arg(0).to_text();
            match scope.units().wamas_to_ubl(&code) {
                Some(mapped) => Value::from(mapped),
                None => Value::from(code),
            }
        }
    }
}

fn extract_timestamp_part(val: &Value, layout: &str) -> Value {
    let text = val.to_text();
    match parse_datetime_lenient(&text) {
        Some(dt) => Value::from(dt.format(layout).to_string()),
        None => {
            if !text.is_empty() {
                warn!(value = text, "value is not a timestamp, rendering empty");
            }
            Value::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wamas_grammar::UnitCodeMap;
    use wamas_record::Map;

    fn scope(units: &UnitCodeMap) -> Scope<'_> {
        let mut record = Map::new();
        record.insert("IvWevk_FertZeit", "20240115103000");
        record.insert("HostEinheit", "BOT");
        let mut line = Map::new();
        line.insert("Mngs_Mng", Value::Float(12.345));
        record.insert("lines", Value::List(vec![line.into()]));

        let mut scope = Scope::new(units, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        scope.bind("record", record.into());
        scope
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(Expr::parse("'x'").unwrap(), Expr::Literal("x".into()));
        assert_eq!(
            Expr::parse("record.lines.0.Mngs_Mng").unwrap(),
            Expr::Path(vec![
                "record".into(),
                "lines".into(),
                "0".into(),
                "Mngs_Mng".into()
            ])
        );
        assert_eq!(
            Expr::parse("get_current_date()").unwrap(),
            Expr::Call(Helper::GetCurrentDate, vec![])
        );
        assert!(matches!(
            Expr::parse("get_date(record.IvWevk_FertZeit)").unwrap(),
            Expr::Call(Helper::GetDate, _)
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Expr::parse("").is_err());
        assert!(Expr::parse("'open").is_err());
        assert!(Expr::parse("nope(record.a)").is_err());
        assert!(Expr::parse("a..b").is_err());
        assert!(Expr::parse("get_date(record.a").is_err());
    }

    #[test]
    fn test_path_eval_including_list_index() {
        let units = UnitCodeMap::standard();
        let scope = scope(&units);
        let val = Expr::parse("record.lines.0.Mngs_Mng").unwrap().eval(&scope);
        assert_eq!(val, Value::Float(12.345));
    }

    #[test]
    fn test_missing_path_is_missing_not_error() {
        let units = UnitCodeMap::standard();
        let scope = scope(&units);
        assert!(Expr::parse("record.nope.deeper").unwrap().eval(&scope).is_missing());
        assert!(Expr::parse("unbound.x").unwrap().eval(&scope).is_missing());
    }

    #[test]
    fn test_date_and_time_helpers() {
        let units = UnitCodeMap::standard();
        let scope = scope(&units);
        let date = Expr::parse("get_date(record.IvWevk_FertZeit)")
            .unwrap()
            .eval(&scope);
        assert_eq!(date.to_text(), "2024-01-15");
        let time = Expr::parse("get_time(record.IvWevk_FertZeit)")
            .unwrap()
            .eval(&scope);
        assert_eq!(time.to_text(), "10:30:00");
        let today = Expr::parse("get_current_date()").unwrap().eval(&scope);
        assert_eq!(today.to_text(), "2024-01-01");
    }

    #[test]
    fn test_garbage_timestamp_renders_empty() {
        let units = UnitCodeMap::standard();
        let mut scope = Scope::new(&units, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut record = Map::new();
        record.insert("stamp", "not a date");
        scope.bind("record", record.into());
        let val = Expr::parse("get_date(record.stamp)").unwrap().eval(&scope);
        assert!(val.is_missing());
    }

    #[test]
    fn test_unit_code_helper_maps_and_passes_through() {
        let units = UnitCodeMap::standard();
        let scope = scope(&units);
        let mapped = Expr::parse("unit_code(record.HostEinheit)")
            .unwrap()
            .eval(&scope);
        assert_eq!(mapped.to_text(), "XBQ");
        let passthrough = Expr::parse("unit_code('PALLET')").unwrap().eval(&scope);
        assert_eq!(passthrough.to_text(), "PALLET");
    }
}
