//! Telegram line authoring.
//!
//! A line is built field by field from a convert table: value resolution
//! walks the source document (or flat record), falls back to defaults,
//! applies the unit-code remap and formats the result into the field's
//! exact byte width.

use chrono::NaiveDateTime;
use wamas_grammar::{
    ConvertTable, DefaultFn, FieldSpec, FieldType, SourcePath, UnitCodeMap, SYSTEM_HOST,
    SYSTEM_WAMAS,
};
use wamas_record::{lookup, Value};

use crate::{Error, Result};

/// Identifiers written into telegram headers for the two endpoints.
#[derive(Debug, Clone)]
pub struct SystemIds {
    pub host: String,
    pub warehouse: String,
}

impl Default for SystemIds {
    fn default() -> Self {
        Self {
            host: SYSTEM_HOST.to_owned(),
            warehouse: SYSTEM_WAMAS.to_owned(),
        }
    }
}

/// Loop position when a table is applied once per repeated document
/// element.
#[derive(Debug, Clone, Copy)]
pub struct Repeat {
    /// Number of repetitions of the source element.
    pub count: usize,
    /// Zero-based index of the current repetition.
    pub index: usize,
}

/// Everything value resolution needs for one line.
pub struct EncodeContext<'a> {
    /// Document tree or flat record the source paths and dict keys
    /// resolve against.
    pub source: &'a Value,
    /// One-based output line counter, shared across all lines of one
    /// conversion run.
    pub line_index: usize,
    /// Loop position, when the table iterates a repeated element.
    pub repeat: Option<Repeat>,
    pub systems: &'a SystemIds,
    pub units: &'a UnitCodeMap,
    /// Telegram creation time, injected for deterministic output.
    pub now: NaiveDateTime,
}

/// Author one telegram line from a convert table.
pub fn encode_line(table: &ConvertTable, ctx: &EncodeContext<'_>) -> Result<String> {
    let mut line = String::with_capacity(table.line_width());
    for field in table.fields() {
        let raw = resolve_value(field, ctx);
        let remapped = remap_unit_code(field.name, raw, ctx.units);
        line.push_str(&format_value(&remapped, field)?);
    }
    Ok(line)
}

/// Resolve a field's raw value by priority: source path, then flat dict
/// key, then literal default, then default function.
pub fn resolve_value(field: &FieldSpec, ctx: &EncodeContext<'_>) -> String {
    let mut val = match &field.source {
        Some(source) => resolve_source(source, ctx),
        None => String::new(),
    };
    if val.is_empty() {
        if let Some(key) = field.dict_key {
            if let Some(found) = ctx.source.as_map().and_then(|m| m.get(key)) {
                val = found.to_text();
            }
        }
    }
    if val.is_empty() {
        if let Some(default) = field.default_value {
            val = default.to_owned();
        }
    }
    if val.is_empty() {
        if let Some(func) = field.default_fn {
            val = resolve_default_fn(func, ctx);
        }
    }
    val
}

fn resolve_source(source: &SourcePath, ctx: &EncodeContext<'_>) -> String {
    match source {
        SourcePath::One(path) => lookup_text(path, ctx),
        SourcePath::Join(paths) => {
            let vals: Vec<String> = paths.iter().map(|p| lookup_text(p, ctx)).collect();
            vals.join(" ")
        }
        SourcePath::Guarded(pairs) => {
            for (guard, value) in *pairs {
                if lookup_value(guard, ctx).is_some_and(Value::is_truthy) {
                    return lookup_text(value, ctx);
                }
            }
            String::new()
        }
    }
}

fn lookup_text(raw_path: &str, ctx: &EncodeContext<'_>) -> String {
    lookup_value(raw_path, ctx).map(Value::to_text).unwrap_or_default()
}

fn lookup_value<'a>(raw_path: &str, ctx: &EncodeContext<'a>) -> Option<&'a Value> {
    let path = substitute_index(raw_path, ctx.repeat);
    lookup(ctx.source, &path).ok().flatten()
}

/// Substitute the repetition placeholder: the loop index when the
/// element repeats, otherwise the placeholder segment is dropped so the
/// path addresses the single element directly.
fn substitute_index(path: &str, repeat: Option<Repeat>) -> String {
    match repeat {
        Some(r) if r.count > 1 => path.replace("{idx}", &r.index.to_string()),
        _ => path.replace(".{idx}", ""),
    }
}

/// Resolve a default function against the context. Parent-key linking
/// is owned by the transcoder, which substitutes the value before the
/// formatter runs; here it stays empty.
pub fn resolve_default_fn(func: DefaultFn, ctx: &EncodeContext<'_>) -> String {
    match func {
        DefaultFn::Source => ctx.systems.host.clone(),
        DefaultFn::Destination => ctx.systems.warehouse.clone(),
        DefaultFn::ResponseSource => ctx.systems.warehouse.clone(),
        DefaultFn::ResponseDestination => ctx.systems.host.clone(),
        DefaultFn::SequenceNumber => ctx.line_index.to_string(),
        DefaultFn::CurrentDatetime => ctx.now.format("%Y%m%d%H%M%S").to_string(),
        DefaultFn::ParentId => String::new(),
    }
}

/// Translate a unit-of-measure value on designated fields, document
/// codes to wire codes. Unknown codes pass through.
pub fn remap_unit_code(field_name: &str, val: String, units: &UnitCodeMap) -> String {
    if units.applies_to(field_name) {
        if let Some(mapped) = units.ubl_to_wamas(&val) {
            return mapped.to_owned();
        }
    }
    val
}

/// Format a resolved value into its fixed-width slot.
pub fn format_value(val: &str, field: &FieldSpec) -> Result<String> {
    let width = field.width();
    match field.ftype {
        FieldType::Str => Ok(pad_left(val, width)),
        FieldType::Int => Ok(pad_zeros(val, width)),
        FieldType::Float => format_float(val, width, field.dp, field.name),
        FieldType::Date => format_date(val, width, field.name),
        FieldType::DateTime => format_datetime(val, width, field.name),
        FieldType::Bool => {
            let val = if val.is_empty() { "N" } else { val };
            Ok(pad_left(val, width))
        }
    }
}

fn clip(val: &str, width: usize) -> String {
    val.chars().take(width).collect()
}

fn pad_left(val: &str, width: usize) -> String {
    let mut s = clip(val, width);
    let len = s.chars().count();
    s.push_str(&" ".repeat(width - len));
    s
}

fn pad_zeros(val: &str, width: usize) -> String {
    let len = val.chars().count();
    if len >= width {
        clip(val, width)
    } else {
        format!("{}{val}", "0".repeat(width - len))
    }
}

fn format_float(val: &str, width: usize, dp: u8, field: &str) -> Result<String> {
    let text = val.trim();
    let text = if text.is_empty() { "0" } else { text };
    let number: f64 = text
        .parse()
        .map_err(|_| Error::not_a_number(field, val))?;
    if !number.is_finite() || number < 0.0 {
        return Err(Error::not_a_number(field, val));
    }
    // Magnitudes that only render in scientific notation cannot be laid
    // out as a plain digit string.
    if number != 0.0 && (number >= 1e16 || number < 1e-4) {
        return Err(Error::not_a_number(field, val));
    }
    let rendered = number.to_string();
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let int_width = width.saturating_sub(usize::from(dp));
    let mut out = String::with_capacity(width);
    if whole.len() < int_width {
        out.push_str(&"0".repeat(int_width - whole.len()));
    }
    out.push_str(whole);
    out.push_str(fraction);
    if fraction.len() < usize::from(dp) {
        out.push_str(&"0".repeat(usize::from(dp) - fraction.len()));
    }
    Ok(clip(&out, width))
}

fn format_date(val: &str, width: usize, field: &str) -> Result<String> {
    if val.trim().is_empty() {
        return Ok(" ".repeat(width));
    }
    let date =
        crate::time::parse_date_lenient(val).ok_or_else(|| Error::not_a_date(field, val))?;
    Ok(clip(&date.format("%Y%m%d").to_string(), width))
}

fn format_datetime(val: &str, width: usize, field: &str) -> Result<String> {
    if val.trim().is_empty() {
        return Ok(" ".repeat(width));
    }
    let dt =
        crate::time::parse_datetime_lenient(val).ok_or_else(|| Error::not_a_date(field, val))?;
    Ok(pad_left(&dt.format("%Y%m%d%H%M%S").to_string(), width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wamas_record::Map;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn context<'a>(
        source: &'a Value,
        systems: &'a SystemIds,
        units: &'a UnitCodeMap,
    ) -> EncodeContext<'a> {
        EncodeContext {
            source,
            line_index: 3,
            repeat: None,
            systems,
            units,
            now: now(),
        }
    }

    fn spec(ftype: FieldType, length: i32) -> FieldSpec {
        FieldSpec::new("Demo", ftype, length)
    }

    #[test]
    fn test_string_pads_and_truncates() {
        let field = spec(FieldType::Str, 6);
        assert_eq!(format_value("abc", &field).unwrap(), "abc   ");
        assert_eq!(format_value("abcdefgh", &field).unwrap(), "abcdef");
    }

    #[test]
    fn test_int_zero_pads() {
        let field = spec(FieldType::Int, 6);
        assert_eq!(format_value("12", &field).unwrap(), "000012");
        assert_eq!(format_value("", &field).unwrap(), "000000");
        assert_eq!(format_value("1234567", &field).unwrap(), "123456");
    }

    #[test]
    fn test_float_layout() {
        let field = spec(FieldType::Float, 12).dp(3);
        assert_eq!(format_value("12.345", &field).unwrap(), "000000012345");
        assert_eq!(format_value("5", &field).unwrap(), "000000005000");
        assert_eq!(format_value("", &field).unwrap(), "000000000000");
        assert_eq!(format_value("0.5", &field).unwrap(), "000000000500");
    }

    #[test]
    fn test_float_rejects_non_numeric() {
        let field = spec(FieldType::Float, 12).dp(3);
        for bad in ["abc", "-1.5", "1e17", "nan", "inf"] {
            assert!(
                matches!(format_value(bad, &field), Err(Error::NotANumber { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_date_formats_and_blanks() {
        let field = spec(FieldType::Date, 8);
        assert_eq!(format_value("2024-01-15", &field).unwrap(), "20240115");
        assert_eq!(format_value("", &field).unwrap(), "        ");
        assert!(matches!(
            format_value("soon", &field),
            Err(Error::NotADate { .. })
        ));
    }

    #[test]
    fn test_datetime_formats() {
        let field = spec(FieldType::DateTime, 14);
        assert_eq!(
            format_value("2024-01-15 10:30:00", &field).unwrap(),
            "20240115103000"
        );
        assert_eq!(format_value("2024-01-15", &field).unwrap(), "20240115000000");
        assert_eq!(format_value(" ", &field).unwrap(), "              ");
    }

    #[test]
    fn test_bool_defaults_to_no() {
        let field = spec(FieldType::Bool, 1);
        assert_eq!(format_value("", &field).unwrap(), "N");
        assert_eq!(format_value("Y", &field).unwrap(), "Y");
    }

    #[test]
    fn test_resolution_priority() {
        let mut map = Map::new();
        map.insert("flat", Value::from("from-dict"));
        let source = Value::Map(map);
        let systems = SystemIds::default();
        let units = UnitCodeMap::standard();
        let ctx = context(&source, &systems, &units);

        let field = FieldSpec::new("Demo", FieldType::Str, 12)
            .dict_key("flat")
            .default_value("fallback");
        assert_eq!(resolve_value(&field, &ctx), "from-dict");

        let field = FieldSpec::new("Demo", FieldType::Str, 12)
            .dict_key("missing")
            .default_value("fallback");
        assert_eq!(resolve_value(&field, &ctx), "fallback");

        let field = FieldSpec::new("Demo", FieldType::Str, 12)
            .default_fn(DefaultFn::SequenceNumber);
        assert_eq!(resolve_value(&field, &ctx), "3");
    }

    #[test]
    fn test_default_fns() {
        let source = Value::Map(Map::new());
        let systems = SystemIds::default();
        let units = UnitCodeMap::standard();
        let ctx = context(&source, &systems, &units);
        assert_eq!(resolve_default_fn(DefaultFn::Source, &ctx), "ODOO");
        assert_eq!(resolve_default_fn(DefaultFn::Destination, &ctx), "WAMAS");
        assert_eq!(resolve_default_fn(DefaultFn::ResponseSource, &ctx), "WAMAS");
        assert_eq!(
            resolve_default_fn(DefaultFn::ResponseDestination, &ctx),
            "ODOO"
        );
        assert_eq!(
            resolve_default_fn(DefaultFn::CurrentDatetime, &ctx),
            "20240101090000"
        );
        assert_eq!(resolve_default_fn(DefaultFn::ParentId, &ctx), "");
    }

    fn line_source(count: usize) -> Value {
        let mut lines = Vec::new();
        for i in 0..count {
            let mut item = Map::new();
            item.insert("cbc:ID", Value::from(format!("{}", i + 1)));
            lines.push(Value::Map(item));
        }
        let mut advice = Map::new();
        advice.insert("cbc:ID", Value::from("ORDER-7"));
        advice.insert("cac:DespatchLine", Value::List(lines));
        let mut root = Map::new();
        root.insert("DespatchAdvice", Value::Map(advice));
        Value::Map(root)
    }

    #[test]
    fn test_index_substitution_with_repetition() {
        let source = line_source(2);
        let systems = SystemIds::default();
        let units = UnitCodeMap::standard();
        let mut ctx = context(&source, &systems, &units);
        ctx.repeat = Some(Repeat { count: 2, index: 1 });

        let field = FieldSpec::new("Pos", FieldType::Str, 6)
            .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:ID");
        assert_eq!(resolve_value(&field, &ctx), "2");
    }

    #[test]
    fn test_index_segment_dropped_for_single_element() {
        // A single child is a plain map, not a one-element list.
        let mut item = Map::new();
        item.insert("cbc:ID", Value::from("10"));
        let mut advice = Map::new();
        advice.insert("cac:DespatchLine", Value::Map(item));
        let mut root = Map::new();
        root.insert("DespatchAdvice", Value::Map(advice));
        let source = Value::Map(root);

        let systems = SystemIds::default();
        let units = UnitCodeMap::standard();
        let mut ctx = context(&source, &systems, &units);
        ctx.repeat = Some(Repeat { count: 1, index: 0 });

        let field = FieldSpec::new("Pos", FieldType::Str, 6)
            .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:ID");
        assert_eq!(resolve_value(&field, &ctx), "10");
    }

    #[test]
    fn test_join_source_concatenates_with_space() {
        let mut advice = Map::new();
        advice.insert("cbc:IssueDate", Value::from("2024-01-15"));
        advice.insert("cbc:IssueTime", Value::from("10:30:00"));
        let mut root = Map::new();
        root.insert("DespatchAdvice", Value::Map(advice));
        let source = Value::Map(root);

        let systems = SystemIds::default();
        let units = UnitCodeMap::standard();
        let ctx = context(&source, &systems, &units);

        let field = FieldSpec::new("Term", FieldType::DateTime, 14)
            .source_join(&["DespatchAdvice.cbc:IssueDate", "DespatchAdvice.cbc:IssueTime"]);
        let raw = resolve_value(&field, &ctx);
        assert_eq!(raw, "2024-01-15 10:30:00");
        assert_eq!(format_value(&raw, &field).unwrap(), "20240115103000");
    }

    #[test]
    fn test_guarded_source_first_truthy_wins() {
        let mut item = Map::new();
        item.insert("seller", Value::from("SELLER-1"));
        item.insert("standard", Value::from("STD-1"));
        let source = Value::Map(item);

        let systems = SystemIds::default();
        let units = UnitCodeMap::standard();
        let ctx = context(&source, &systems, &units);

        let field = FieldSpec::new("Art", FieldType::Str, 20)
            .source_guarded(&[("seller", "seller"), ("standard", "standard")]);
        assert_eq!(resolve_value(&field, &ctx), "SELLER-1");

        let mut item = Map::new();
        item.insert("standard", Value::from("STD-1"));
        let source = Value::Map(item);
        let ctx = context(&source, &systems, &units);
        assert_eq!(resolve_value(&field, &ctx), "STD-1");
    }

    #[test]
    fn test_unit_code_remap_applies_to_designated_fields() {
        let units = UnitCodeMap::standard();
        assert_eq!(
            remap_unit_code("HostEinheit", "XBQ".to_owned(), &units),
            "BOT"
        );
        // unknown codes and other fields pass through
        assert_eq!(
            remap_unit_code("HostEinheit", "PCE".to_owned(), &units),
            "PCE"
        );
        assert_eq!(remap_unit_code("Bezeich", "XBQ".to_owned(), &units), "XBQ");
    }

    #[test]
    fn test_encode_line_against_table() {
        let table = ConvertTable::new(
            "DEMO",
            vec![
                FieldSpec::new("Telheader_Quelle", FieldType::Str, 10)
                    .default_fn(DefaultFn::Source),
                FieldSpec::new("Telheader_Ziel", FieldType::Str, 10)
                    .default_fn(DefaultFn::Destination),
                FieldSpec::new("Telheader_TelSeq", FieldType::Int, 6)
                    .default_fn(DefaultFn::SequenceNumber),
                FieldSpec::new("Telheader_AnlZeit", FieldType::DateTime, 14)
                    .default_fn(DefaultFn::CurrentDatetime),
                FieldSpec::new("Satzart", FieldType::Str, 9).default_value("DEMO00001"),
                FieldSpec::new("Id", FieldType::Str, 6).source("DespatchAdvice.cbc:ID"),
            ],
        );
        let source = line_source(2);
        let systems = SystemIds::default();
        let units = UnitCodeMap::standard();
        let ctx = context(&source, &systems, &units);
        let line = encode_line(&table, &ctx).unwrap();
        assert_eq!(
            line,
            "ODOO      WAMAS     00000320240101090000DEMO00001ORDER-"
        );
        assert_eq!(line.len(), table.line_width());
    }
}
