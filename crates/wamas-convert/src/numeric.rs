//! Wire digit-string to decimal coercion.
//!
//! Quantity and weight fields travel as fixed-width digit strings with
//! an implied decimal point (`000000012345` is `12.345` at three
//! decimal places). Before linking, every registered float field is
//! coerced to a true decimal so templates render `12.345` instead of
//! the raw digits.

use tracing::warn;
use wamas_grammar::float_field;
use wamas_record::{Record, Value};

/// Split a digit string at its implied decimal point and parse it. The
/// trailing `dp` digits are the fraction, the rest the integer part.
pub fn digits_to_float(digits: &str, dp: u8) -> Option<f64> {
    let dp = usize::from(dp);
    if digits.len() < dp || digits.is_empty() {
        return None;
    }
    let (whole, fraction) = digits.split_at(digits.len() - dp);
    let whole = if whole.is_empty() { "0" } else { whole };
    format!("{whole}.{fraction}").parse().ok()
}

/// Coerce every registered float field of a decoded record in place.
/// A value that does not parse is left as-is with a warning.
pub fn coerce_registered_floats(record: &mut Record) {
    let float_names: Vec<String> = record
        .keys()
        .filter(|name| float_field(name).is_some())
        .map(str::to_owned)
        .collect();

    for name in float_names {
        let Some((_, dp)) = float_field(&name) else {
            continue;
        };
        let Some(Value::Text(digits)) = record.get(&name) else {
            continue;
        };
        if digits.is_empty() {
            continue;
        }
        match digits_to_float(digits, dp) {
            Some(number) => record.insert(name, Value::Float(number)),
            None => warn!(
                field = name,
                value = %digits,
                "value is not a wire decimal, keeping it as a string"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_split() {
        assert_eq!(digits_to_float("000000012345", 3), Some(12.345));
        assert_eq!(digits_to_float("000000005000", 3), Some(5.0));
        assert_eq!(digits_to_float("123", 3), Some(0.123));
        assert_eq!(digits_to_float("12", 3), None);
        assert_eq!(digits_to_float("00000001234x", 3), None);
        assert_eq!(digits_to_float("", 3), None);
    }

    #[test]
    fn test_coercion_targets_registered_fields_only() {
        let mut record = Record::new();
        record.insert("IvWevp_LiefMngs_Mng", "000000012345");
        record.insert("IvWevp_WevPos", "000001");
        coerce_registered_floats(&mut record);
        assert_eq!(
            record.get("IvWevp_LiefMngs_Mng"),
            Some(&Value::Float(12.345))
        );
        // not on the float-field list, stays a string
        assert_eq!(record.get_str("IvWevp_WevPos"), Some("000001"));
    }

    #[test]
    fn test_non_numeric_value_is_kept_as_string() {
        let mut record = Record::new();
        record.insert("Mngs_Mng", "not-digits");
        record.insert("IvTek_GesGew", "");
        coerce_registered_floats(&mut record);
        assert_eq!(record.get_str("Mngs_Mng"), Some("not-digits"));
        assert_eq!(record.get_str("IvTek_GesGew"), Some(""));
    }
}
