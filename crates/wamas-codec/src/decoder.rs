//! Fixed-width body decoding.

use tracing::debug;
use wamas_grammar::{DecodeField, DecodeTable};
use wamas_record::{Record, Value};

use crate::encoding::decode_latin1;
use crate::repair::repair_body;
use crate::{Error, Result};

/// Decode one telegram body against its grammar.
///
/// A length mismatch is logged and repaired where a heuristic applies;
/// decoding then proceeds over the first grammar-width bytes. A body
/// still shorter than the grammar after repair is a hard fault. Every
/// value comes out as a whitespace-trimmed string.
pub fn decode_body(body: &[u8], table: &DecodeTable) -> Result<Record> {
    let expected = table.body_width();
    let first_width = table.fields().first().map(DecodeField::width).unwrap_or(0);
    let body = repair_body(table.telegram_type(), body, expected, first_width);

    if body.len() < expected {
        debug!(
            telegram_type = table.telegram_type(),
            line = decode_latin1(&body),
            "body too short to decode"
        );
        return Err(Error::line_too_short(
            table.telegram_type(),
            expected,
            body.len(),
        ));
    }

    let mut record = Record::new();
    let mut offset = 0;
    for field in table.fields() {
        let slice = &body[offset..offset + field.width()];
        record.insert(field.name, Value::from(decode_latin1(slice).trim()));
        offset += field.width();
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DecodeTable {
        DecodeTable::new("DEMO", &[("Id", 6), ("Name", 10), ("Qty", 4)])
    }

    #[test]
    fn test_decode_trims_and_keeps_field_order() {
        let record = decode_body(b"ID0001widget      12", &table()).unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["Id", "Name", "Qty"]);
        assert_eq!(record.get_str("Id"), Some("ID0001"));
        assert_eq!(record.get_str("Name"), Some("widget"));
        assert_eq!(record.get_str("Qty"), Some("12"));
    }

    #[test]
    fn test_short_body_is_a_fault() {
        let err = decode_body(b"ID0001widget", &table()).unwrap_err();
        assert!(matches!(err, Error::LineTooShort { .. }));
    }

    #[test]
    fn test_extra_bytes_are_ignored() {
        let record = decode_body(b"ID0001widget      12  trailing garbage", &table()).unwrap();
        assert_eq!(record.get_str("Qty"), Some("12"));
    }

    #[test]
    fn test_latin1_value_decodes() {
        let record = decode_body(b"ID0001caf\xe9        12", &table()).unwrap();
        assert_eq!(record.get_str("Name"), Some("café"));
    }
}
