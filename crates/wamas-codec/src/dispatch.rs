//! Stream demultiplexing.
//!
//! Splits a raw telegram stream into lines, decodes each 49-byte header,
//! classifies the record-type code and routes the body to the grammar
//! selected by the telegram type.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use wamas_grammar::{GrammarRegistry, IGNORED_TELEGRAM_TYPES};
use wamas_record::Record;

use crate::decoder::decode_body;
use crate::{Error, Result};

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("hard-coded pattern"));

/// Split a record-type code such as `WEAKQ0051` at its first digit run
/// into the telegram type and the trailing sequence digits.
pub fn split_record_type_code(code: &str) -> Result<(&str, &str)> {
    let digits = DIGIT_RUN
        .find(code)
        .ok_or_else(|| Error::invalid_record_type_code(code))?;
    Ok((&code[..digits.start()], digits.as_str()))
}

/// Decoded telegram stream: per-type record lists in first-seen order.
#[derive(Debug, Default)]
pub struct DecodedStream {
    groups: Vec<(String, Vec<Record>)>,
}

impl DecodedStream {
    fn push(&mut self, telegram_type: &str, record: Record) {
        match self.groups.iter_mut().find(|(t, _)| t == telegram_type) {
            Some((_, records)) => records.push(record),
            None => self
                .groups
                .push((telegram_type.to_owned(), vec![record])),
        }
    }

    /// Records of one telegram type, in input order.
    pub fn get(&self, telegram_type: &str) -> Option<&[Record]> {
        self.groups
            .iter()
            .find(|(t, _)| t == telegram_type)
            .map(|(_, records)| records.as_slice())
    }

    /// Type groups in the order their first record appeared.
    pub fn groups(&self) -> &[(String, Vec<Record>)] {
        &self.groups
    }

    /// Consume the stream into its type groups.
    pub fn into_groups(self) -> Vec<(String, Vec<Record>)> {
        self.groups
    }

    /// De-duplicated telegram types observed, sorted.
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.groups.iter().map(|(t, _)| t.as_str()).collect();
        types.sort_unstable();
        types
    }

    /// Whether any record was decoded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of decoded records.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }
}

fn lines(raw: &[u8]) -> impl Iterator<Item = &[u8]> {
    raw.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Decode a raw telegram stream into per-type record lists.
///
/// Types on the ignore list are skipped silently. With `valid_types`
/// set, anything outside that list fails; otherwise any registered type
/// is accepted.
pub fn decode_stream(
    raw: &[u8],
    registry: &GrammarRegistry,
    valid_types: Option<&[&str]>,
) -> Result<DecodedStream> {
    let header_len = registry.header().body_width();
    let mut stream = DecodedStream::default();

    for line in lines(raw) {
        if line.is_empty() {
            continue;
        }
        let head_slice = line.get(..header_len).unwrap_or(line);
        let header = decode_body(head_slice, registry.header())?;
        let satzart = header.get_str("Satzart").unwrap_or_default();
        let (telegram_type, _sequence) = split_record_type_code(satzart)?;

        if IGNORED_TELEGRAM_TYPES.contains(&telegram_type) {
            debug!(telegram_type, "skipping ignored telegram type");
            continue;
        }
        let accepted = match valid_types {
            Some(list) => list.contains(&telegram_type),
            None => registry.contains(telegram_type),
        };
        if !accepted {
            return Err(Error::unsupported_telegram_type(telegram_type));
        }

        let table = registry.decode_table(telegram_type)?;
        let record = decode_body(&line[header_len..], table)?;
        stream.push(telegram_type, record);
    }
    Ok(stream)
}
