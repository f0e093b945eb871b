//! Length repair for malformed telegram lines.
//!
//! Two narrow patches for known bad producers, applied only when a body
//! does not match its grammar width. A well-formed body passes through
//! untouched.

use std::borrow::Cow;

use tracing::debug;

/// Types whose producer pads package lines one byte off. The field
/// boundaries are not affected, so the mismatch is only logged.
pub fn tolerates_off_by_one(telegram_type: &str) -> bool {
    matches!(telegram_type, "WATEKQ" | "WATEPQ")
}

/// Types whose leading lot-number field is known to arrive with
/// misencoded multi-byte characters that inflate the byte count.
pub fn needs_splice_repair(telegram_type: &str) -> bool {
    telegram_type == "WATEPQ"
}

/// Strip non-ASCII bytes from the first space-delimited token, pad the
/// token back to its field width and splice the remainder after it.
pub fn splice_first_token(body: &[u8], field_width: usize) -> Vec<u8> {
    let token_end = body
        .iter()
        .position(|&b| b == b' ')
        .unwrap_or(body.len());
    let mut fixed: Vec<u8> = body[..token_end]
        .iter()
        .copied()
        .filter(u8::is_ascii)
        .collect();
    if fixed.len() < field_width {
        fixed.resize(field_width, b' ');
    }
    let rest_start = (token_end + 1).min(body.len());
    fixed.extend_from_slice(&body[rest_start..]);
    fixed
}

/// Apply the repair heuristics to a body whose length does not match
/// `expected`. `field_width` is the width of the grammar's first field,
/// the splice target.
pub fn repair_body<'a>(
    telegram_type: &str,
    body: &'a [u8],
    expected: usize,
    field_width: usize,
) -> Cow<'a, [u8]> {
    if body.len() == expected {
        return Cow::Borrowed(body);
    }
    debug!(
        telegram_type,
        actual = body.len(),
        expected,
        "line length does not match grammar"
    );
    if body.len().abs_diff(expected) == 1 && tolerates_off_by_one(telegram_type) {
        debug!(telegram_type, "length off by one only, fields not impacted");
        return Cow::Borrowed(body);
    }
    if needs_splice_repair(telegram_type) {
        let fixed = splice_first_token(body, field_width);
        if fixed.len() == expected {
            debug!(telegram_type, "line corrected");
        } else {
            debug!(
                telegram_type,
                actual = fixed.len(),
                expected,
                "line still does not match grammar after repair"
            );
        }
        return Cow::Owned(fixed);
    }
    Cow::Borrowed(body)
}
