// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Field value normalisation: turns raw form input into the strings that
// are actually printed on a document.

use pixpass_core::{FieldLayout, FieldName};
use tracing::warn;

/// Longest document number kept, before the hyphen is inserted.
const DOCUMENT_NUMBER_LEN: usize = 10;
/// The hyphen goes after this many characters.
const DOCUMENT_NUMBER_SPLIT: usize = 5;
/// Shorter numbers are printed but logged.
const DOCUMENT_NUMBER_MIN: usize = 8;

/// Normalise `raw` for `layout.field` and bound it by `layout.max_length`.
///
/// Document numbers follow their own fixed-width rule instead of
/// `max_length`.
pub fn normalize_field(layout: &FieldLayout, raw: &str) -> String {
    match layout.field {
        FieldName::Name => truncate_chars(&format_name(raw), layout.max_length),
        FieldName::Dob | FieldName::Expiry => truncate_chars(&format_date(raw), layout.max_length),
        FieldName::Sex => truncate_chars(&raw.to_uppercase(), layout.max_length),
        FieldName::City => truncate_chars(raw, layout.max_length),
        FieldName::Number => format_document_number(raw),
    }
}

/// `"First Middle Last"` becomes `"Last, First Middle"`.
///
/// Input that already contains a comma, and single-word names, pass through
/// unchanged.
pub fn format_name(input: &str) -> String {
    if input.contains(',') {
        return input.to_owned();
    }
    match input.trim().rsplit_once(char::is_whitespace) {
        Some((rest, last)) => format!("{}, {}", last, rest.trim_end()),
        None => input.to_owned(),
    }
}

/// Normalise a date to `DD.MM.YYYY`.
///
/// Already-normalised input passes through. Otherwise three parts split on
/// `-`, `/` or `.` are zero-padded and rejoined; failing that, eight or more
/// digits are sliced 2-2-4. Anything else is returned unmodified.
pub fn format_date(input: &str) -> String {
    if is_dotted_date(input) {
        return input.to_owned();
    }

    let parts: Vec<&str> = input.split(['-', '/', '.']).collect();
    if let [day, month, year] = parts.as_slice() {
        return format!("{:0>2}.{:0>2}.{}", day, month, year);
    }

    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 8 {
        return format!("{}.{}.{}", &digits[0..2], &digits[2..4], &digits[4..8]);
    }

    input.to_owned()
}

fn is_dotted_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

/// Upper-case, strip everything but `A-Z0-9`, keep 10 characters, and put a
/// hyphen after the fifth when longer than five.
pub fn format_document_number(input: &str) -> String {
    let cleaned: String = input
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    if cleaned.len() < DOCUMENT_NUMBER_MIN {
        warn!(number = %cleaned, "Document number is unusually short");
    }

    let truncated = &cleaned[..cleaned.len().min(DOCUMENT_NUMBER_LEN)];
    if truncated.len() > DOCUMENT_NUMBER_SPLIT {
        let (head, tail) = truncated.split_at(DOCUMENT_NUMBER_SPLIT);
        format!("{head}-{tail}")
    } else {
        truncated.to_owned()
    }
}

/// First `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
