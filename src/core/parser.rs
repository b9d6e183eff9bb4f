use crate::domain::model::Record;
use csv::{ReaderBuilder, StringRecord, Terminator};
use regex::Regex;
use std::sync::LazyLock;

/// Columns per row: `file, text, number, hex`.
const FIELD_COUNT: usize = 4;

static HEX32: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{32}$").expect("hex pattern compiles"));

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("integer pattern compiles"));

/// Parses a raw file body into validated records.
///
/// The first line is always treated as a header and dropped, whatever it
/// contains. Rows that fail validation are skipped; this never errors.
pub fn parse(body: &str) -> Vec<Record> {
    let rows = match body.split_once('\n') {
        Some((_header, rest)) => rest,
        None => return Vec::new(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        // rows end at '\n' only; a '\r' stays inside its field
        .terminator(Terminator::Any(b'\n'))
        .from_reader(rows.as_bytes());

    reader
        .records()
        .filter_map(|row| row.ok())
        .filter_map(|row| parse_row(&row))
        .collect()
}

fn parse_row(row: &StringRecord) -> Option<Record> {
    if row.len() != FIELD_COUNT {
        return None;
    }

    // row[0] is the file column, redundant with the enclosing result
    let text = &row[1];
    if text.is_empty() {
        return None;
    }

    let number = parse_leading_int(&row[2])?;

    let hex = &row[3];
    if !is_valid_hex32(hex) {
        return None;
    }

    Some(Record {
        text: text.to_string(),
        number,
        hex: hex.to_string(),
    })
}

/// Reads the integer prefix of `field`, ignoring whatever trails it.
/// `"42"`, `" 42"` and `"42abc"` all give 42; `"abc"` and values outside i64
/// give `None`.
pub fn parse_leading_int(field: &str) -> Option<i64> {
    LEADING_INT
        .captures(field)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

pub fn is_valid_hex32(value: &str) -> bool {
    HEX32.is_match(value)
}
