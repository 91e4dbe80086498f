//! CSV intake with delimiter and encoding auto-detection.
//!
//! Upload sources disagree on delimiter and encoding, so intake tries a
//! fixed candidate grid: delimiters `;`, `,`, tab, `|` against UTF-8 then
//! Windows-1252. The first combination that parses into a non-empty table
//! whose header equals the expected layout wins. When no combination matches
//! the layout, the best-effort parse is kept so the schema check can report
//! the mismatch instead of intake failing closed.

use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::debug;

use cadastro_model::{EXPECTED_COLUMNS, RecordSet};

use crate::error::{IngestError, Result};

/// Candidate delimiters, in priority order.
const DELIMITER_CANDIDATES: [u8; 4] = [b';', b',', b'\t', b'|'];

/// Candidate encodings, in priority order. Windows-1252 covers the latin1
/// range legacy exports use for Portuguese text.
const ENCODING_CANDIDATES: [&Encoding; 2] = [UTF_8, WINDOWS_1252];

pub fn read_csv_record_set(path: &Path) -> Result<RecordSet> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut fallback: Option<RecordSet> = None;
    for delimiter in DELIMITER_CANDIDATES {
        for encoding in ENCODING_CANDIDATES {
            let Some(table) = try_parse(&bytes, delimiter, encoding) else {
                continue;
            };
            if table.columns.is_empty() {
                continue;
            }
            if matches_layout(&table.columns) && !table.is_empty() {
                debug!(
                    delimiter = ?char::from(delimiter),
                    encoding = encoding.name(),
                    rows = table.height(),
                    "CSV candidate matched expected layout"
                );
                return Ok(table);
            }
            if better_fallback(fallback.as_ref(), &table) {
                fallback = Some(table);
            }
        }
    }

    match fallback {
        Some(table) => {
            debug!(
                columns = table.columns.len(),
                rows = table.height(),
                "no CSV candidate matched the layout; keeping best-effort parse"
            );
            Ok(table)
        }
        None => Err(IngestError::Unreadable {
            path: path.to_path_buf(),
        }),
    }
}

/// Prefer a layout-matching parse (even with zero rows, so the empty-table
/// error stays accurate), then the widest one; a wrong delimiter collapses
/// each line into few columns, so width is the best-effort signal.
fn better_fallback(best: Option<&RecordSet>, candidate: &RecordSet) -> bool {
    let Some(best) = best else {
        return true;
    };
    let best_matches = matches_layout(&best.columns);
    let candidate_matches = matches_layout(&candidate.columns);
    if candidate_matches != best_matches {
        return candidate_matches;
    }
    candidate.columns.len() > best.columns.len()
}

/// Parse one (delimiter, encoding) candidate. Returns None when the bytes do
/// not decode in this encoding or any record fails to parse.
fn try_parse(bytes: &[u8], delimiter: u8, encoding: &'static Encoding) -> Option<RecordSet> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return None;
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.ok()?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut rows = raw_rows.into_iter();
    let columns: Vec<String> = rows.next()?;
    Some(RecordSet::new(columns, rows.collect()))
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Exact, order-sensitive comparison against the expected layout.
pub fn matches_layout(columns: &[String]) -> bool {
    columns.len() == EXPECTED_COLUMNS.len()
        && columns
            .iter()
            .zip(EXPECTED_COLUMNS.iter())
            .all(|(observed, expected)| observed == expected)
}
