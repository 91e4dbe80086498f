//! Column layout conformance check.

use cadastro_model::{EXPECTED_COLUMNS, RecordSet, Violation};

/// Compare the record set's column sequence against the expected layout.
///
/// The check is all-or-nothing: any mismatch (missing, extra, reordered, or
/// renamed column) yields exactly one violation for the whole set. Names are
/// compared case-sensitively, element by element, length for length.
pub fn check_schema(record_set: &RecordSet) -> Vec<Violation> {
    let conforms = record_set.columns.len() == EXPECTED_COLUMNS.len()
        && record_set
            .columns
            .iter()
            .zip(EXPECTED_COLUMNS.iter())
            .all(|(observed, expected)| observed == expected);
    if conforms {
        return Vec::new();
    }
    vec![Violation::schema(
        "file columns are not in the expected order or format",
    )]
}
