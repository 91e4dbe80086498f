//! Content validation checks.
//!
//! Each module implements one rule family over a single trimmed cell value.
//! All families run independently on every cell: a failing rule never stops
//! the others, so one cell can accumulate several violations and the report
//! is always complete in a single pass.

mod diacritics;
mod forbidden;
mod format;
mod values;

pub use diacritics::{fold_diacritics, has_diacritics};

use cadastro_model::{RecordSet, Violation};

/// Header-line offset: data row 0 is line 2 as a human reads the file.
const DISPLAY_ROW_OFFSET: usize = 2;

/// Run every content rule over every cell, in record-then-column order.
pub fn run_all(record_set: &RecordSet) -> Vec<Violation> {
    let mut violations = Vec::new();
    for row_idx in 0..record_set.height() {
        let display_row = row_idx + DISPLAY_ROW_OFFSET;
        for (col_idx, column) in record_set.columns.iter().enumerate() {
            let value = record_set.cell(row_idx, col_idx).trim();

            // 1. Forbidden character blacklist
            violations.extend(forbidden::check(display_row, column, value));
            // 2. Diacritic detection (overlaps rule 1 by design)
            violations.extend(diacritics::check(display_row, column, value));
            // 3. Allowed-value membership for enumerated columns
            violations.extend(values::check(display_row, column, value));
            // 4. Column-gated format patterns
            violations.extend(format::check(display_row, column, value));
        }
    }
    violations
}
