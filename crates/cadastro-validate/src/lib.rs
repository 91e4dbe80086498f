//! Validation rule engine for the cadastro record layout.
//!
//! Two entry points mirror the two halves of a run: [`check_schema`] compares
//! the column sequence against the fixed layout, [`validate_content`] applies
//! the per-cell rule families. [`validate`] runs both and merges the result,
//! schema violations first. Validation-level findings are data, never
//! errors: all three functions are total over a well-formed record set.

mod checks;
mod report;
mod schema;

pub use checks::{fold_diacritics, has_diacritics, run_all as validate_content};
pub use report::{ReportPayload, write_report_json};
pub use schema::check_schema;

use cadastro_model::{RecordSet, ValidationReport};

/// Run the full validation pass: schema conformance, then content rules.
pub fn validate(record_set: &RecordSet) -> ValidationReport {
    let mut violations = check_schema(record_set);
    violations.extend(validate_content(record_set));
    ValidationReport::new(violations)
}
