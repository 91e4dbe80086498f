//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use cadastro_ingest::load_record_set;
use cadastro_model::ValidationReport;
use cadastro_validate::{validate, write_report_json};

use crate::cli::CheckArgs;

/// Outcome of a `check` run, for summary printing.
pub struct CheckResult {
    pub file: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub report: ValidationReport,
    pub report_json: Option<PathBuf>,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let record_set = load_record_set(&args.file)
        .with_context(|| format!("cannot validate {}", args.file.display()))?;
    let report = validate(&record_set);
    info!(
        rows = record_set.height(),
        violations = report.violation_count(),
        "validation finished"
    );

    if let Some(path) = &args.report_json {
        write_report_json(path, &args.file.display().to_string(), &report)
            .with_context(|| format!("cannot write report to {}", path.display()))?;
    }

    Ok(CheckResult {
        file: args.file.clone(),
        rows: record_set.height(),
        columns: record_set.columns.len(),
        report,
        report_json: args.report_json.clone(),
    })
}

pub fn run_layout() -> Result<()> {
    crate::summary::print_layout();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_model::EXPECTED_COLUMNS;
    use std::io::Write;

    #[test]
    fn check_reports_violations_and_writes_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let csv_path = dir.path().join("upload.csv");
        let json_path = dir.path().join("report.json");

        let header = EXPECTED_COLUMNS.join(";");
        let mut row = vec![""; EXPECTED_COLUMNS.len()];
        row[0] = "1"; // TIPO
        row[13] = "X"; // SEXO outside the allowed set
        let mut file = std::fs::File::create(&csv_path).expect("create csv");
        writeln!(file, "{header}").expect("write header");
        writeln!(file, "{}", row.join(";")).expect("write row");

        let args = CheckArgs {
            file: csv_path,
            report_json: Some(json_path.clone()),
        };
        let result = run_check(&args).expect("run check");
        assert!(!result.report.is_valid());
        assert_eq!(result.columns, 22);
        assert!(json_path.exists());
    }

    #[test]
    fn check_fails_on_missing_file() {
        let args = CheckArgs {
            file: PathBuf::from("/nonexistent/upload.csv"),
            report_json: None,
        };
        assert!(run_check(&args).is_err());
    }
}
