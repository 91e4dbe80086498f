//! JSON report output.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use cadastro_model::{ValidationReport, Violation};

const REPORT_SCHEMA: &str = "cadastro-validator.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source_file: String,
    pub valid: bool,
    pub violation_count: usize,
    pub violations: &'a [Violation],
}

/// Write the validation outcome as a machine-readable JSON file.
pub fn write_report_json(
    output_path: &Path,
    source_file: &str,
    report: &ValidationReport,
) -> Result<()> {
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source_file: source_file.to_string(),
        valid: report.is_valid(),
        violation_count: report.violation_count(),
        violations: &report.violations,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_model::ViolationKind;

    #[test]
    fn report_json_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("validation_report.json");
        let report = ValidationReport::new(vec![Violation::cell(
            2,
            "CEP",
            ViolationKind::CepFormat,
            "invalid CEP format (01310100)",
        )]);

        write_report_json(&path, "upload.csv", &report).expect("write report");

        let text = std::fs::read_to_string(&path).expect("read report");
        let value: serde_json::Value = serde_json::from_str(&text).expect("parse report");
        assert_eq!(value["schema"], REPORT_SCHEMA);
        assert_eq!(value["valid"], false);
        assert_eq!(value["violation_count"], 1);
        assert_eq!(value["violations"][0]["column"], "CEP");
    }
}
