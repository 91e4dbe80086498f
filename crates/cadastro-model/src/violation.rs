use serde::{Deserialize, Serialize};

/// The rule family that produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Column list does not match the expected layout.
    SchemaMismatch,
    /// Cell contains a blacklisted character (cedilla, apostrophe, backtick, acute).
    ForbiddenCharacter,
    /// Cell contains an accented character.
    Diacritic,
    /// Cell value is outside the column's allowed set.
    DisallowedValue,
    /// CPF does not match `ddd.ddd.ddd-dd`.
    CpfFormat,
    /// Date does not match `dd/mm/yyyy`.
    DateFormat,
    /// Phone does not match `(dd)dddd-dddd` / `(ddd)ddddd-dddd`.
    PhoneFormat,
    /// CEP does not match `ddddd-ddd`.
    CepFormat,
}

/// One defect found during validation.
///
/// `row` is the 1-based display row as a human sees it in the source file
/// (data row index + 2, accounting for the header line). Schema violations
/// apply to the whole record set and carry no row or column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub row: Option<usize>,
    pub column: Option<String>,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn schema(message: impl Into<String>) -> Self {
        Self {
            row: None,
            column: None,
            kind: ViolationKind::SchemaMismatch,
            message: message.into(),
        }
    }

    pub fn cell(row: usize, column: &str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            column: Some(column.to_string()),
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.row, &self.column) {
            (Some(row), Some(column)) => write!(f, "row {row} - {column}: {}", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

/// Outcome of one validation run: schema violations first, then content
/// violations in record-then-column traversal order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn schema_violation(&self) -> Option<&Violation> {
        self.violations
            .iter()
            .find(|violation| violation.kind == ViolationKind::SchemaMismatch)
    }
}
