//! Per-column format rules.
//!
//! Every pattern is anchored: the entire trimmed value must match, not a
//! substring. CPF and the two date columns are checked even when empty;
//! phones and CEP are optional fields, so the empty value is allowed there.

use std::sync::LazyLock;

use regex::Regex;

use cadastro_model::{
    COL_CEP, COL_CPF, Violation, ViolationKind, is_date_column, is_phone_column,
};

/// `ddd.ddd.ddd-dd`, shape only (no check-digit arithmetic).
static CPF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("invalid CPF regex"));

/// `dd/mm/yyyy`, shape only (no calendar validity).
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("invalid date regex"));

/// `(dd)dddd-dddd` through `(ddd)ddddd-dddd`.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2,3}\)\d{4,5}-\d{4}$").expect("invalid phone regex"));

/// `ddddd-ddd`.
static CEP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("invalid CEP regex"));

pub fn check(display_row: usize, column: &str, value: &str) -> Option<Violation> {
    if column == COL_CPF && !CPF_REGEX.is_match(value) {
        return Some(Violation::cell(
            display_row,
            column,
            ViolationKind::CpfFormat,
            format!("invalid CPF format ({value})"),
        ));
    }
    if is_date_column(column) && !DATE_REGEX.is_match(value) {
        return Some(Violation::cell(
            display_row,
            column,
            ViolationKind::DateFormat,
            format!("invalid date ({value})"),
        ));
    }
    if is_phone_column(column) && !value.is_empty() && !PHONE_REGEX.is_match(value) {
        return Some(Violation::cell(
            display_row,
            column,
            ViolationKind::PhoneFormat,
            format!("invalid phone number ({value})"),
        ));
    }
    if column == COL_CEP && !value.is_empty() && !CEP_REGEX.is_match(value) {
        return Some(Violation::cell(
            display_row,
            column,
            ViolationKind::CepFormat,
            format!("invalid CEP format ({value})"),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_boundaries() {
        assert!(check(2, "CPF", "123.456.789-01").is_none());
        assert!(check(2, "CPF", "123456789-01").is_some());
        assert!(check(2, "CPF", "123.456.789.01").is_some());
        // No skip-on-empty for CPF.
        assert!(check(2, "CPF", "").is_some());
    }

    #[test]
    fn date_boundaries() {
        for column in ["DATA_NASCIMENTO", "DATA BASE"] {
            assert!(check(2, column, "01/01/2000").is_none());
            assert!(check(2, column, "2000-01-01").is_some());
            // Shape only: an impossible calendar date still matches.
            assert!(check(2, column, "99/99/9999").is_none());
            assert!(check(2, column, "").is_some());
        }
    }

    #[test]
    fn phone_boundaries() {
        for column in ["FONE_RESIDENCIA", "FONE_COMERCIAL"] {
            assert!(check(2, column, "(11)91234-5678").is_none());
            assert!(check(2, column, "(11)1234-5678").is_none());
            assert!(check(2, column, "(011)1234-5678").is_none());
            assert!(check(2, column, "11912345678").is_some());
            // Optional field: empty passes.
            assert!(check(2, column, "").is_none());
        }
    }

    #[test]
    fn cep_boundaries() {
        assert!(check(2, "CEP", "01310-100").is_none());
        assert!(check(2, "CEP", "01310100").is_some());
        assert!(check(2, "CEP", "").is_none());
    }

    #[test]
    fn match_is_full_string() {
        assert!(check(2, "CPF", "x123.456.789-01").is_some());
        assert!(check(2, "CEP", "01310-1000").is_some());
        assert!(check(2, "DATA BASE", "01/01/20001").is_some());
    }

    #[test]
    fn ungated_columns_skip() {
        assert!(check(2, "NOME", "anything").is_none());
        assert!(check(2, "RG", "").is_none());
    }
}
