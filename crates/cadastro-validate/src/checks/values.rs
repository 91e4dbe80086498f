//! Allowed-value membership check for enumerated columns.

use cadastro_model::{Violation, ViolationKind, allowed_values};

/// Compare the upper-folded value against the column's allowed set, if one is
/// configured. Columns without a value domain skip this check entirely.
pub fn check(display_row: usize, column: &str, value: &str) -> Option<Violation> {
    let allowed = allowed_values(column)?;
    let folded = value.to_uppercase();
    if allowed.iter().any(|candidate| candidate.to_uppercase() == folded) {
        return None;
    }
    Some(Violation::cell(
        display_row,
        column,
        ViolationKind::DisallowedValue,
        format!("value not allowed ({value})"),
    ))
}
