//! Forbidden character scan.
//!
//! The downstream system rejects cedillas and every apostrophe-like mark, so
//! any occurrence anywhere in a cell is a violation. The blacklist overlaps
//! the diacritic check on purpose; both fire independently.

use cadastro_model::{Violation, ViolationKind};

/// Characters the target layout cannot carry in any field.
const FORBIDDEN_CHARS: [char; 6] = ['Ç', 'ç', '\'', '\u{2019}', '`', '\u{00B4}'];

pub fn check(display_row: usize, column: &str, value: &str) -> Option<Violation> {
    if !value.contains(FORBIDDEN_CHARS) {
        return None;
    }
    Some(Violation::cell(
        display_row,
        column,
        ViolationKind::ForbiddenCharacter,
        "contains forbidden character (cedilla, apostrophe, backtick, or acute accent)",
    ))
}
