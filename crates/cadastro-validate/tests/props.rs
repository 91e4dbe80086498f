//! Property tests for the rule engine invariants.

use proptest::prelude::*;

use cadastro_model::{EXPECTED_COLUMNS, RecordSet};
use cadastro_validate::{check_schema, fold_diacritics, has_diacritics, validate};

fn layout_columns() -> Vec<String> {
    EXPECTED_COLUMNS.iter().map(|s| s.to_string()).collect()
}

proptest! {
    /// Folding is idempotent: a folded string folds to itself.
    #[test]
    fn folding_is_idempotent(value in "\\PC*") {
        let once = fold_diacritics(&value);
        prop_assert_eq!(&fold_diacritics(&once), &once);
    }

    /// The diacritic rule fires exactly when folding changes the string.
    #[test]
    fn detection_matches_fold_inequality(value in "\\PC*") {
        prop_assert_eq!(has_diacritics(&value), fold_diacritics(&value) != value);
    }

    /// The exact expected layout always passes the schema check.
    #[test]
    fn exact_layout_passes_schema(rows in proptest::collection::vec(
        proptest::collection::vec("[A-Z0-9 ]{0,12}", 22), 0..4)
    ) {
        let set = RecordSet::new(layout_columns(), rows);
        prop_assert!(check_schema(&set).is_empty());
    }

    /// Dropping any one column yields exactly one schema violation.
    #[test]
    fn dropping_any_column_fails_schema(index in 0usize..22) {
        let mut columns = layout_columns();
        columns.remove(index);
        let set = RecordSet::new(columns, vec![]);
        prop_assert_eq!(check_schema(&set).len(), 1);
    }

    /// Swapping any two distinct columns yields exactly one schema violation.
    #[test]
    fn reordering_columns_fails_schema(a in 0usize..22, b in 0usize..22) {
        prop_assume!(a != b);
        let mut columns = layout_columns();
        columns.swap(a, b);
        let set = RecordSet::new(columns, vec![]);
        prop_assert_eq!(check_schema(&set).len(), 1);
    }

    /// Re-running validation on unchanged input yields an identical sequence.
    #[test]
    fn validation_is_deterministic(rows in proptest::collection::vec(
        proptest::collection::vec("\\PC{0,16}", 22), 0..3)
    ) {
        let set = RecordSet::new(layout_columns(), rows);
        prop_assert_eq!(validate(&set).violations, validate(&set).violations);
    }
}
