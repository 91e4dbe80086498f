pub mod layout;
pub mod record;
pub mod violation;

pub use layout::{
    COL_CEP, COL_CPF, EXPECTED_COLUMNS, allowed_values, is_date_column, is_phone_column,
};
pub use record::RecordSet;
pub use violation::{ValidationReport, Violation, ViolationKind};
