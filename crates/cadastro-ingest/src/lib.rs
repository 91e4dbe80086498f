//! File intake for the cadastro validator.
//!
//! Turns an uploaded CSV or XML file into a [`RecordSet`] for validation.
//! Intake failures are fatal: an unreadable or empty file never reaches the
//! rule engine.

mod csv_ingest;
mod error;
mod xml_ingest;

pub use csv_ingest::{matches_layout, read_csv_record_set};
pub use error::{IngestError, Result};
pub use xml_ingest::read_xml_record_set;

use std::path::Path;

use tracing::info;

use cadastro_model::RecordSet;

/// Load a record set from a file, dispatching on the extension.
///
/// `.xml` files go through the XML-to-table conversion; everything else is
/// treated as CSV with delimiter/encoding sniffing.
pub fn load_record_set(path: &Path) -> Result<RecordSet> {
    let is_xml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xml"))
        .unwrap_or(false);

    let record_set = if is_xml {
        read_xml_record_set(path)?
    } else {
        read_csv_record_set(path)?
    };

    if record_set.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        columns = record_set.columns.len(),
        rows = record_set.height(),
        "loaded record set"
    );
    Ok(record_set)
}
