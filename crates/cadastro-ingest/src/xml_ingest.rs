//! XML intake: generic element-tree to table conversion.
//!
//! The document root's children are the records; each grandchild element is
//! one named cell. Column order is fixed by the first record element; later
//! records fill by name and may introduce new columns, which are appended.
//! Absent cells read as empty strings.

use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use cadastro_model::RecordSet;

use crate::error::{IngestError, Result};

pub fn read_xml_record_set(path: &Path) -> Result<RecordSet> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode(&bytes);
    let named_rows = parse_rows(&text, path)?;
    if named_rows.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let mut columns: Vec<String> = Vec::new();
    for row in &named_rows {
        for (name, _) in row {
            if !columns.iter().any(|column| column == name) {
                columns.push(name.clone());
            }
        }
    }

    let rows: Vec<Vec<String>> = named_rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    row.iter()
                        .find(|(name, _)| name == column)
                        .map(|(_, value)| value.clone())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    debug!(columns = columns.len(), rows = rows.len(), "parsed XML table");
    Ok(RecordSet::new(columns, rows))
}

fn decode(bytes: &[u8]) -> String {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text.into_owned();
    }
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}

/// Walk the event stream collecting (cell name, cell text) pairs per record
/// element. Depth 1 is the root, 2 a record, 3 a cell.
fn parse_rows(text: &str, path: &Path) -> Result<Vec<Vec<(String, String)>>> {
    let mut reader = Reader::from_str(text);

    let mut rows: Vec<Vec<(String, String)>> = Vec::new();
    let mut current_row: Vec<(String, String)> = Vec::new();
    let mut current_cell: Option<String> = None;
    let mut cell_text = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                depth += 1;
                match depth {
                    2 => current_row.clear(),
                    3 => {
                        current_cell = Some(element_name(start.local_name().as_ref()));
                        cell_text.clear();
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(empty)) => {
                if depth == 2 {
                    current_row.push((element_name(empty.local_name().as_ref()), String::new()));
                }
            }
            Ok(Event::Text(content)) => {
                if depth == 3 && current_cell.is_some() {
                    let value = content.xml_content().map_err(|error| IngestError::XmlParse {
                        path: path.to_path_buf(),
                        message: error.to_string(),
                    })?;
                    cell_text.push_str(value.trim());
                }
            }
            Ok(Event::CData(content)) => {
                if depth == 3 && current_cell.is_some() {
                    cell_text.push_str(String::from_utf8_lossy(content.as_ref()).trim());
                }
            }
            Ok(Event::End(_)) => {
                match depth {
                    3 => {
                        if let Some(name) = current_cell.take() {
                            current_row.push((name, std::mem::take(&mut cell_text)));
                        }
                    }
                    2 => rows.push(std::mem::take(&mut current_row)),
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => {
                return Err(IngestError::XmlParse {
                    path: path.to_path_buf(),
                    message: error.to_string(),
                });
            }
        }
    }

    Ok(rows)
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
