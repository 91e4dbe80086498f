//! Terminal summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cadastro_model::{EXPECTED_COLUMNS, Violation, ViolationKind, allowed_values};

use crate::commands::CheckResult;

pub fn print_summary(result: &CheckResult) {
    println!("File: {}", result.file.display());
    println!("Rows: {} (columns: {})", result.rows, result.columns);
    if let Some(path) = &result.report_json {
        println!("Report: {}", path.display());
    }

    if result.report.is_valid() {
        println!("OK: file conforms to the expected layout and content rules");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Rule"),
        header_cell("Message"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    align_column(&mut table, 0, CellAlignment::Right);

    for violation in &result.report.violations {
        table.add_row(vec![
            row_cell(violation),
            column_cell(violation),
            kind_cell(violation.kind),
            Cell::new(&violation.message),
        ]);
    }

    println!();
    println!("Violations:");
    println!("{table}");
    println!(
        "FAIL: {} violation(s) found",
        result.report.violation_count()
    );
}

pub fn print_layout() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Allowed values"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 0, CellAlignment::Right);

    for (index, column) in EXPECTED_COLUMNS.iter().enumerate() {
        let domain = match allowed_values(column) {
            Some(values) => Cell::new(values.join(", ")),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(column).add_attribute(Attribute::Bold),
            domain,
        ]);
    }
    println!("{table}");
}

fn row_cell(violation: &Violation) -> Cell {
    match violation.row {
        Some(row) => Cell::new(row),
        None => dim_cell("-"),
    }
}

fn column_cell(violation: &Violation) -> Cell {
    match &violation.column {
        Some(column) => Cell::new(column).add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn kind_cell(kind: ViolationKind) -> Cell {
    let label = match kind {
        ViolationKind::SchemaMismatch => "SCHEMA",
        ViolationKind::ForbiddenCharacter => "FORBIDDEN",
        ViolationKind::Diacritic => "ACCENT",
        ViolationKind::DisallowedValue => "VALUE",
        ViolationKind::CpfFormat => "CPF",
        ViolationKind::DateFormat => "DATE",
        ViolationKind::PhoneFormat => "PHONE",
        ViolationKind::CepFormat => "CEP",
    };
    let cell = Cell::new(label).fg(Color::Red);
    if kind == ViolationKind::SchemaMismatch {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
