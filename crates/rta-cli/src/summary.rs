use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use rta_model::names;

use crate::commands::ImportReport;

/// How many failed/warned lines to print before eliding the rest. The full
/// detail is always available via `--report`.
const DETAIL_LIMIT: usize = 25;

pub fn print_summary(report: &ImportReport) {
    let outcome = &report.outcome;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total"),
        header_cell("Persisted"),
        header_cell("Failed"),
        header_cell("Lines with warnings"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.total).add_attribute(Attribute::Bold),
        count_cell(outcome.success, Color::Green),
        count_cell(outcome.failed, Color::Red),
        count_cell(outcome.warnings.len() as u64, Color::Yellow),
    ]);
    println!("{table}");

    if outcome.cancelled {
        println!("Import cancelled; counts cover the rows read before the stop.");
    }
    if let Some(reason) = &report.aborted {
        eprintln!("Import aborted mid-stream: {reason}");
        eprintln!("Counts cover the rows read before the failure.");
    }

    print_error_table(report);
    print_warning_table(report);
}

fn print_error_table(report: &ImportReport) {
    let errors = &report.outcome.errors;
    if errors.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Uid"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in errors.iter().take(DETAIL_LIMIT) {
        let uid = error.data.get(names::DESENSITIZED_UID);
        table.add_row(vec![
            Cell::new(error.line),
            if uid.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(uid)
            },
            Cell::new(&error.error).fg(Color::Red),
        ]);
    }
    println!();
    println!("Failed lines:");
    println!("{table}");
    if errors.len() > DETAIL_LIMIT {
        println!("... and {} more (see --report)", errors.len() - DETAIL_LIMIT);
    }
}

fn print_warning_table(report: &ImportReport) {
    let warnings = &report.outcome.warnings;
    if warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Line"), header_cell("Defaulted values")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for line in warnings.iter().take(DETAIL_LIMIT) {
        table.add_row(vec![
            Cell::new(line.line),
            Cell::new(line.warnings.join("\n")).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Warnings:");
    println!("{table}");
    if warnings.len() > DETAIL_LIMIT {
        println!(
            "... and {} more (see --report)",
            warnings.len() - DETAIL_LIMIT
        );
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 3 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
