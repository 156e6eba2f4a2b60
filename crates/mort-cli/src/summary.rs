use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mort_transform::AggregationReport;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Records"),
        header_cell("Groups"),
        header_cell("Deaths"),
        header_cell("No country"),
        header_cell("No cause"),
        header_cell("No sex"),
        header_cell("Unknown List"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=7 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total = AggregationReport::default();
    for input in &result.inputs {
        total.merge(&input.report);
        let name = input
            .path
            .file_name()
            .map_or_else(|| input.path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let mut row = vec![Cell::new(name).fg(Color::Cyan)];
        row.extend(report_cells(&input.report));
        table.add_row(row);
    }
    if result.inputs.len() > 1 {
        let mut row = vec![
            Cell::new("Total")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(
            report_cells(&total)
                .into_iter()
                .map(|cell| cell.add_attribute(Attribute::Bold)),
        );
        table.add_row(row);
    }
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Failed inputs:");
        for error in &result.errors {
            eprintln!("  - {error}");
        }
    }
}

fn report_cells(report: &AggregationReport) -> Vec<Cell> {
    vec![
        Cell::new(report.records),
        Cell::new(report.groups),
        Cell::new(report.deaths),
        count_cell(report.unresolved_countries, Color::Yellow),
        count_cell(report.unresolved_causes, Color::Yellow),
        count_cell(report.unresolved_sexes, Color::Yellow),
        count_cell(report.unknown_schemes, Color::Red),
    ]
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
