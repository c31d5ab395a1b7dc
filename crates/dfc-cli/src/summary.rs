use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dfc_cli::pipeline::CleanRunResult;
use dfc_model::IssueKind;

pub fn print_run_summary(result: &CleanRunResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.clean_csv {
        println!("Clean table: {}", path.display());
    }
    if let Some(path) = &result.summary_json {
        println!("Summary: {}", path.display());
    }
    println!(
        "Rows: {} ({} flagged)",
        result.rows, result.quality.flagged_rows
    );

    print_size_table(result);
    print_state_table(result);
    print_issue_table(result);
    print_inspection_line(result);
}

fn print_size_table(result: &CleanRunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Facility size"),
        header_cell("Facilities"),
        header_cell("Share"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for bucket in &result.summary.sizes {
        let count_cell = if bucket.facilities == 0 {
            dim_cell(bucket.facilities)
        } else {
            Cell::new(bucket.facilities)
        };
        table.add_row(vec![
            Cell::new(&bucket.label),
            count_cell,
            Cell::new(format!("{:.1}%", bucket.share_pct)),
        ]);
    }
    println!();
    println!("Facility sizes:");
    println!("{table}");
}

fn print_state_table(result: &CleanRunResult) {
    if result.summary.states.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("State"),
        header_cell("Facilities"),
        header_cell("Population"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for aggregate in &result.summary.states {
        table.add_row(vec![
            Cell::new(&aggregate.state),
            Cell::new(aggregate.facilities),
            Cell::new(format!("{:.2}", aggregate.total_population)),
        ]);
    }
    println!();
    println!("States:");
    println!("{table}");
}

fn print_issue_table(result: &CleanRunResult) {
    if !result.quality.has_issues() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Count")]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for issue in &result.quality.issues {
        table.add_row(vec![
            Cell::new(issue.kind.as_str()),
            issue_count_cell(issue.kind, issue.count),
        ]);
    }
    println!();
    println!("Data quality issues:");
    println!("{table}");
}

fn print_inspection_line(result: &CleanRunResult) {
    let aging = &result.summary.inspections;
    println!();
    match (aging.mean_days, aging.median_days) {
        (Some(mean), Some(median)) => println!(
            "Inspections as of {}: {} dated, {} unparseable, age {:.0}/{:.0} days (mean/median)",
            result.summary.as_of, aging.parsed, aging.unparseable, mean, median
        ),
        _ => println!(
            "Inspections as of {}: no parseable dates ({} unparseable)",
            result.summary.as_of, aging.unparseable
        ),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn issue_count_cell(kind: IssueKind, count: u64) -> Cell {
    let color = match kind {
        IssueKind::InvalidState => Color::Red,
        IssueKind::ZeroFilledCount | IssueKind::UnparseableDate => Color::Yellow,
    };
    Cell::new(count).fg(color).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
