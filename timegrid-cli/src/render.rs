//! Terminal output

use comfy_table::Cell;
use comfy_table::CellAlignment;
use comfy_table::ContentArrangement;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use timegrid_lib::Table;
use timegrid_lib::model::Align;

/// Renders the visible rows. The active sort column is marked in its header.
pub fn render_table(table: &Table) -> comfy_table::Table {
    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let sort_column = table.current_sort_column();
    out.set_header(table.headers().iter().map(|header| {
        if sort_column == Some(header.column()) {
            Cell::new(format!("{} {}", header.label(), sort_marker(table)))
        } else {
            Cell::new(header.label())
        }
    }));

    for row in table.visible_rows() {
        out.add_row(row.cells().iter().map(|cell| {
            let text = cell.value().formatted();
            if cell.header().is_multiline() {
                Cell::new(text)
            } else {
                Cell::new(text.replace('\n', " "))
            }
        }));
    }

    for (index, header) in table.headers().iter().enumerate() {
        if let (Some(align), Some(column)) = (header.align(), out.column_mut(index)) {
            column.set_cell_alignment(cell_alignment(align));
        }
    }

    out
}

/// One-line summary of the page and sort state.
pub fn status_line(table: &Table) -> String {
    let mut parts = Vec::new();
    if let (Some(page), Some(count)) = (table.current_page(), table.page_count()) {
        parts.push(format!("page {} of {}", page, count));
    }
    parts.push(format!(
        "showing {} of {} rows",
        table.visible_row_count(),
        table.total_row_count()
    ));
    if let Some(column) = table.current_sort_column() {
        let direction = if table.is_current_sort_inverted() {
            "inverted"
        } else {
            "baseline"
        };
        parts.push(format!("sorted by {} ({})", column, direction));
    }
    parts.join(", ")
}

fn sort_marker(table: &Table) -> &'static str {
    if table.is_current_sort_inverted() { "▲" } else { "▼" }
}

fn cell_alignment(align: Align) -> CellAlignment {
    match align {
        Align::Left => CellAlignment::Left,
        Align::Center => CellAlignment::Center,
        Align::Right => CellAlignment::Right,
    }
}

#[cfg(test)]
mod tests {
    use timegrid_lib::model::ColumnType;
    use timegrid_lib::model::Record;
    use timegrid_lib::model::SchemaEntry;
    use timegrid_lib::table::Pagination;
    use timegrid_lib::table::TableOptions;

    use super::*;

    fn table() -> Table {
        let schema = vec![
            SchemaEntry::new("task", "Task", ColumnType::String),
            SchemaEntry::new("hours", "Hours", ColumnType::Number).with_align(Align::Right),
        ];
        let data = (1..=12)
            .map(|i| Record::new().set("task", format!("task {i}")).set("hours", i))
            .collect();
        Table::new(
            data,
            schema,
            TableOptions::new().with_pagination(Pagination::new(5)),
        )
    }

    #[test]
    fn test_status_line() {
        let table = table().turn_page(3).sort_by("hours", None).unwrap();
        assert_eq!(
            status_line(&table),
            "page 3 of 3, showing 2 of 12 rows, sorted by hours (baseline)"
        );
    }

    #[test]
    fn test_status_line_without_pagination() {
        let schema = vec![SchemaEntry::new("task", "Task", ColumnType::String)];
        let table = Table::new(vec![Record::new()], schema, TableOptions::new());
        assert_eq!(status_line(&table), "showing 1 of 1 rows");
    }

    #[test]
    fn test_render_visible_rows_only() {
        let rendered = render_table(&table().sort_by("hours", Some(true)).unwrap()).to_string();
        assert!(rendered.contains("Hours ▲"));
        assert!(rendered.contains("task 5"));
        assert!(!rendered.contains("task 6"));
    }
}
