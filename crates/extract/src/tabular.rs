use calamine::{open_workbook_auto, Data, Reader};
use docdeck_common::{DocDeckError, Result};
use std::path::Path;
use tracing::debug;

/// Column separator used by the table renderer
const COLUMN_GAP: &str = "  ";

/// Read a CSV file and render it as an aligned text table
pub fn extract_csv(path: &Path) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| DocDeckError::extraction(format!("Failed to open CSV: {}", e)))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| DocDeckError::extraction(format!("Failed to parse CSV: {}", e)))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    if rows.is_empty() {
        return Err(DocDeckError::extraction("No columns to parse from file"));
    }

    debug!("Parsed CSV - Rows: {}", rows.len());
    Ok(render_table(&rows))
}

/// Read the first worksheet of an Excel workbook and render it as a text table
pub fn extract_excel(path: &Path) -> Result<String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| DocDeckError::extraction(format!("Failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DocDeckError::extraction("Workbook has no worksheets"))?
        .map_err(|e| DocDeckError::extraction(format!("Failed to read worksheet: {}", e)))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    debug!("Parsed worksheet - Rows: {}", rows.len());
    Ok(render_table(&rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Render rows as a left-aligned, whitespace-padded table.
///
/// The first row is treated like any other; callers pass the header first.
/// Short rows are padded with blank cells. Trailing spaces are trimmed.
pub fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let mut line = String::new();
            for (i, width) in widths.iter().enumerate() {
                if i > 0 {
                    line.push_str(COLUMN_GAP);
                }
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(cell);
                let pad = width - cell.chars().count();
                line.extend(std::iter::repeat(' ').take(pad));
            }
            line.trim_end().to_string()
        })
        .collect();

    lines.join("\n")
}
