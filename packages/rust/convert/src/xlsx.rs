//! XLSX workbooks as one Markdown table per sheet.

use std::fmt::Display;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, XlsxError, open_workbook};
use files2md_markdown::{heading, markdown_table};
use files2md_shared::{Body, ConversionError};
use tracing::{debug, warn};

/// Rendered in place of a table for a sheet with no cells.
pub(crate) const EMPTY_SHEET: &str = "(empty sheet)";

/// Open the workbook and render every sheet in workbook order.
pub(crate) fn convert_xlsx(path: &Path, sheet_level: u8) -> Result<Body, ConversionError> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: XlsxError| ConversionError::Spreadsheet(e.to_string()))?;

    let names = workbook.sheet_names();
    debug!(sheets = names.len(), "opened workbook");

    let sheets = names.into_iter().map(|name| {
        let range = workbook.worksheet_range(&name);
        if let Err(e) = &range {
            warn!(sheet = %name, error = %e, "failed to read sheet");
        }
        (name, range)
    });

    Ok(Body(render_sheets(sheets, sheet_level)))
}

/// One headed section per sheet, separated by blank lines.
pub(crate) fn render_sheets<E: Display>(
    sheets: impl IntoIterator<Item = (String, Result<Range<Data>, E>)>,
    sheet_level: u8,
) -> String {
    let sections: Vec<String> = sheets
        .into_iter()
        .map(|(name, range)| {
            let body = match range {
                Ok(range) => render_sheet(&range),
                Err(e) => format!("(failed to read sheet: {e})"),
            };
            format!("{}\n\n{body}", heading(sheet_level, &format!("Sheet: {name}")))
        })
        .collect();

    if sections.is_empty() {
        return "(workbook has no sheets)".to_string();
    }
    sections.join("\n\n")
}

/// First row is the header; the rest are data rows.
pub(crate) fn render_sheet(range: &Range<Data>) -> String {
    let mut rows = range.rows();
    let Some(first) = rows.next().filter(|_| !range.is_empty()) else {
        return EMPTY_SHEET.to_string();
    };

    let header: Vec<String> = first
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell.to_string() {
            name if name.trim().is_empty() => format!("Unnamed: {i}"),
            name => name,
        })
        .collect();

    let data: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    markdown_table(&header, &data).trim_end().to_string()
}
