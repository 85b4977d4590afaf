// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::naive_datetime_to_excel_serial;
use crate::export::model::{Cell, headers, table_to_rows};
use crate::export::notify_export_success;
use crate::models::SessionTable;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Widest column we auto-size to; long domain lists would otherwise explode.
const MAX_COL_WIDTH: usize = 60;

/// Export sessions to XLSX with a styled header, banded rows and
/// auto-sized columns.
pub(crate) fn export_xlsx(table: &SessionTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("sessions")?;

    if table.is_empty() {
        worksheet.write(0, 0, "No data available")?;
        workbook.save(path_str(path)?)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = headers(table);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, cells) in table_to_rows(table).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;
            let width = UnicodeWidthStr::width(cell.to_text().as_str());
            col_widths[col] = col_widths[col].max(width);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, (*w).min(MAX_COL_WIDTH) as f64 + 2.0)?;
    }

    workbook.save(path_str(path)?)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_xlsx_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Timestamp(ts) => {
            let fmt = base.set_num_format("yyyy-mm-dd hh:mm:ss");
            worksheet.write_with_format(row, col, naive_datetime_to_excel_serial(ts), &fmt)?;
        }
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)?;
        }
        Cell::Text(s) => {
            worksheet.write_with_format(row, col, s.as_str(), &base)?;
        }
    }

    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
