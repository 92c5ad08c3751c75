// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{EXCEL_DATETIME_FORMAT, naive_datetime_to_excel_serial};
use crate::export::model::{get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::models::TrajectoryRow;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const COL_WEEKDAY: usize = 2;
const COL_TIMESTAMP: usize = 4;

/// Export XLSX with header styling, banded rows and auto column widths.
/// An empty dataset still gets the header row.
pub(crate) fn export_xlsx(rows: &[TrajectoryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("trajectories")?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in row_to_cells(r).iter().enumerate() {
            match col {
                COL_TIMESTAMP => write_datetime(worksheet, row, col as u16, r, band)?,
                COL_WEEKDAY => write_number(worksheet, row, col as u16, r.weekday as f64, band)?,
                _ => write_text(worksheet, row, col as u16, value, band)?,
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_datetime(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    r: &TrajectoryRow,
    bg: Color,
) -> AppResult<()> {
    let fmt = cell_format(bg).set_num_format(EXCEL_DATETIME_FORMAT);
    let serial = naive_datetime_to_excel_serial(&r.timestamp);
    worksheet.write_with_format(row, col, serial, &fmt)?;
    Ok(())
}

fn write_number(worksheet: &mut Worksheet, row: u32, col: u16, n: f64, bg: Color) -> AppResult<()> {
    let fmt = cell_format(bg).set_align(FormatAlign::Right);
    worksheet.write_with_format(row, col, n, &fmt)?;
    Ok(())
}

fn write_text(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    worksheet.write_with_format(row, col, s, &cell_format(bg))?;
    Ok(())
}
