// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date;
use crate::export::model::{get_headers, shift_to_row};
use crate::export::{ShiftExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// How a column is written into the sheet.
#[derive(Clone, Copy)]
enum CellKind {
    Date,
    Time,
    Number,
    Text,
}

const COLUMN_KINDS: [CellKind; 5] = [
    CellKind::Date,
    CellKind::Time,
    CellKind::Text,
    CellKind::Number,
    CellKind::Text,
];

/// Export XLSX with banded rows, typed cells and auto column widths.
pub(crate) fn export_xlsx(shifts: &[ShiftExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if shifts.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

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
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, shift) in shifts.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in shift_to_row(shift).iter().enumerate() {
            write_cell(worksheet, row, col as u16, COLUMN_KINDS[col], value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    kind: CellKind,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let numeric = match kind {
        CellKind::Date => excel_date::parse_date(s).map(|v| (v, base.clone().set_num_format("yyyy-mm-dd"))),
        CellKind::Time => excel_date::parse_time(s).map(|v| (v, base.clone().set_num_format("hh:mm"))),
        CellKind::Number => s
            .parse::<f64>()
            .ok()
            .map(|v| (v, base.clone().set_align(FormatAlign::Right))),
        CellKind::Text => None,
    };

    match numeric {
        Some((value, fmt)) => worksheet.write_with_format(row, col, value, &fmt),
        None => worksheet.write_with_format(row, col, s, &base),
    }
    .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
