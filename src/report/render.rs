// src/report/render.rs

use crate::errors::AppResult;
use crate::models::{Identity, OutputFormat, ReportColumn, ReportSchema};
use crate::report::aggregate::{DayRow, UserBlock};
use crate::ui::messages::warning;
use crate::utils::sanitize_cell;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Image, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

pub const SHEET_NAME: &str = "Report";

/// Column where the company logo is anchored (H).
const LOGO_COLUMN: u16 = 7;
const LOGO_SCALE: f64 = 0.5;

const DAY_COL_MIN_WIDTH: usize = 30;
const DETAIL_COL_MIN_WIDTH: usize = 15;
const MAX_COL_WIDTH: usize = 50;

/// Header metadata written above the user blocks.
#[derive(Debug, Clone)]
pub struct ReportHeader<'a> {
    pub identity: &'a Identity,
    pub projects: &'a [String],
    pub customers: &'a [String],
    pub period: &'a str,
}

struct Formats {
    header: Format,
    cell: Format,
    duration: Format,
    total_label: Format,
    total_value: Format,
}

impl Formats {
    fn new(output: OutputFormat) -> Self {
        let header = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(0x4472C4))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        let cell = Format::new().set_border(FormatBorder::Thin);

        let duration = Format::new()
            .set_num_format(output.num_format())
            .set_border(FormatBorder::Thin);

        let total_label = Format::new()
            .set_bold()
            .set_background_color(Color::Yellow)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        let total_value = total_label.clone().set_num_format(output.num_format());

        Self {
            header,
            cell,
            duration,
            total_label,
            total_value,
        }
    }
}

/// Writer context: owns the worksheet, the formats and the row cursor.
/// Bytes only exist after `finish()` succeeds.
pub struct ReportWriter {
    worksheet: Worksheet,
    formats: Formats,
    columns: Vec<ReportColumn>,
    row: u32,
    col_widths: Vec<usize>,
}

impl ReportWriter {
    pub fn new(schema: ReportSchema, output: OutputFormat) -> AppResult<Self> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(SHEET_NAME)?;

        let columns = schema.visible_columns();
        let col_widths = columns
            .iter()
            .map(|c| match c {
                ReportColumn::Day => DAY_COL_MIN_WIDTH,
                _ => DETAIL_COL_MIN_WIDTH,
            })
            .collect();

        Ok(Self {
            worksheet,
            formats: Formats::new(output),
            columns,
            row: 0,
            col_widths,
        })
    }

    /// Identity line, optional logo, then projects / customers / period.
    pub fn write_header(&mut self, header: &ReportHeader<'_>) -> AppResult<()> {
        let identity = header.identity.header_line();
        self.write_text(0, &identity, CellStyle::Header)?;

        if let Some(logo) = header.identity.logo() {
            // A broken logo must not sink the report.
            let inserted = Image::new_from_buffer(&logo.data).and_then(|image| {
                let image = image
                    .set_scale_width(LOGO_SCALE)
                    .set_scale_height(LOGO_SCALE);
                self.worksheet
                    .insert_image(self.row, LOGO_COLUMN, &image)
                    .map(|_| ())
            });
            if let Err(e) = inserted {
                warning(format!("Logo ({}) not embedded: {e}", logo.mime_type));
            }
        }
        self.row += 1;

        for line in [
            format!("Projects: {}", join_sanitized(header.projects, ", ")),
            format!("Customers: {}", join_sanitized(header.customers, ", ")),
            format!("Period: {}", header.period),
        ] {
            self.write_text(0, &line, CellStyle::Cell)?;
            self.row += 1;
        }

        self.row += 1;
        Ok(())
    }

    /// User title, column headers, one row per day and the total row.
    pub fn write_user_block(&mut self, block: &UserBlock) -> AppResult<()> {
        let title = format!("User: {}", sanitize_cell(&block.user));
        self.write_text(0, &title, CellStyle::Header)?;
        self.row += 1;

        for (col, column) in self.columns.clone().iter().enumerate() {
            self.write_text(col as u16, column.title(), CellStyle::Header)?;
        }
        self.row += 1;

        for day in &block.days {
            self.write_day_row(day)?;
            self.row += 1;
        }

        self.write_total_row(block)?;
        self.row += 2;
        Ok(())
    }

    fn write_day_row(&mut self, day: &DayRow) -> AppResult<()> {
        for (col, column) in self.columns.clone().iter().enumerate() {
            let col = col as u16;
            match column {
                ReportColumn::Day => self.write_text(col, &day.label, CellStyle::Cell)?,
                ReportColumn::TotalDuration | ReportColumn::Duration => {
                    self.worksheet.write_number_with_format(
                        self.row,
                        col,
                        day.duration,
                        &self.formats.duration,
                    )?;
                }
                ReportColumn::Projects | ReportColumn::Project => {
                    self.write_text(col, &join_sanitized(&day.projects, ", "), CellStyle::Cell)?
                }
                ReportColumn::Descriptions | ReportColumn::Description => {
                    self.write_text(col, &join_sanitized(&day.descriptions, "; "), CellStyle::Cell)?
                }
                ReportColumn::BillableStatus => {
                    self.write_text(col, day.billable.as_str(), CellStyle::Cell)?
                }
            }
        }
        Ok(())
    }

    fn write_total_row(&mut self, block: &UserBlock) -> AppResult<()> {
        let label_col = self.position(ReportColumn::Day).unwrap_or(0);
        let value_col = self
            .columns
            .iter()
            .position(ReportColumn::is_duration)
            .unwrap_or(1) as u16;

        self.worksheet.write_string_with_format(
            self.row,
            label_col,
            "TOTAL",
            &self.formats.total_label,
        )?;
        self.worksheet.write_number_with_format(
            self.row,
            value_col,
            block.total,
            &self.formats.total_value,
        )?;
        Ok(())
    }

    fn position(&self, column: ReportColumn) -> Option<u16> {
        self.columns
            .iter()
            .position(|c| *c == column)
            .map(|p| p as u16)
    }

    /// Sanitise, write and track the width of a text cell.
    fn write_text(&mut self, col: u16, value: &str, style: CellStyle) -> AppResult<()> {
        let value = sanitize_cell(value);
        let format = match style {
            CellStyle::Header => &self.formats.header,
            CellStyle::Cell => &self.formats.cell,
        };
        self.worksheet
            .write_string_with_format(self.row, col, &value, format)?;

        if let Some(w) = self.col_widths.get_mut(col as usize) {
            let len = value.width();
            if len > *w {
                *w = (len + 2).min(MAX_COL_WIDTH);
            }
        }
        Ok(())
    }

    /// Apply column widths and serialise the workbook into memory.
    pub fn finish(mut self) -> AppResult<Vec<u8>> {
        for (col, width) in self.col_widths.iter().enumerate() {
            self.worksheet.set_column_width(col as u16, *width as f64)?;
        }

        let mut workbook = Workbook::new();
        workbook.push_worksheet(self.worksheet);
        Ok(workbook.save_to_buffer()?)
    }
}

/// Sanitise every item, so a formula-like value is neutralised even when it
/// is not the first thing in the cell.
fn join_sanitized(values: &[String], sep: &str) -> String {
    values
        .iter()
        .map(|v| sanitize_cell(v))
        .collect::<Vec<_>>()
        .join(sep)
}

#[derive(Clone, Copy)]
enum CellStyle {
    Header,
    Cell,
}

/// Render the complete report in one go.
pub fn render_report(
    schema: ReportSchema,
    output: OutputFormat,
    header: &ReportHeader<'_>,
    blocks: &[UserBlock],
) -> AppResult<Vec<u8>> {
    let mut writer = ReportWriter::new(schema, output)?;
    writer.write_header(header)?;
    for block in blocks {
        writer.write_user_block(block)?;
    }
    writer.finish()
}
