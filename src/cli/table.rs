//! Boxed ASCII table rendering.

use std::io::Write;

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{Cell, Table, TableComponent};

/// Renders headers and rows as a ruled table.
///
/// ```text
/// +---------+------------+
/// | Referer | User agent |
/// +---------+------------+
/// | foo     | bar        |
/// +---------+------------+
/// ```
///
/// Columns are as wide as their widest cell, measured in terminal display
/// width. Rows are trusted to carry one cell per header, in header order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Writes the table to `out`. Nothing is written when there are no headers.
    pub fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
        headers: &[String],
        rows: &[Vec<String>],
    ) -> std::io::Result<()> {
        if headers.is_empty() {
            return Ok(());
        }

        let mut table = boxed_table();
        table.set_header(headers.iter().map(Cell::new));
        for row in rows {
            table.add_row(row.iter().map(Cell::new));
        }

        // A header-only table would otherwise close with two identical rules.
        let mut previous: Option<String> = None;
        for line in table.lines() {
            if line.starts_with('+') && previous.as_deref() == Some(line.as_str()) {
                continue;
            }
            writeln!(out, "{line}")?;
            previous = Some(line);
        }
        out.flush()
    }
}

/// `+---+` rules around the table and under the header, none between rows.
fn boxed_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_style(TableComponent::HeaderLines, '-')
        .set_style(TableComponent::LeftHeaderIntersection, '+')
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_style(TableComponent::RightHeaderIntersection, '+')
        .remove_style(TableComponent::HorizontalLines)
        .remove_style(TableComponent::MiddleIntersections)
        .remove_style(TableComponent::LeftBorderIntersections)
        .remove_style(TableComponent::RightBorderIntersections);
    table
}
