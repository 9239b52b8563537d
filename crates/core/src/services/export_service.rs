use chrono::NaiveDate;
use serde::Serialize;

use crate::format::{format_pnl, format_price};
use crate::models::position::Position;

pub const CSV_HEADER: [&str; 5] = ["Symbol", "Qty", "Price", "P&L", "Type"];

/// A ready-to-download CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionsExport {
    /// `positions_<YYYY-MM-DD>.csv`
    pub filename: String,
    pub contents: String,
}

/// Exports positions exactly as the table displays them.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Header plus one row per position. Every field is double-quoted with
    /// inner quotes doubled; lines are joined by `\n` with no trailing newline.
    #[must_use]
    pub fn positions_csv(&self, positions: &[Position]) -> String {
        let mut lines = Vec::with_capacity(positions.len() + 1);
        lines.push(csv_line(CSV_HEADER));
        for p in positions {
            lines.push(csv_line([
                p.symbol.clone(),
                p.quantity.to_string(),
                format_price(p.price),
                format_pnl(p.pnl),
                p.instrument.to_string(),
            ]));
        }
        lines.join("\n")
    }

    #[must_use]
    pub fn filename(&self, date: NaiveDate) -> String {
        format!("positions_{}.csv", date.format("%Y-%m-%d"))
    }

    #[must_use]
    pub fn export_positions(&self, positions: &[Position], date: NaiveDate) -> PositionsExport {
        PositionsExport {
            filename: self.filename(date),
            contents: self.positions_csv(positions),
        }
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_line<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| csv_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
