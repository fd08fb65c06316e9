use crate::core::receipt_line::parse_receipt_line;
use crate::domain::model::{Receipt, SalesSummary};
use crate::utils::error::{ReceiptError, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::BufRead;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl SummaryFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for SummaryFormat {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ReceiptError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    product: &'a str,
    total_quantity: u64,
    receipt_count: usize,
}

impl SalesSummary {
    pub fn from_receipts<'a, I>(receipts: I) -> Self
    where
        I: IntoIterator<Item = &'a Receipt>,
    {
        let mut summary = SalesSummary::default();
        for receipt in receipts {
            summary.add_receipt(receipt);
        }
        summary
    }

    /// Aggregates a receipts file. Malformed lines, including lines that are
    /// not valid UTF-8, are logged and skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut summary = SalesSummary::default();
        let mut skipped = 0usize;

        for raw in reader.split(b'\n') {
            let raw = raw?;
            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Skipping line that is not valid UTF-8: {}", e.utf8_error());
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_receipt_line(&line) {
                Ok(receipt) => summary.add_receipt(&receipt),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Skipping line: {}", e);
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} malformed lines", skipped);
        }

        Ok(summary)
    }

    pub fn add_receipt(&mut self, receipt: &Receipt) {
        self.receipt_count += 1;

        for item in &receipt.items {
            let sales = self.products.entry(item.name.clone()).or_default();
            sales.total_quantity += u64::from(item.quantity);
            sales.occurrences.push((receipt.id, item.price));
            self.line_item_count += 1;
        }
    }

    pub fn total_quantity(&self) -> u64 {
        self.products.values().map(|s| s.total_quantity).sum()
    }

    pub fn render(&self, format: SummaryFormat) -> Result<String> {
        match format {
            SummaryFormat::Text => Ok(self.to_text()),
            SummaryFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            SummaryFormat::Csv => self.to_csv(),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Receipts: {}, line items: {}, units sold: {}",
            self.receipt_count,
            self.line_item_count,
            self.total_quantity()
        );

        for (name, sales) in &self.products {
            let _ = writeln!(out, "Product: {}, total quantity sold: {}", name, sales.total_quantity);
            for (receipt_id, price) in &sales.occurrences {
                let _ = writeln!(out, " - receipt {}, price {}", receipt_id, price);
            }
        }

        out
    }

    fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for (name, sales) in &self.products {
            writer.serialize(CsvRow {
                product: name,
                total_quantity: sales.total_quantity,
                receipt_count: sales.occurrences.len(),
            })?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| ReceiptError::IoError(e.into_error()))?;
        String::from_utf8(data)
            .map_err(|e| ReceiptError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
