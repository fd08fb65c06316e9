use crate::core::catalog::Catalog;
use crate::core::receipt_line::format_receipt_line;
use crate::domain::model::{LineItem, Receipt};
use crate::utils::error::Result;
use rand::Rng;
use std::io::Write;
use std::ops::RangeInclusive;

/// Number of receipts written per run.
pub const RECEIPT_COUNT: u32 = 100;
pub const ITEMS_PER_RECEIPT: RangeInclusive<usize> = 1..=5;
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=10;

pub struct ReceiptGenerator {
    catalog: Catalog,
    receipt_count: u32,
}

impl ReceiptGenerator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            receipt_count: RECEIPT_COUNT,
        }
    }

    /// Generator with a custom receipt count, used by tests.
    pub fn with_receipt_count(catalog: Catalog, receipt_count: u32) -> Self {
        Self {
            catalog,
            receipt_count,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn receipt_count(&self) -> u32 {
        self.receipt_count
    }

    pub fn generate_receipt<R: Rng + ?Sized>(&self, id: u32, rng: &mut R) -> Receipt {
        let item_count = rng.gen_range(ITEMS_PER_RECEIPT);

        let items = (0..item_count)
            .map(|_| {
                let product = self.catalog.choose(rng);
                let quantity = rng.gen_range(QUANTITY_RANGE);
                LineItem::new(product, quantity)
            })
            .collect();

        Receipt { id, items }
    }

    /// Writes receipts `1..=receipt_count`, one line each. Every receipt is
    /// dropped once its line is written.
    pub fn write_receipts<W: Write, R: Rng + ?Sized>(&self, writer: &mut W, rng: &mut R) -> Result<u32> {
        for id in 1..=self.receipt_count {
            let receipt = self.generate_receipt(id, rng);
            writeln!(writer, "{}", format_receipt_line(&receipt))?;
            tracing::trace!("Wrote receipt {} with {} items", id, receipt.items.len());
        }

        Ok(self.receipt_count)
    }
}

impl Default for ReceiptGenerator {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}
