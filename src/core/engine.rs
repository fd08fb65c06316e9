use crate::core::generator::ReceiptGenerator;
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::io::Write;

/// Destination file, relative to the storage base directory.
pub const OUTPUT_FILE: &str = "receiptsmini.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: String,
    pub receipts_written: u32,
}

/// The completion message printed once the file is written.
impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File {} with {} receipts created successfully!",
            self.output_path, self.receipts_written
        )
    }
}

pub struct GenerationEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    generator: ReceiptGenerator,
}

impl<S: Storage, C: ConfigProvider> GenerationEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_generator(storage, config, ReceiptGenerator::default())
    }

    pub fn with_generator(storage: S, config: C, generator: ReceiptGenerator) -> Self {
        Self {
            storage,
            config,
            generator,
        }
    }

    pub fn run(&self) -> Result<GenerationReport> {
        let mut rng = match self.config.seed() {
            Some(seed) => {
                tracing::info!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                tracing::debug!("Seeding RNG from OS entropy");
                StdRng::from_entropy()
            }
        };

        tracing::info!(
            "Generating {} receipts from a catalog of {} products",
            self.generator.receipt_count(),
            self.generator.catalog().len()
        );

        let receipts_written = {
            let mut writer = self.storage.open_writer(OUTPUT_FILE)?;
            let written = self.generator.write_receipts(&mut writer, &mut rng)?;
            writer.flush()?;
            written
        };

        tracing::debug!("Closed {}", OUTPUT_FILE);

        Ok(GenerationReport {
            output_path: OUTPUT_FILE.to_string(),
            receipts_written,
        })
    }
}
