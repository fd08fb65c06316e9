pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{
    catalog::Catalog,
    engine::{GenerationEngine, GenerationReport, OUTPUT_FILE},
    generator::{ReceiptGenerator, RECEIPT_COUNT},
    receipt_line::{format_receipt_line, parse_receipt_line},
    summary::SummaryFormat,
};
pub use domain::model::{LineItem, Price, Product, Receipt, SalesSummary};
pub use utils::error::{ReceiptError, Result};
