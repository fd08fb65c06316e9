pub mod catalog;
pub mod engine;
pub mod generator;
pub mod receipt_line;
pub mod summary;

pub use crate::domain::model::{LineItem, Price, Product, Receipt, SalesSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
