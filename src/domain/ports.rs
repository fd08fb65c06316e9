use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub trait Storage {
    type Writer: Write;
    type Reader: BufRead;

    /// Opens `path` for writing, truncating any existing content.
    fn open_writer(&self, path: &str) -> Result<Self::Writer>;

    fn open_reader(&self, path: &str) -> Result<Self::Reader>;
}

pub trait ConfigProvider {
    /// Fixed RNG seed; `None` means seed from OS entropy.
    fn seed(&self) -> Option<u64>;
    fn verbose(&self) -> bool;
}
