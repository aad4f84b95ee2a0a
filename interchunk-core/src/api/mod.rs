//! Conversion API
//!
//! Ties extraction, decoding and encoding together for whole documents and
//! is the entry point used by the CLI.

mod config;
mod converter;
mod stats;

pub use config::{Config, ConfigBuilder};
pub use converter::{ConvertedDocument, Converter};
pub use stats::ConversionStats;
