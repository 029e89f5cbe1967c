pub mod barcode;
pub mod encoder;
pub mod names;
pub mod rank;
pub mod words;

pub use crate::domain::model::{Barcode, BatchConversion, ConversionResult, Rank, WordList};
pub use crate::utils::error::Result;
