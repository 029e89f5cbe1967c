pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::{create_router, serve, with_middleware};
pub use app::lookup::{Endpoint, LookupResponse, LookupService, ResponseBody};
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig, CliConfig};
pub use core::encoder::{convert, convert_batch};
pub use domain::model::{Barcode, BatchConversion, ConversionResult, Rank, WordList};
pub use utils::error::{BarcodeError, Result};
