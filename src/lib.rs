pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::decoder::JsonMatchDecoder;
pub use crate::adapters::server;
pub use crate::config::CliConfig;
pub use crate::core::pipeline::{summarize, SummaryPipeline};
pub use crate::domain::model::{MatchRecord, SummaryDocument};
pub use crate::utils::error::{Result, SummaryError};
