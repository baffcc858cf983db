use crate::domain::model::MatchRecord;
use crate::domain::ports::ReplayDecoder;
use crate::utils::error::{Result, SummaryError};
use async_trait::async_trait;
use std::path::Path;

/// Reads the decoded-match JSON export produced by the external replay
/// reader. Unknown fields are ignored so the export can carry more than
/// this crate consumes.
#[derive(Debug, Clone, Default)]
pub struct JsonMatchDecoder;

impl JsonMatchDecoder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReplayDecoder for JsonMatchDecoder {
    async fn decode(&self, path: &Path) -> Result<MatchRecord> {
        let bytes = tokio::fs::read(path).await?;
        serde_json::from_slice(&bytes).map_err(|err| SummaryError::DecodeError {
            message: format!("not a decoded match record: {}", err),
        })
    }
}
