use crate::domain::model::MatchRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Seam to the external replay-reading component. Binary replay decoding
/// is not this crate's concern; anything that can produce a decoded
/// `MatchRecord` from a file plugs in here.
#[async_trait]
pub trait ReplayDecoder: Send + Sync {
    async fn decode(&self, path: &Path) -> Result<MatchRecord>;
}
