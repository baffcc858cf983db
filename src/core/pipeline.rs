//! End-to-end run: decode → merge → select → build, wrapped in the
//! soft-failure contract. Consumers always get a JSON object; `{}` means
//! "nothing to report", never an error.

use crate::core::{merge, select, summary};
use crate::domain::model::{MatchRecord, SummaryDocument};
use crate::domain::ports::ReplayDecoder;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::path::Path;

/// Pure pipeline over an already-decoded match. None when the merged set
/// is empty (no kill feed or every entry filtered out).
pub fn summarize(record: &MatchRecord) -> Option<SummaryDocument> {
    let merged = merge::merge_kill_feed(&record.kill_feed);
    tracing::debug!(
        feed_entries = record.kill_feed.len(),
        merged = merged.len(),
        "merged kill feed"
    );

    let furthest = select::furthest(&merged)?;
    let final_kill = select::final_kill(&merged)?;

    Some(summary::build_summary(record, furthest, final_kill))
}

pub struct SummaryPipeline<D: ReplayDecoder> {
    decoder: D,
}

impl<D: ReplayDecoder> SummaryPipeline<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Runs the pipeline against a record file. Every failure mode
    /// (missing file, decode fault, empty match) collapses to `{}` with
    /// a diagnostic trace; nothing escalates to the caller.
    pub async fn run(&self, path: &Path) -> Value {
        match self.try_run(path).await {
            Ok(Some(document)) => {
                serde_json::to_value(&document).unwrap_or_else(|err| {
                    tracing::error!(%err, "summary document failed to serialize");
                    json!({})
                })
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), "no eliminations to summarize");
                json!({})
            }
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "summary degraded to empty output");
                json!({})
            }
        }
    }

    async fn try_run(&self, path: &Path) -> Result<Option<SummaryDocument>> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "record file does not exist");
            return Ok(None);
        }

        let record = self.decoder.decode(path).await?;
        tracing::debug!(
            players = record.players.len(),
            feed_entries = record.kill_feed.len(),
            "record decoded"
        );

        Ok(summarize(&record))
    }
}
