pub mod identity;
pub mod merge;
pub mod pipeline;
pub mod select;
pub mod summary;
pub mod tags;

pub use crate::domain::model::{Elimination, KillFeedEntry, MatchRecord, SummaryDocument};
pub use crate::domain::ports::ReplayDecoder;
pub use crate::utils::error::Result;
