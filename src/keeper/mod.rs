//! Keep-candidate selection for duplicate groups.
//!
//! Given assets already judged to be duplicates of one another, picks the
//! one to keep. Selection is a single pass over the group under four
//! cascading rules (area, MIME preference, file size, metadata richness),
//! with input order as the final tie-break.
//!
//! Nothing here mutates, persists or deletes: the result is a reference
//! into the caller's group.

mod config;
mod ranker;
mod rules;

#[cfg(test)]
mod proptests;

pub use config::{ConfigError, KeeperConfig};
pub use ranker::{select_best, AssetRanker};
pub use rules::{FileSize, ImageArea, MetadataRichness, MimeTypePriority};
