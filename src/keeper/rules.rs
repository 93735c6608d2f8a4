//! The four keep rules, in the order the ranker applies them.
//!
//! Each rule maps one asset metric to a [`Score`]; larger metrics are
//! negated so that the engine's lower-is-better convention holds.

use crate::asset::{file_size, image_area, Asset, MetadataCounter, MimePriority};
use crate::ranking::{PriorityRule, Score};

/// Largest pixel area first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageArea;

impl PriorityRule<Asset, ()> for ImageArea {
    fn name(&self) -> &str {
        "ImageArea"
    }

    fn score(&self, asset: &Asset, _ctx: &()) -> Score {
        // area < 2^126, always representable
        -(image_area(asset) as Score)
    }
}

/// Preferred MIME types first. Rank is already lower-is-better.
#[derive(Debug, Clone, Default)]
pub struct MimeTypePriority {
    priority: MimePriority,
}

impl MimeTypePriority {
    pub fn new(priority: MimePriority) -> Self {
        Self { priority }
    }
}

impl PriorityRule<Asset, ()> for MimeTypePriority {
    fn name(&self) -> &str {
        "MimeTypePriority"
    }

    fn score(&self, asset: &Asset, _ctx: &()) -> Score {
        self.priority.rank_of(asset) as Score
    }
}

/// Largest original file first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSize;

impl PriorityRule<Asset, ()> for FileSize {
    fn name(&self) -> &str {
        "FileSize"
    }

    fn score(&self, asset: &Asset, _ctx: &()) -> Score {
        -(file_size(asset) as Score)
    }
}

/// Most populated metadata fields first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataRichness<M> {
    counter: M,
}

impl<M: MetadataCounter> MetadataRichness<M> {
    pub fn new(counter: M) -> Self {
        Self { counter }
    }
}

impl<M: MetadataCounter> PriorityRule<Asset, ()> for MetadataRichness<M> {
    fn name(&self) -> &str {
        "MetadataRichness"
    }

    fn score(&self, asset: &Asset, _ctx: &()) -> Score {
        -(self.counter.count(asset) as Score)
    }
}
