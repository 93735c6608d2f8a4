//! Asset records and the metrics ranking reads from them.
//!
//! The catalog delivers assets with most fields optional. This module
//! owns the record types and the defaulting rules that turn them into
//! comparable numbers:
//!
//! - **Area**: `width * height`, 0 if either side is absent or not positive.
//! - **MIME rank**: position in an explicit preference list, with every
//!   unlisted or missing type sharing the lowest rank.
//! - **File size**: bytes, 0 if absent or negative.
//! - **Metadata richness**: populated-field count, delegated to a
//!   [`MetadataCounter`].

#[cfg(feature = "serde")]
mod lenient;
mod metadata;
mod metrics;
mod types;

pub use metadata::{MetadataCounter, PopulatedFieldCount};
pub use metrics::{file_size, image_area, MimePriority, DEFAULT_MIME_PRIORITY};
pub use types::{Asset, ExifInfo};
