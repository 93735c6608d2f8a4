//! Keep-candidate selection for groups of duplicate media assets.
//!
//! Given a group of assets that have already been identified as
//! duplicates, suggests the single asset worth keeping:
//!
//! - **Asset model** ([`asset`]): catalog records with optional EXIF
//!   metadata, plus the defaulting rules that turn them into metrics.
//! - **Ranking** ([`ranking`]): a generic sequential rule engine. Later
//!   rules only break ties left by earlier ones, and full ties keep input
//!   order.
//! - **Keeper** ([`keeper`]): the duplicate-keep policy built on the
//!   engine: largest area, then preferred MIME type, then largest file,
//!   then richest metadata.
//!
//! # Architecture
//!
//! Pure, synchronous and stateless. Groups are borrowed, never reordered
//! or copied, and the suggestion is a reference to one of the group's
//! own elements. Duplicate detection, metadata extraction and acting on
//! the suggestion all happen elsewhere.
//!
//! # Examples
//!
//! ```
//! use dupe_keeper::asset::Asset;
//!
//! let group = vec![
//!     Asset::new("a").with_dimensions(400, 300),
//!     Asset::new("b").with_dimensions(200, 300),
//! ];
//! let keep = dupe_keeper::select_best(&group).unwrap();
//! assert_eq!(keep.id, "a");
//! ```

pub mod asset;
pub mod keeper;
pub mod ranking;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use keeper::{select_best, AssetRanker, KeeperConfig};
