//! Metric extraction from asset records.
//!
//! Each helper resolves the optional catalog fields to a concrete value.
//! Absent, zero and negative inputs all resolve to 0.

use super::types::Asset;

/// Default MIME preference, most preferred first.
pub const DEFAULT_MIME_PRIORITY: [&str; 2] = ["image/heic", "image/heif"];

fn non_negative(value: Option<i64>) -> u64 {
    value.map_or(0, |v| v.max(0) as u64)
}

/// Pixel area (`width * height`) of the asset.
///
/// Returns 0 when either dimension is absent or not positive. Computed in
/// `u128` so no pair of `i64` dimensions can overflow.
pub fn image_area(asset: &Asset) -> u128 {
    let Some(exif) = asset.exif_info.as_ref() else {
        return 0;
    };
    let width = non_negative(exif.exif_image_width) as u128;
    let height = non_negative(exif.exif_image_height) as u128;
    width * height
}

/// Original file size in bytes, 0 when unknown.
pub fn file_size(asset: &Asset) -> u64 {
    asset
        .exif_info
        .as_ref()
        .map_or(0, |exif| non_negative(exif.file_size_in_byte))
}

/// An ordered MIME-type preference list.
///
/// Lookup is case-insensitive. Types not in the list, and a missing type,
/// all share the rank one past the end of the list.
///
/// # Examples
///
/// ```
/// use dupe_keeper::asset::MimePriority;
///
/// let priority = MimePriority::default();
/// assert_eq!(priority.rank(Some("IMAGE/HEIC")), 0);
/// assert_eq!(priority.rank(Some("image/heif")), 1);
/// assert_eq!(priority.rank(Some("image/jpeg")), 2);
/// assert_eq!(priority.rank(None), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimePriority {
    // stored lowercase
    types: Vec<String>,
}

impl MimePriority {
    /// Builds a preference list, most preferred first.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            types: types
                .into_iter()
                .map(|t| t.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Rank of a MIME type. Lower is more preferred.
    pub fn rank(&self, mime: Option<&str>) -> usize {
        mime.and_then(|m| self.types.iter().position(|t| t.eq_ignore_ascii_case(m)))
            .unwrap_or(self.types.len())
    }

    /// Rank of an asset's declared MIME type.
    pub fn rank_of(&self, asset: &Asset) -> usize {
        self.rank(asset.original_mime_type.as_deref())
    }

    /// Number of listed types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Listed types in preference order, lowercased.
    pub fn types(&self) -> &[String] {
        &self.types
    }
}

impl Default for MimePriority {
    fn default() -> Self {
        Self::new(DEFAULT_MIME_PRIORITY)
    }
}
