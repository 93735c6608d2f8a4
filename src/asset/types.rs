//! Catalog record types.
//!
//! These mirror the shape in which the media catalog delivers assets.
//! Every field the catalog may omit is an `Option`; resolving absent
//! values to defaults is the job of [`metrics`](super::metrics), not of
//! the record itself.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One stored media item.
///
/// Only `original_mime_type` and `exif_info` take part in ranking. The
/// identifying fields are carried so callers can act on the result.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Asset {
    /// Catalog identifier.
    pub id: String,
    /// File name at upload time.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub original_file_name: Option<String>,
    /// Declared content type, e.g. `image/heic`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub original_mime_type: Option<String>,
    /// Metadata block, absent for assets that were never extracted.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub exif_info: Option<ExifInfo>,
}

impl Asset {
    /// Creates an asset with the given identifier and no metadata.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.original_file_name = Some(name.into());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.original_mime_type = Some(mime.into());
        self
    }

    /// Replaces the whole metadata block.
    pub fn with_exif(mut self, exif: ExifInfo) -> Self {
        self.exif_info = Some(exif);
        self
    }

    /// Sets pixel dimensions, creating the metadata block if needed.
    pub fn with_dimensions(mut self, width: i64, height: i64) -> Self {
        let exif = self.exif_info.get_or_insert_with(ExifInfo::default);
        exif.exif_image_width = Some(width);
        exif.exif_image_height = Some(height);
        self
    }

    /// Sets the file size, creating the metadata block if needed.
    pub fn with_file_size(mut self, bytes: i64) -> Self {
        self.exif_info
            .get_or_insert_with(ExifInfo::default)
            .file_size_in_byte = Some(bytes);
        self
    }
}

/// EXIF-derived metadata attached to an asset.
///
/// Numeric fields are signed because the catalog does not guarantee
/// sane values; negative sizes and dimensions are clamped at use.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ExifInfo {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub make: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub model: Option<String>,
    /// Pixel width.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub exif_image_width: Option<i64>,
    /// Pixel height.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub exif_image_height: Option<i64>,
    /// Size of the original file in bytes.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub file_size_in_byte: Option<i64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub orientation: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub date_time_original: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub modify_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub time_zone: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub lens_model: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub f_number: Option<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub focal_length: Option<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub iso: Option<i64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub exposure_time: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub latitude: Option<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub longitude: Option<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub city: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub state: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub country: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub projection_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::asset::lenient::deserialize"))]
    pub rating: Option<i64>,
}
