//! Metadata richness counting.

use super::types::{Asset, ExifInfo};

/// Counts how many metadata fields an asset has populated.
///
/// Used as the last ranking signal before input order. Implementations
/// must be deterministic and free of side effects; the ranker may call
/// them any number of times.
///
/// Any `Fn(&Asset) -> usize` closure is a counter:
///
/// ```
/// use dupe_keeper::asset::{Asset, MetadataCounter};
///
/// let by_rating = |a: &Asset| -> usize { a.exif_info.as_ref().and_then(|e| e.rating).map_or(0, |_| 1) };
/// assert_eq!(by_rating.count(&Asset::new("a")), 0);
/// ```
pub trait MetadataCounter: Send + Sync {
    /// Number of populated fields. Higher means richer.
    fn count(&self, asset: &Asset) -> usize;
}

impl<F> MetadataCounter for F
where
    F: Fn(&Asset) -> usize + Send + Sync,
{
    fn count(&self, asset: &Asset) -> usize {
        self(asset)
    }
}

/// Counts the `Some` fields of the asset's [`ExifInfo`] block.
///
/// An asset without a metadata block counts 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulatedFieldCount;

impl MetadataCounter for PopulatedFieldCount {
    fn count(&self, asset: &Asset) -> usize {
        asset.exif_info.as_ref().map_or(0, populated_fields)
    }
}

fn populated_fields(exif: &ExifInfo) -> usize {
    let ExifInfo {
        make,
        model,
        exif_image_width,
        exif_image_height,
        file_size_in_byte,
        orientation,
        date_time_original,
        modify_date,
        time_zone,
        lens_model,
        f_number,
        focal_length,
        iso,
        exposure_time,
        latitude,
        longitude,
        city,
        state,
        country,
        description,
        projection_type,
        rating,
    } = exif;

    [
        make.is_some(),
        model.is_some(),
        exif_image_width.is_some(),
        exif_image_height.is_some(),
        file_size_in_byte.is_some(),
        orientation.is_some(),
        date_time_original.is_some(),
        modify_date.is_some(),
        time_zone.is_some(),
        lens_model.is_some(),
        f_number.is_some(),
        focal_length.is_some(),
        iso.is_some(),
        exposure_time.is_some(),
        latitude.is_some(),
        longitude.is_some(),
        city.is_some(),
        state.is_some(),
        country.is_some(),
        description.is_some(),
        projection_type.is_some(),
        rating.is_some(),
    ]
    .into_iter()
    .filter(|&set| set)
    .count()
}
