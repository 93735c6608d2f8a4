//! The asset ranker.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::{ConfigError, KeeperConfig};
use super::rules::{FileSize, ImageArea, MetadataRichness, MimeTypePriority};
use crate::asset::{Asset, MetadataCounter, MimePriority, PopulatedFieldCount};
use crate::ranking::RuleEngine;

/// Picks the asset to keep from a group of duplicates.
///
/// Assets are ranked by, in order:
///
/// 1. Largest image area (`width * height`)
/// 2. MIME type preference (`image/heic`, then `image/heif`, then the rest)
/// 3. Largest file size
/// 4. Most populated metadata fields
///
/// and finally by position: among assets tied on all four, the first
/// one in the group wins.
///
/// The ranker is stateless between calls and only borrows the group.
///
/// # Examples
///
/// ```
/// use dupe_keeper::asset::Asset;
/// use dupe_keeper::keeper::AssetRanker;
///
/// let group = vec![
///     Asset::new("jpeg").with_mime_type("image/jpeg").with_dimensions(200, 100).with_file_size(500),
///     Asset::new("heic").with_mime_type("image/heic").with_dimensions(200, 100).with_file_size(400),
/// ];
///
/// let ranker = AssetRanker::new();
/// assert_eq!(ranker.select_best(&group).map(|a| a.id.as_str()), Some("heic"));
/// ```
pub struct AssetRanker {
    engine: RuleEngine<Asset, ()>,
    priority: MimePriority,
    parallel: bool,
}

impl AssetRanker {
    /// Creates a ranker with the default keep policy.
    pub fn new() -> Self {
        Self::with_parts(MimePriority::default(), PopulatedFieldCount, false)
    }

    /// Creates a ranker from a validated configuration.
    pub fn from_config(config: &KeeperConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_parts(
            MimePriority::new(&config.mime_priority),
            PopulatedFieldCount,
            config.parallel,
        ))
    }

    /// Replaces the metadata richness counter used by the last rule.
    pub fn with_metadata_counter<M: MetadataCounter + 'static>(self, counter: M) -> Self {
        Self::with_parts(self.priority, counter, self.parallel)
    }

    fn with_parts<M: MetadataCounter + 'static>(
        priority: MimePriority,
        counter: M,
        parallel: bool,
    ) -> Self {
        let engine = RuleEngine::new()
            .with_rule(ImageArea)
            .with_rule(MimeTypePriority::new(priority.clone()))
            .with_rule(FileSize)
            .with_rule(MetadataRichness::new(counter));
        Self {
            engine,
            priority,
            parallel,
        }
    }

    /// Returns the names of the ranking rules in the order applied.
    pub fn rule_names(&self) -> Vec<&str> {
        self.engine.rule_names()
    }

    /// Returns the MIME preference in effect.
    pub fn mime_priority(&self) -> &MimePriority {
        &self.priority
    }

    /// Index of the asset to keep, or `None` for an empty group.
    pub fn select_best_index(&self, assets: &[Asset]) -> Option<usize> {
        self.engine.select_best_index(assets, &())
    }

    /// The asset to keep, or `None` for an empty group.
    ///
    /// The returned reference is one of the group's own elements.
    pub fn select_best<'a>(&self, assets: &'a [Asset]) -> Option<&'a Asset> {
        self.engine.select_best(assets, &())
    }

    /// The whole group in keep-preference order.
    ///
    /// The first element is always the one [`select_best`](Self::select_best)
    /// returns. The group itself is left in its original order.
    pub fn rank<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        self.engine.sort(assets, &())
    }

    /// Selects the asset to keep in each of many groups.
    ///
    /// Results are in group order. Groups are independent, so with the
    /// `parallel` feature and [`KeeperConfig::parallel`] set they are
    /// ranked on the rayon pool.
    pub fn select_best_in_groups<'a>(&self, groups: &'a [Vec<Asset>]) -> Vec<Option<&'a Asset>> {
        let picks: Vec<Option<&'a Asset>> = if self.parallel {
            self.select_groups_parallel(groups)
        } else {
            groups.iter().map(|group| self.select_best(group)).collect()
        };

        tracing::debug!(
            groups = groups.len(),
            selected = picks.iter().filter(|p| p.is_some()).count(),
            parallel = self.parallel,
            "selected keep candidates"
        );
        picks
    }

    #[cfg(feature = "parallel")]
    fn select_groups_parallel<'a>(&self, groups: &'a [Vec<Asset>]) -> Vec<Option<&'a Asset>> {
        groups.par_iter().map(|group| self.select_best(group)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn select_groups_parallel<'a>(&self, groups: &'a [Vec<Asset>]) -> Vec<Option<&'a Asset>> {
        groups.iter().map(|group| self.select_best(group)).collect()
    }
}

impl Default for AssetRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggests which asset of a duplicate group to keep, using the default
/// policy of [`AssetRanker::new`].
///
/// Returns `None` only for an empty group.
pub fn select_best(assets: &[Asset]) -> Option<&Asset> {
    AssetRanker::new().select_best(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ExifInfo;

    fn ids<'a>(assets: &[&'a Asset]) -> Vec<&'a str> {
        assets.iter().map(|a| a.id.as_str()).collect()
    }

    fn sized(id: &str, width: i64, height: i64) -> Asset {
        Asset::new(id).with_dimensions(width, height)
    }

    fn typed(id: &str, mime: &str, file_size: i64) -> Asset {
        Asset::new(id)
            .with_mime_type(mime)
            .with_dimensions(200, 100)
            .with_file_size(file_size)
    }

    #[test]
    fn test_picks_largest_area() {
        let assets = vec![sized("a", 400, 300), sized("b", 200, 300), sized("c", 100, 100)];
        let best = select_best(&assets).unwrap();
        assert!(std::ptr::eq(best, &assets[0]));
    }

    #[test]
    fn test_area_dominates_other_metrics() {
        let assets = vec![
            Asset::new("small")
                .with_mime_type("image/heic")
                .with_dimensions(100, 100)
                .with_file_size(9_000)
                .with_exif(ExifInfo {
                    exif_image_width: Some(100),
                    exif_image_height: Some(100),
                    file_size_in_byte: Some(9_000),
                    rating: Some(5),
                    make: Some("Canon".into()),
                    ..ExifInfo::default()
                }),
            Asset::new("large").with_mime_type("image/png").with_dimensions(101, 100),
        ];
        assert_eq!(select_best(&assets).unwrap().id, "large");
    }

    #[test]
    fn test_prefers_heic_over_heif_and_jpeg() {
        let assets = vec![
            typed("jpeg", "image/jpeg", 500),
            typed("heif", "image/heif", 400),
            typed("heic", "image/heic", 400),
        ];
        let best = select_best(&assets).unwrap();
        assert!(std::ptr::eq(best, &assets[2]));
    }

    #[test]
    fn test_prefers_heif_over_others() {
        let assets = vec![typed("png", "image/png", 500), typed("heif", "image/heif", 400)];
        assert_eq!(select_best(&assets).unwrap().id, "heif");
    }

    #[test]
    fn test_mime_comparison_case_insensitive() {
        let assets = vec![typed("heif", "image/heif", 400), typed("heic", "IMAGE/HEIC", 400)];
        assert_eq!(select_best(&assets).unwrap().id, "heic");
    }

    #[test]
    fn test_missing_mime_ties_with_unlisted() {
        let assets = vec![
            Asset::new("none").with_dimensions(200, 100).with_file_size(100),
            typed("png", "image/png", 300),
        ];
        // same bucket, so file size decides
        assert_eq!(select_best(&assets).unwrap().id, "png");
    }

    #[test]
    fn test_falls_back_to_file_size() {
        let assets = vec![
            Asset::new("a").with_file_size(300),
            Asset::new("b").with_file_size(200),
            Asset::new("c").with_file_size(100),
        ];
        let best = select_best(&assets).unwrap();
        assert!(std::ptr::eq(best, &assets[0]));
    }

    #[test]
    fn test_falls_back_to_metadata_count() {
        let assets = vec![
            Asset::new("rich").with_exif(ExifInfo {
                file_size_in_byte: Some(200),
                rating: Some(5),
                f_number: Some(1.0),
                ..ExifInfo::default()
            }),
            Asset::new("plain").with_exif(ExifInfo {
                file_size_in_byte: Some(200),
                rating: Some(5),
                ..ExifInfo::default()
            }),
            Asset::new("small").with_exif(ExifInfo {
                file_size_in_byte: Some(100),
                rating: Some(5),
                ..ExifInfo::default()
            }),
        ];
        assert_eq!(select_best(&assets).unwrap().id, "rich");
    }

    #[test]
    fn test_richer_later_asset_wins_metadata_tie_break() {
        let assets = vec![
            Asset::new("plain").with_file_size(200),
            Asset::new("rich").with_file_size(200).with_exif(ExifInfo {
                file_size_in_byte: Some(200),
                city: Some("Seoul".into()),
                ..ExifInfo::default()
            }),
        ];
        assert_eq!(select_best(&assets).unwrap().id, "rich");
    }

    #[test]
    fn test_without_exif_info() {
        let assets = vec![Asset::new("sized").with_file_size(200), Asset::new("bare")];
        assert_eq!(select_best(&assets).unwrap().id, "sized");
    }

    #[test]
    fn test_exif_without_file_size() {
        let assets = vec![
            Asset::new("a").with_exif(ExifInfo {
                rating: Some(5),
                f_number: Some(1.0),
                ..ExifInfo::default()
            }),
            Asset::new("b").with_exif(ExifInfo {
                rating: Some(5),
                ..ExifInfo::default()
            }),
        ];
        assert_eq!(select_best(&assets).unwrap().id, "a");
    }

    #[test]
    fn test_empty_group() {
        let assets: Vec<Asset> = vec![];
        assert!(select_best(&assets).is_none());
        assert!(AssetRanker::new().select_best_index(&assets).is_none());
        assert!(AssetRanker::new().rank(&assets).is_empty());
    }

    #[test]
    fn test_single_asset() {
        let assets = vec![Asset::new("only").with_dimensions(-1, -1)];
        let best = select_best(&assets).unwrap();
        assert!(std::ptr::eq(best, &assets[0]));
    }

    #[test]
    fn test_single_asset_is_not_scored() {
        let ranker = AssetRanker::new()
            .with_metadata_counter(|_: &Asset| -> usize { panic!("singleton group was scored") });
        let assets = vec![Asset::new("only").with_file_size(10)];

        let best = ranker.select_best(&assets).unwrap();
        assert!(std::ptr::eq(best, &assets[0]));
        assert_eq!(ranker.select_best_index(&assets), Some(0));
    }

    #[test]
    fn test_full_tie_keeps_first() {
        let assets = vec![typed("x", "image/jpeg", 10), typed("y", "image/png", 10), typed("z", "image/gif", 10)];
        assert_eq!(AssetRanker::new().select_best_index(&assets), Some(0));
    }

    #[test]
    fn test_group_not_reordered() {
        let assets = vec![
            Asset::new("a").with_file_size(100),
            Asset::new("b").with_file_size(300),
            Asset::new("c").with_file_size(200),
        ];
        let before = assets.clone();
        let ranker = AssetRanker::new();

        let _ = ranker.select_best(&assets);
        let _ = ranker.rank(&assets);

        assert_eq!(assets, before);
    }

    #[test]
    fn test_rank_order() {
        let assets = vec![
            Asset::new("tiny").with_dimensions(10, 10),
            Asset::new("heif").with_mime_type("image/heif").with_dimensions(20, 20),
            Asset::new("heic").with_mime_type("image/heic").with_dimensions(20, 20),
            Asset::new("none"),
        ];
        let ranked = AssetRanker::new().rank(&assets);
        assert_eq!(ids(&ranked), vec!["heic", "heif", "tiny", "none"]);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(
            AssetRanker::new().rule_names(),
            vec!["ImageArea", "MimeTypePriority", "FileSize", "MetadataRichness"]
        );
    }

    #[test]
    fn test_from_config_custom_priority() {
        let config = KeeperConfig::default().with_mime_priority(["image/avif", "image/heic"]);
        let ranker = AssetRanker::from_config(&config).unwrap();
        let assets = vec![typed("heic", "image/heic", 400), typed("avif", "image/avif", 100)];

        assert_eq!(ranker.select_best(&assets).unwrap().id, "avif");
        assert_eq!(ranker.mime_priority().len(), 2);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = KeeperConfig::default().with_mime_priority(["image/heic", "image/heic"]);
        assert!(matches!(
            AssetRanker::from_config(&config),
            Err(ConfigError::DuplicateMimeType { .. })
        ));
    }

    #[test]
    fn test_custom_metadata_counter() {
        // prefer whichever asset has a description
        let counter = |a: &Asset| -> usize {
            a.exif_info
                .as_ref()
                .map_or(0, |e| usize::from(e.description.is_some()))
        };
        let ranker = AssetRanker::new().with_metadata_counter(counter);
        let assets = vec![
            Asset::new("many").with_exif(ExifInfo {
                rating: Some(1),
                make: Some("Sony".into()),
                ..ExifInfo::default()
            }),
            Asset::new("described").with_exif(ExifInfo {
                description: Some("beach".into()),
                ..ExifInfo::default()
            }),
        ];
        assert_eq!(ranker.select_best(&assets).unwrap().id, "described");
    }

    #[test]
    fn test_select_best_in_groups() {
        let groups = vec![
            vec![Asset::new("a1").with_file_size(1), Asset::new("a2").with_file_size(2)],
            vec![],
            vec![Asset::new("c1")],
        ];
        let picks = AssetRanker::new().select_best_in_groups(&groups);

        assert_eq!(picks.len(), 3);
        assert!(std::ptr::eq(picks[0].unwrap(), &groups[0][1]));
        assert!(picks[1].is_none());
        assert!(std::ptr::eq(picks[2].unwrap(), &groups[2][0]));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_select_best_in_groups_parallel_matches_sequential() {
        let groups: Vec<Vec<Asset>> = (0..50)
            .map(|g| {
                (0..5)
                    .map(|i| Asset::new(format!("{g}-{i}")).with_file_size((i * 7 + g) % 5))
                    .collect()
            })
            .collect();
        let config = KeeperConfig::default().with_parallel(true);
        let parallel = AssetRanker::from_config(&config).unwrap();
        let sequential = AssetRanker::new();

        let a = parallel.select_best_in_groups(&groups);
        let b = sequential.select_best_in_groups(&groups);
        for (x, y) in a.iter().zip(&b) {
            assert!(std::ptr::eq(x.unwrap(), y.unwrap()));
        }
    }
}
