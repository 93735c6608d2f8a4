use std::cmp::Reverse;

use proptest::prelude::*;

use super::AssetRanker;
use crate::asset::{file_size, image_area, Asset, ExifInfo, MetadataCounter, MimePriority, PopulatedFieldCount};

// Narrow ranges so groups are full of partial and complete ties.
fn arb_asset() -> impl Strategy<Value = Asset> {
    (
        proptest::option::of(-2i64..6),
        proptest::option::of(-2i64..6),
        proptest::option::of(-2i64..4),
        proptest::option::of(prop_oneof![
            Just("image/heic"),
            Just("IMAGE/HEIF"),
            Just("image/jpeg"),
            Just("image/png"),
        ]),
        proptest::option::of(0i64..3),
        proptest::bool::ANY,
    )
        .prop_map(|(width, height, size, mime, rating, has_exif)| {
            let mut asset = Asset::new("");
            asset.original_mime_type = mime.map(str::to_string);
            if has_exif {
                asset.exif_info = Some(ExifInfo {
                    exif_image_width: width,
                    exif_image_height: height,
                    file_size_in_byte: size,
                    rating,
                    ..ExifInfo::default()
                });
            }
            asset
        })
}

fn arb_group() -> impl Strategy<Value = Vec<Asset>> {
    proptest::collection::vec(arb_asset(), 0..12).prop_map(|mut group| {
        for (i, asset) in group.iter_mut().enumerate() {
            asset.id = i.to_string();
        }
        group
    })
}

type Key = (Reverse<u128>, usize, Reverse<u64>, Reverse<usize>);

fn key(asset: &Asset) -> Key {
    (
        Reverse(image_area(asset)),
        MimePriority::default().rank_of(asset),
        Reverse(file_size(asset)),
        Reverse(PopulatedFieldCount.count(asset)),
    )
}

proptest! {
    #[test]
    fn prop_matches_first_minimum(group in arb_group()) {
        // min_by_key returns the first of several equal minima
        let expected = group.iter().enumerate().min_by_key(|(_, a)| key(a)).map(|(i, _)| i);
        prop_assert_eq!(AssetRanker::new().select_best_index(&group), expected);
    }

    #[test]
    fn prop_result_is_group_member(group in arb_group()) {
        match AssetRanker::new().select_best(&group) {
            None => prop_assert!(group.is_empty()),
            Some(best) => prop_assert!(group.iter().any(|a| std::ptr::eq(a, best))),
        }
    }

    #[test]
    fn prop_group_unchanged(group in arb_group()) {
        let before = group.clone();
        let ranker = AssetRanker::new();
        let _ = ranker.select_best(&group);
        let _ = ranker.rank(&group);
        prop_assert_eq!(group, before);
    }

    #[test]
    fn prop_rank_head_agrees_with_select(group in arb_group()) {
        let ranker = AssetRanker::new();
        let ranked = ranker.rank(&group);
        prop_assert_eq!(ranked.len(), group.len());
        match (ranked.first(), ranker.select_best(&group)) {
            (Some(head), Some(best)) => prop_assert!(std::ptr::eq(*head, best)),
            (None, None) => {}
            _ => prop_assert!(false, "rank and select_best disagree on emptiness"),
        }
    }

    #[test]
    fn prop_rank_is_sorted_and_stable(group in arb_group()) {
        let ranked = AssetRanker::new().rank(&group);
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(key(a) <= key(b));
            if key(a) == key(b) {
                // ids are input positions
                let (ia, ib): (usize, usize) = (a.id.parse().unwrap(), b.id.parse().unwrap());
                prop_assert!(ia < ib);
            }
        }
    }

    #[test]
    fn prop_appended_copy_never_wins(group in arb_group()) {
        let ranker = AssetRanker::new();
        if let Some(index) = ranker.select_best_index(&group) {
            let mut extended = group.clone();
            extended.push(group[index].clone());
            prop_assert_eq!(ranker.select_best_index(&extended), Some(index));
        }
    }
}
