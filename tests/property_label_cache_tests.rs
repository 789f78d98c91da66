use std::sync::Arc;

use fast_axis::axis::{ArtistId, LabelCache};
use fast_axis::core::{AxesBox, BoundingBox, FixedLocator, TickWhich};
use fast_axis::render::{Color, NullRenderer, TextHAlign, TextVAlign};
use fast_axis::{StyleSheet, XAxis};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pool_grows_to_highest_index_and_keeps_identities(
        requests in prop::collection::vec(0usize..48, 1..64),
    ) {
        let mut cache = LabelCache::new(10.0, Color::BLACK);
        let mut ids: Vec<Option<ArtistId>> = Vec::new();
        let mut high_water = 0;

        for index in requests {
            let previous_len = cache.len();
            let id = cache.get_label(index, TextVAlign::Top, TextHAlign::Center).id();
            high_water = high_water.max(index + 1);

            prop_assert_eq!(cache.len(), high_water);
            prop_assert!(cache.len() >= previous_len);
            ids.resize(cache.len(), None);
            let known = ids[index];
            match known {
                Some(known) => {
                    prop_assert_eq!(known, id);
                }
                None => ids[index] = Some(id),
            }
        }
        prop_assert_eq!(cache.stats().misses as usize, cache.len());
    }

    #[test]
    fn shrinking_redraws_reuse_label_objects(
        first in 1usize..24,
        shrink in 0usize..24,
    ) {
        let second = first.saturating_sub(shrink).max(1);
        let axes = AxesBox::new(BoundingBox::from_origin_size(0.0, 0.0, 800.0, 100.0))
            .expect("valid bounds");
        let mut axis = XAxis::new(Arc::new(axes), Arc::new(StyleSheet::default()));
        axis.set_view_interval(0.0, 100.0).expect("view");
        let mut renderer = NullRenderer::default();

        axis.set_major_locator(FixedLocator::new((0..first).map(|i| i as f64).collect::<Vec<_>>()));
        axis.draw(&mut renderer).expect("draw");
        let before: Vec<_> = axis
            .label_cache(TickWhich::Major)
            .expect("labels")
            .iter()
            .map(|label| label.id())
            .collect();
        let bbox = axis.tight_bbox(&mut renderer).expect("bbox");
        prop_assert_eq!(axis.tight_bbox(&mut renderer).expect("bbox"), bbox);

        let locs: Vec<f64> = (0..second).map(|i| i as f64).collect();
        axis.set_major_locator(FixedLocator::new(locs));
        axis.draw(&mut renderer).expect("draw");
        let after: Vec<_> = axis
            .label_cache(TickWhich::Major)
            .expect("labels")
            .iter()
            .map(|label| label.id())
            .collect();

        prop_assert_eq!(after, before);
    }
}
