// Property tests for timeline layout

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use timeline_table::services::timeline::{
    derive_layout_in, item_spacing, TimelineInput, MAX_SPACING, MIN_ITEM_WIDTH,
};
use timeline_table::utils::color::ItemColor;

fn inputs_strategy() -> impl Strategy<Value = Vec<(i64, i64, Option<i64>)>> {
    // (row id, start offset minutes, duration minutes)
    prop::collection::vec((1i64..10_000, 0i64..200_000, prop::option::of(0i64..50_000)), 0..12)
}

fn build_inputs(raw: &[(i64, i64, Option<i64>)]) -> Vec<TimelineInput> {
    let origin = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    raw.iter()
        .map(|(id, start, duration)| {
            let start = origin + Duration::minutes(*start);
            TimelineInput {
                row_id: *id,
                title: String::new(),
                start: Some(start),
                end: duration.map(|minutes| start + Duration::minutes(minutes)),
                color: ItemColor::for_id(*id),
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn every_item_is_at_least_minimum_width(raw in inputs_strategy(), viewport in 100.0f32..2000.0) {
        let layout = derive_layout_in(&build_inputs(&raw), viewport, &Utc);
        for item in &layout.items {
            prop_assert!(item.width >= MIN_ITEM_WIDTH);
            prop_assert!(item.left >= 0.0);
            prop_assert!(item.left <= layout.width + 0.5);
        }
    }

    #[test]
    fn layout_never_narrower_than_viewport(raw in inputs_strategy(), viewport in 100.0f32..2000.0) {
        let layout = derive_layout_in(&build_inputs(&raw), viewport, &Utc);
        if !layout.is_empty() {
            prop_assert!(layout.width >= viewport);
        }
    }

    #[test]
    fn items_stack_in_start_order(raw in inputs_strategy()) {
        let inputs = build_inputs(&raw);
        let layout = derive_layout_in(&inputs, 800.0, &Utc);

        prop_assert_eq!(layout.items.len(), inputs.len());
        for (i, pair) in layout.items.windows(2).enumerate() {
            prop_assert!(pair[0].left <= pair[1].left);
            prop_assert_eq!(pair[1].top - pair[0].top, 60.0);
            prop_assert_eq!(pair[0].top, i as f32 * 60.0 + 20.0);
        }
        prop_assert_eq!(layout.height, if inputs.is_empty() { 0.0 } else { inputs.len() as f32 * 60.0 + 60.0 });
    }

    #[test]
    fn spacing_is_bounded(count in 0usize..50, span_days in 0.0f64..1000.0) {
        let spacing = item_spacing(count, span_days);
        prop_assert!(spacing >= 0.0);
        prop_assert!(spacing <= MAX_SPACING);
    }
}
