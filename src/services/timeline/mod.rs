// Timeline service
// Derives the horizontal bar layout for the selected rows

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::utils::color::ItemColor;
use crate::utils::date::format_date_label;

pub const MS_PER_DAY: f64 = 86_400_000.0;
pub const ROW_HEIGHT: f32 = 60.0;
pub const TOP_OFFSET: f32 = 20.0;
pub const MIN_ITEM_WIDTH: f32 = 150.0;
pub const FEW_ITEMS_SPACING: f64 = 200.0;
pub const SPACING_PER_DAY: f64 = 100.0;
pub const MAX_SPACING: f64 = 400.0;
pub const UNTITLED_LABEL: &str = "Untitled";

/// One selected row, as the timeline needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineInput {
    pub row_id: i64,
    pub title: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub color: ItemColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub row_id: i64,
    pub left: f32,
    pub width: f32,
    pub top: f32,
    pub color: ItemColor,
    pub label: String,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineLayout {
    pub items: Vec<TimelineItem>,
    /// Inner width of the scrollable timeline area.
    pub width: f32,
    /// Inner height of the timeline area.
    pub height: f32,
    pub span_days: f64,
    pub spacing: f64,
}

impl TimelineLayout {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Per-day spacing for `count` items spanning `span_days`.
pub fn item_spacing(count: usize, span_days: f64) -> f64 {
    if count <= 2 {
        FEW_ITEMS_SPACING
    } else {
        (span_days * SPACING_PER_DAY).min(MAX_SPACING)
    }
}

/// Layout with date labels in the local time zone.
pub fn derive_layout(inputs: &[TimelineInput], viewport_width: f32) -> TimelineLayout {
    derive_layout_in(inputs, viewport_width, &Local)
}

pub fn derive_layout_in<Tz: TimeZone>(
    inputs: &[TimelineInput],
    viewport_width: f32,
    tz: &Tz,
) -> TimelineLayout
where
    Tz::Offset: std::fmt::Display,
{
    let mut dated: Vec<(&TimelineInput, DateTime<Utc>, DateTime<Utc>)> = inputs
        .iter()
        .filter_map(|input| {
            let start = input.start?;
            Some((input, start, input.end.unwrap_or(start)))
        })
        .collect();

    if dated.is_empty() {
        return TimelineLayout::default();
    }

    dated.sort_by_key(|(input, start, _)| (*start, input.row_id));

    let first = dated[0].1;
    let last = dated
        .iter()
        .map(|(_, _, end)| *end)
        .fold(first, |latest, end| latest.max(end));

    let span_ms = (last - first).num_milliseconds() as f64;
    let span_days = span_ms / MS_PER_DAY;
    let spacing = item_spacing(dated.len(), span_days);
    let width = (span_days * spacing).max(viewport_width as f64);

    let position = |at: DateTime<Utc>| -> f64 {
        if span_ms <= 0.0 {
            0.0
        } else {
            (at - first).num_milliseconds() as f64 / span_ms * width
        }
    };

    let items = dated
        .iter()
        .enumerate()
        .map(|(index, (input, start, end))| {
            let left = position(*start);
            let right = position(*end);
            let label = if input.title.is_empty() {
                UNTITLED_LABEL.to_string()
            } else {
                input.title.clone()
            };

            TimelineItem {
                row_id: input.row_id,
                left: left as f32,
                width: ((right - left) as f32).max(MIN_ITEM_WIDTH),
                top: index as f32 * ROW_HEIGHT + TOP_OFFSET,
                color: input.color,
                label,
                date_label: format!(
                    "{} – {}",
                    format_date_label(*start, tz),
                    format_date_label(*end, tz)
                ),
            }
        })
        .collect::<Vec<_>>();

    TimelineLayout {
        height: items.len() as f32 * ROW_HEIGHT + ROW_HEIGHT,
        items,
        width: width as f32,
        span_days,
        spacing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at_day(day: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(day)
    }

    fn input(row_id: i64, start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> TimelineInput {
        TimelineInput {
            row_id,
            title: format!("Event {}", row_id),
            start: Some(start),
            end,
            color: ItemColor::for_id(row_id),
        }
    }

    #[test]
    fn test_two_items_use_fixed_spacing() {
        let inputs = vec![
            input(1, at_day(0), None),
            input(2, at_day(10), None),
        ];
        let layout = derive_layout_in(&inputs, 800.0, &Utc);

        assert_eq!(layout.spacing, 200.0);
        assert_eq!(layout.width, 2000.0);
        assert_eq!(layout.items[1].left, 2000.0);
    }

    #[test]
    fn test_five_items_over_one_day() {
        let start = at_day(0);
        let inputs: Vec<_> = (0..5)
            .map(|i| input(i, start + Duration::hours(i * 6), None))
            .collect();
        let layout = derive_layout_in(&inputs, 300.0, &Utc);

        assert_eq!(layout.spacing, 100.0);
        assert_eq!(layout.width, 300.0);
    }

    #[test]
    fn test_spacing_is_capped() {
        let inputs: Vec<_> = [0, 2, 4, 6, 10]
            .into_iter()
            .enumerate()
            .map(|(i, day)| input(i as i64, at_day(day), None))
            .collect();
        let layout = derive_layout_in(&inputs, 100.0, &Utc);

        assert_eq!(layout.span_days, 10.0);
        assert_eq!(layout.spacing, 400.0);
        assert_eq!(layout.width, 4000.0);
    }

    #[test]
    fn test_zero_duration_item_is_minimum_width() {
        let inputs = vec![
            input(1, at_day(0), Some(at_day(1))),
            input(2, at_day(3), None),
        ];
        let layout = derive_layout_in(&inputs, 100.0, &Utc);

        let point = layout.items.iter().find(|item| item.row_id == 2).unwrap();
        assert_eq!(point.width, 150.0);
    }

    #[test]
    fn test_zero_total_span_places_everything_at_origin() {
        let inputs = vec![input(1, at_day(0), None), input(2, at_day(0), None)];
        let layout = derive_layout_in(&inputs, 640.0, &Utc);

        assert_eq!(layout.width, 640.0);
        for item in &layout.items {
            assert_eq!(item.left, 0.0);
            assert_eq!(item.width, 150.0);
        }
    }

    #[test]
    fn test_rows_without_start_are_dropped_and_sorted() {
        let mut undated = input(3, at_day(0), None);
        undated.start = None;
        let inputs = vec![input(1, at_day(5), None), undated, input(2, at_day(1), None)];
        let layout = derive_layout_in(&inputs, 500.0, &Utc);

        let ids: Vec<i64> = layout.items.iter().map(|item| item.row_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(layout.items[0].top, 20.0);
        assert_eq!(layout.items[1].top, 80.0);
        assert_eq!(layout.height, 180.0);
    }

    #[test]
    fn test_labels() {
        let mut untitled = input(1, at_day(0), Some(at_day(2)));
        untitled.title.clear();
        let layout = derive_layout_in(&[untitled], 500.0, &Utc);

        assert_eq!(layout.items[0].label, "Untitled");
        assert_eq!(layout.items[0].date_label, "1/1/2025 – 1/3/2025");
    }

    #[test]
    fn test_empty_selection_yields_empty_layout() {
        let layout = derive_layout_in(&[], 500.0, &Utc);
        assert!(layout.is_empty());
        assert_eq!(layout.height, 0.0);
    }
}
