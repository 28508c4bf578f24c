// Benchmark for timeline layout and CSV export
// Measures derivation cost as the selection grows

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use timeline_table::models::column::ColumnSet;
use timeline_table::models::event::{CustomFields, EventRow};
use timeline_table::services::export::render_csv;
use timeline_table::services::timeline::{derive_layout_in, TimelineInput};
use timeline_table::utils::color::ItemColor;

fn sample_rows(count: usize) -> Vec<EventRow> {
    let origin = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    (0..count as i64)
        .map(|id| {
            let mut custom_fields = CustomFields::new();
            custom_fields.insert("owner".to_string(), format!("owner {}", id % 7));
            let start = origin + Duration::hours(id * 13);
            EventRow {
                id,
                start_datetime: Some(start),
                end_datetime: Some(start + Duration::hours(id % 48)),
                title: format!("Event {}", id),
                description: String::new(),
                custom_fields,
            }
        })
        .collect()
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_layout");

    for count in [10usize, 100, 1000] {
        let inputs: Vec<TimelineInput> = sample_rows(count)
            .into_iter()
            .map(|row| TimelineInput {
                row_id: row.id,
                title: row.title,
                start: row.start_datetime,
                end: row.end_datetime,
                color: ItemColor::for_id(row.id),
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &inputs, |b, inputs| {
            b.iter(|| derive_layout_in(black_box(inputs), 1200.0, &Utc));
        });
    }

    group.finish();
}

fn bench_csv(c: &mut Criterion) {
    let rows = sample_rows(1000);
    let columns = ColumnSet::with_custom(["owner"]);

    c.bench_function("csv_export_1000_rows", |b| {
        b.iter(|| render_csv(black_box(&columns), black_box(&rows), &Utc));
    });
}

criterion_group!(benches, bench_timeline, bench_csv);
criterion_main!(benches);
