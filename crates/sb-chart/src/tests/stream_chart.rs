use crate::{ChartOptions, StreamChart, Viewport};

use sb_core::Record;

use serde_json::json;

const NOW_MS: i64 = 1_700_000_060_000;

fn record(time_ms: i64, total: f64) -> Record {
    Record::from_value(json!({"time": time_ms, "total": total})).unwrap()
}

fn chart() -> StreamChart {
    let mut chart = StreamChart::new(ChartOptions::default());
    chart.init();
    chart
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 400.0)
}

#[test]
fn given_uninitialized_chart_when_update_then_no_frame_and_no_push() {
    let mut chart = StreamChart::new(ChartOptions::default());

    let frame = chart.update(&record(NOW_MS, 10.0), NOW_MS, viewport());

    assert!(frame.is_none());
    assert!(chart.buffer().is_empty());
}

#[test]
fn given_empty_buffer_when_resize_then_no_frame() {
    let mut chart = chart();
    assert!(chart.resize(viewport(), NOW_MS).is_none());
}

#[test]
fn given_one_record_when_update_then_frame_with_animation() {
    let mut chart = chart();

    let frame = chart
        .update(&record(NOW_MS - 500, 12.0), NOW_MS, viewport())
        .expect("frame after update");

    assert_eq!(frame.path.points.len(), 1);
    let animation = frame.animation.expect("update frames animate");
    assert_eq!(animation.duration_ms, 3000);
    // One x-domain second, scaled: (94 - 93) / (3 - 93) * 800.
    assert!((animation.translate_x - (-800.0 / 90.0)).abs() < 1e-9);
}

#[test]
fn given_newest_sample_when_rendered_then_pinned_past_right_edge() {
    let mut chart = chart();

    // An old timestamp: without pinning this would sit far left.
    let frame = chart
        .update(&record(NOW_MS - 30_000, 5.0), NOW_MS, viewport())
        .unwrap();

    // seconds-ago 0 maps past the right edge: (0 - 93) / (3 - 93) * 800.
    let pinned_x = 93.0 / 90.0 * 800.0;
    let last = frame.path.points.last().unwrap();
    assert!((last.x - pinned_x).abs() < 1e-9);
}

#[test]
fn given_older_samples_when_rendered_then_positioned_by_age() {
    let mut chart = chart();
    let _ = chart.update(&record(NOW_MS - 10_500, 5.0), NOW_MS, viewport());

    let frame = chart
        .update(&record(NOW_MS - 1000, 7.0), NOW_MS, viewport())
        .unwrap();

    // First sample truncates to 11s before render time.
    let expected_x = (11.0 - 93.0) / (3.0 - 93.0) * 800.0;
    assert!((frame.path.points[0].x - expected_x).abs() < 1e-9);
}

#[test]
fn given_metric_max_when_rendered_then_y_domain_niced() {
    let mut chart = chart();
    let _ = chart.update(&record(NOW_MS - 2000, 42.5), NOW_MS, viewport());

    let frame = chart.update(&record(NOW_MS, 10.0), NOW_MS, viewport()).unwrap();
    assert_eq!(frame.y_domain, (0.0, 45.0));
}

#[test]
fn given_same_viewport_when_resize_twice_then_identical_frames() {
    let mut chart = chart();
    let _ = chart.update(&record(NOW_MS - 5000, 20.0), NOW_MS, viewport());
    let _ = chart.update(&record(NOW_MS - 1000, 30.0), NOW_MS, viewport());

    let first = chart.resize(viewport(), NOW_MS).unwrap();
    let second = chart.resize(viewport(), NOW_MS).unwrap();

    assert_eq!(first, second);
    assert!(first.animation.is_none(), "resize never animates");
}

#[test]
fn given_resize_when_called_then_no_data_appended() {
    let mut chart = chart();
    let _ = chart.update(&record(NOW_MS, 20.0), NOW_MS, viewport());

    let before = chart.buffer().len();
    let _ = chart.resize(Viewport::new(1024.0, 768.0), NOW_MS);
    assert_eq!(chart.buffer().len(), before);
}

#[test]
fn given_record_without_time_field_when_update_then_dropped() {
    let mut chart = chart();
    let bad = Record::from_value(json!({"total": 3.0})).unwrap();

    assert!(chart.update(&bad, NOW_MS, viewport()).is_none());
    assert!(chart.buffer().is_empty());
}

#[test]
fn given_record_with_invalid_metric_when_update_then_dropped() {
    let mut chart = chart();
    let bad_metric = Record::from_value(json!({"time": NOW_MS, "total": "n/a"})).unwrap();

    // A valid time is not enough: a record without a plottable metric
    // never enters the window.
    assert!(chart.update(&bad_metric, NOW_MS, viewport()).is_none());
    assert!(chart.buffer().is_empty());
}

#[test]
fn given_invalid_metric_record_when_later_updates_then_frames_resume() {
    let mut chart = chart();
    let bad_metric = Record::from_value(json!({"time": NOW_MS, "total": "n/a"})).unwrap();
    let _ = chart.update(&bad_metric, NOW_MS, viewport());

    for i in 1..=5 {
        let frame = chart.update(&record(NOW_MS + 1000 * i, 10.0), NOW_MS + 1000 * i, viewport());
        assert!(frame.is_some(), "update {i} after a malformed record");
    }
}

#[test]
fn given_pushes_beyond_capacity_when_update_then_window_bounded() {
    let options = ChartOptions {
        max_buffer_size: 3,
        ..Default::default()
    };
    let mut chart = StreamChart::new(options);
    chart.init();

    for i in 0..5 {
        let sample = record(NOW_MS - 1000 * (5 - i), 1.0 + i as f64);
        let _ = chart.update(&sample, NOW_MS, viewport());
    }

    assert_eq!(chart.buffer().len(), 3);
}
