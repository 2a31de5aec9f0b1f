// File: crates/meteogram-core/tests/scales.rs
// Purpose: Validate scale domains, pixel mapping, nicing, and degenerate input.

use chrono::{DateTime, TimeZone, Utc};
use meteogram_core::{Sample, SampleSeries, Scales, TIME_BUCKET};

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 1, hour, min, 0).unwrap()
}

fn series(points: &[(u32, f64)]) -> SampleSeries {
    SampleSeries::from_sorted(points.iter().map(|&(h, v)| Sample::new(at(h, 0), v)).collect())
}

#[test]
fn time_scale_first_sample_maps_to_zero_last_before_right_edge() {
    let s = series(&[(8, 60.0), (9, 62.0), (10, 65.0)]);
    let scales = Scales::from_series(&s, 300.0, 200.0);

    assert_eq!(scales.time.to_px(at(8, 0)), 0.0);
    // Domain extends one bucket past the last sample, so the last sample
    // never sits flush against the right edge.
    let last_px = scales.time.to_px(at(10, 0));
    assert!(last_px < 300.0, "last sample at {last_px}, expected < width");
    assert_eq!(scales.time.end, at(10, 0) + TIME_BUCKET);
}

#[test]
fn value_scale_compressed_domain_and_orientation() {
    let s = series(&[(8, 60.0), (9, 62.0), (10, 65.0)]);
    let scales = Scales::from_series(&s, 300.0, 200.0);

    // Lower bound is 0.1 x min, not the tight minimum.
    assert!((scales.value.vmin - 6.0).abs() < 1e-9);
    assert!((scales.value.vmax - 65.0).abs() < 1e-9);
    // Inverted range: max -> 0, compressed lower bound -> height.
    assert_eq!(scales.value.to_px(65.0), 0.0);
    assert_eq!(scales.value.to_px(6.0), 200.0);
    // Values below the observed minimum never map below the compressed bound.
    assert!(scales.value.to_px(30.0) < 200.0);
}

#[test]
fn single_sample_domains() {
    let s = series(&[(12, 70.0)]);
    let scales = Scales::from_series(&s, 300.0, 200.0);

    assert!((scales.value.vmin - 7.0).abs() < 1e-9);
    assert!((scales.value.vmax - 70.0).abs() < 1e-9);
    assert_eq!(scales.time.start, at(12, 0));
    assert_eq!(scales.time.end, at(13, 0));
    // The single marker lands at pixel x = 0.
    assert_eq!(scales.time.to_px(at(12, 0)), 0.0);
}

#[test]
fn empty_series_degenerates_without_nan() {
    let s = SampleSeries::from_sorted(Vec::new());
    let scales = Scales::from_series(&s, 300.0, 200.0);

    assert!(scales.time.to_px(scales.time.start).is_finite());
    assert!(scales.time.to_px(scales.time.end).is_finite());
    assert!(scales.value.to_px(0.0).is_finite());
    assert!(scales.value.to_px(100.0).is_finite());
    assert!(scales.value.from_px(50.0).is_finite());
}

#[test]
fn inversion_clamps_out_of_range_pixels() {
    let s = series(&[(8, 60.0), (9, 62.0), (10, 65.0)]);
    let scales = Scales::from_series(&s, 300.0, 200.0);

    assert_eq!(scales.time.from_px(-50.0), scales.time.start);
    assert_eq!(scales.time.from_px(10_000.0), scales.time.end);
    assert!((scales.value.from_px(-10.0) - scales.value.vmax).abs() < 1e-9);
    assert!((scales.value.from_px(10_000.0) - scales.value.vmin).abs() < 1e-9);
}

#[test]
fn nice_rounds_outward() {
    let s = series(&[(12, 70.0)]);
    let mut scales = Scales::from_series(&s, 300.0, 200.0);
    scales.time.start = at(8, 30);
    let scales = scales.nice(6);

    // Whole-hour time endpoints, 1/2/5-step value endpoints.
    assert_eq!(scales.time.start, at(8, 0));
    assert_eq!(scales.time.end, at(13, 0));
    assert!((scales.value.vmin - 0.0).abs() < 1e-9);
    assert!((scales.value.vmax - 70.0).abs() < 1e-9);
}

#[test]
fn affine_round_trip_on_exact_pixels() {
    // 3h over 300 px = 36s per px; hour samples land on exact pixels.
    let s = series(&[(8, 60.0), (9, 62.0), (10, 65.0)]);
    let scales = Scales::from_series(&s, 300.0, 200.0);

    for sample in s.samples() {
        let px = scales.time.to_px(sample.at);
        assert_eq!(scales.time.from_px(px), sample.at);
    }
}
