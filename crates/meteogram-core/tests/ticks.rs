// File: crates/meteogram-core/tests/ticks.rs
// Purpose: Validate tick generation and time-bucket label formatting.

use chrono::{DateTime, TimeZone, Utc};
use meteogram_core::axis::{hour_label, time_ticks, value_ticks};
use meteogram_core::{TimeScale, ValueScale};

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 1, hour, min, 0).unwrap()
}

#[test]
fn hour_labels_use_unpadded_twelve_hour_clock() {
    assert_eq!(hour_label(at(15, 0)), "3PM");
    assert_eq!(hour_label(at(9, 0)), "9AM");
    assert_eq!(hour_label(at(0, 0)), "12AM");
    assert_eq!(hour_label(at(12, 0)), "12PM");
}

#[test]
fn time_ticks_are_hour_aligned_across_the_domain() {
    let scale = TimeScale::new(at(8, 0), at(11, 0), 300.0);
    let ticks = time_ticks(&scale, 3);

    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["8AM", "9AM", "10AM", "11AM"]);
    let px: Vec<f32> = ticks.iter().map(|t| t.px).collect();
    assert_eq!(px, vec![0.0, 100.0, 200.0, 300.0]);
}

#[test]
fn time_ticks_thin_out_on_wide_domains() {
    // 24h with ~6 requested ticks steps by 4 hours.
    let scale = TimeScale::new(at(0, 0), Utc.with_ymd_and_hms(2023, 10, 2, 0, 0, 0).unwrap(), 480.0);
    let ticks = time_ticks(&scale, 6);
    assert_eq!(ticks.len(), 7);
    assert_eq!(ticks[0].label, "12AM");
    assert_eq!(ticks[1].label, "4AM");
}

#[test]
fn time_ticks_start_at_first_hour_inside_domain() {
    let scale = TimeScale::new(at(8, 30), at(11, 0), 300.0);
    let ticks = time_ticks(&scale, 3);
    assert_eq!(ticks[0].label, "9AM");
    assert!(ticks[0].px > 0.0);
}

#[test]
fn value_ticks_step_by_nice_increments() {
    let scale = ValueScale::new(0.0, 70.0, 200.0);
    let ticks = value_ticks(&scale, 6);

    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "10", "20", "30", "40", "50", "60", "70"]);
    // Inverted range: smallest value at the bottom of the plot.
    assert_eq!(ticks.first().map(|t| t.px), Some(200.0));
    assert_eq!(ticks.last().map(|t| t.px), Some(0.0));
}

#[test]
fn value_ticks_inside_unaligned_domain() {
    let scale = ValueScale::new(6.0, 65.0, 200.0);
    let ticks = value_ticks(&scale, 6);
    assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("10"));
    assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("60"));
}

#[test]
fn fractional_steps_keep_a_decimal() {
    let scale = ValueScale::new(0.0, 1.0, 100.0);
    let ticks = value_ticks(&scale, 5);
    assert!(ticks.iter().any(|t| t.label == "0.2"));
}
