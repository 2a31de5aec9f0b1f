// File: crates/meteogram-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chrono::{TimeZone, Utc};
use meteogram_core::{Chart, RenderOptions, Sample, SampleSeries};

#[test]
fn render_rgba8_buffer() {
    let samples = (0..6)
        .map(|h| {
            Sample::new(
                Utc.with_ymd_and_hms(2023, 10, 1, 8 + h, 0, 0).unwrap(),
                60.0 + h as f64,
            )
        })
        .collect();
    let chart = Chart::new(SampleSeries::from_sorted(samples), "F");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}
