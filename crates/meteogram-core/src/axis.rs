// File: crates/meteogram-core/src/axis.rs
// Summary: Axis tick generation and label formatting for both scales.

use chrono::{DateTime, Duration, Utc};

use crate::scale::{tick_step, TimeScale, ValueScale};

/// One axis tick: a pixel position along the scale and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub px: f32,
    pub label: String,
}

/// Hour-aligned ticks across the time domain, roughly `count` of them,
/// labeled on a 12-hour clock with meridiem ("3PM").
pub fn time_ticks(scale: &TimeScale, count: usize) -> Vec<Tick> {
    let count = count.max(1);
    let span_hours = ((scale.end - scale.start).num_seconds() as f64 / 3600.0).max(1.0);
    let step_hours = (span_hours / count as f64).ceil().max(1.0) as i64;
    let step = Duration::hours(step_hours);

    let mut ticks = Vec::new();
    let mut t = first_hour_at_or_after(scale.start);
    while t <= scale.end {
        ticks.push(Tick { px: scale.to_px(t), label: hour_label(t) });
        t += step;
    }
    ticks
}

fn first_hour_at_or_after(t: DateTime<Utc>) -> DateTime<Utc> {
    let secs = t.timestamp();
    let rem = secs.rem_euclid(3600);
    let aligned = if rem == 0 && t.timestamp_subsec_nanos() == 0 {
        secs
    } else {
        secs - rem + 3600
    };
    DateTime::from_timestamp(aligned, 0).unwrap_or(t)
}

/// "3PM"-style label: unpadded 12-hour clock hour plus meridiem.
pub fn hour_label(t: DateTime<Utc>) -> String {
    t.format("%-I%p").to_string()
}

/// Default value-axis ticks: multiples of a nice 1/2/5 step inside the
/// domain, roughly `target` of them.
pub fn value_ticks(scale: &ValueScale, target: usize) -> Vec<Tick> {
    let step = tick_step(scale.vmax - scale.vmin, target);
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };

    let mut ticks = Vec::new();
    let mut k = (scale.vmin / step).ceil() as i64;
    loop {
        let v = k as f64 * step;
        if v > scale.vmax + step * 1e-6 {
            break;
        }
        ticks.push(Tick { px: scale.to_px(v), label: format!("{v:.decimals$}") });
        k += 1;
    }
    ticks
}
