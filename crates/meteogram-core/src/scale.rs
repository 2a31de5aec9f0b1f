// File: crates/meteogram-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms between data and pixel space.

use chrono::{DateTime, Duration, Utc};

use crate::geometry::clamp;
use crate::sample::SampleSeries;

/// One hour: the fixed time bucket padding the upper time-domain bound.
pub const TIME_BUCKET: Duration = Duration::hours(1);

const HOUR_SECS: i64 = 3600;

/// Horizontal time scale mapping `[start, end]` onto `[0, width_px]`.
/// The mapping is affine in elapsed milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub width_px: f32,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, width_px: f32) -> Self {
        let end = if end > start { end } else { start + TIME_BUCKET };
        Self { start, end, width_px: width_px.max(1.0) }
    }

    fn span_ms(&self) -> f64 {
        ((self.end - self.start).num_milliseconds() as f64).max(1.0)
    }

    #[inline]
    pub fn to_px(&self, t: DateTime<Utc>) -> f32 {
        let elapsed = (t - self.start).num_milliseconds() as f64;
        (elapsed / self.span_ms() * self.width_px as f64) as f32
    }

    /// Invert a pixel x back to an instant. Out-of-range inputs are clamped
    /// to the pixel range, never propagated.
    #[inline]
    pub fn from_px(&self, px: f32) -> DateTime<Utc> {
        let px = clamp(px, 0.0, self.width_px) as f64;
        let ms = px / self.width_px as f64 * self.span_ms();
        self.start + Duration::milliseconds(ms.round() as i64)
    }

    /// Round the domain outward to whole-hour boundaries for axis labeling.
    pub fn nice(&mut self) {
        self.start = floor_hour(self.start);
        self.end = ceil_hour(self.end);
    }
}

fn floor_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    let secs = t.timestamp();
    let floored = secs - secs.rem_euclid(HOUR_SECS);
    DateTime::from_timestamp(floored, 0).unwrap_or(t)
}

fn ceil_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    let secs = t.timestamp();
    let rem = secs.rem_euclid(HOUR_SECS);
    let nsec_carry = if t.timestamp_subsec_nanos() > 0 && rem == 0 { HOUR_SECS } else { 0 };
    let ceiled = if rem == 0 { secs + nsec_carry } else { secs + (HOUR_SECS - rem) };
    DateTime::from_timestamp(ceiled, 0).unwrap_or(t)
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[height_px, 0]`
/// (inverted, so increasing value moves up).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub vmin: f64,
    pub vmax: f64,
    pub height_px: f32,
}

impl ValueScale {
    pub fn new(vmin: f64, mut vmax: f64, height_px: f32) -> Self {
        if (vmax - vmin).abs() < 1e-12 {
            vmax = vmin + 1.0;
        }
        Self { vmin, vmax, height_px: height_px.max(1.0) }
    }

    fn span(&self) -> f64 {
        (self.vmax - self.vmin).max(1e-12)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let h = self.height_px as f64;
        (h - (v - self.vmin) / self.span() * h) as f32
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let py = clamp(py, 0.0, self.height_px) as f64;
        let h = self.height_px as f64;
        self.vmin + (h - py) / h * self.span()
    }

    /// Round the domain outward to multiples of a 1/2/5 tick step.
    pub fn nice(&mut self, target_ticks: usize) {
        let step = tick_step(self.span(), target_ticks);
        self.vmin = (self.vmin / step).floor() * step;
        self.vmax = (self.vmax / step).ceil() * step;
    }
}

/// Human-friendly tick increment: the 1/2/5 multiple of a power of ten
/// closest to `span / target`.
pub(crate) fn tick_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let base = 10f64.powf(raw.log10().floor());
    let err = raw / base;
    // Thresholds are sqrt(50), sqrt(10), sqrt(2).
    let mult = if err >= 7.07 {
        10.0
    } else if err >= 3.16 {
        5.0
    } else if err >= 1.41 {
        2.0
    } else {
        1.0
    };
    mult * base
}

/// The pair of scales owned by one chart render pass.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub time: TimeScale,
    pub value: ValueScale,
}

impl Scales {
    /// Derive both scales from the series extent and pixel dimensions.
    /// Time domain runs from the first sample to one time bucket past the
    /// last; value domain from `0.1 x min` to the max (compressed lower
    /// bound so small swings near a high baseline stay visible).
    /// Degenerate input (empty or single sample) falls back to safe
    /// defaults; no mapping ever yields NaN.
    pub fn from_series(series: &SampleSeries, width_px: f32, height_px: f32) -> Self {
        let (start, end) = match series.time_extent() {
            Some((first, last)) => (first, last + TIME_BUCKET),
            None => (DateTime::UNIX_EPOCH, DateTime::UNIX_EPOCH + TIME_BUCKET),
        };
        let (vmin, vmax) = match series.value_extent() {
            Some((min, max)) => (min * 0.1, max),
            None => (0.0, 0.0),
        };
        Self {
            time: TimeScale::new(start, end, width_px),
            value: ValueScale::new(vmin, vmax, height_px),
        }
    }

    /// Nice both domains for axis labeling.
    pub fn nice(mut self, value_ticks: usize) -> Self {
        self.time.nice();
        self.value.nice(value_ticks);
        self
    }
}
