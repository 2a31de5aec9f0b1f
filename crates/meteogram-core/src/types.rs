// File: crates/meteogram-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, fixed visual geometry).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Radius of the per-sample markers, in pixels.
pub const MARKER_RADIUS: f32 = 5.0;
/// Radius of the hover highlight ring, in pixels.
pub const FOCUS_RADIUS: f32 = 20.0;
/// Stroke width of the sample curve, in pixels.
pub const CURVE_STROKE_WIDTH: f32 = 2.5;
/// Length of axis tick marks, in pixels.
pub const TICK_LEN: f32 = 10.0;
/// Gap between a tick mark and its label, in pixels.
pub const TICK_LABEL_PAD: f32 = 20.0;
/// Upward offset of the hover readout text from the highlighted sample.
pub const READOUT_OFFSET: f32 = 24.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 30, 30, 50)
    }
}
