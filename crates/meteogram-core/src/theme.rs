// File: crates/meteogram-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub curve_stroke: skia::Color,
    pub marker_fill: skia::Color,
    pub marker_outline: skia::Color,
    pub focus_ring: skia::Color,
    pub readout_text: skia::Color,
}

impl Theme {
    /// White curve over near-black, the original meteogram look.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            curve_stroke: skia::Color::from_argb(255, 255, 255, 255),
            marker_fill: skia::Color::from_argb(255, 235, 235, 245),
            marker_outline: skia::Color::from_argb(255, 18, 18, 20),
            focus_ring: skia::Color::from_argb(255, 255, 255, 255),
            readout_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            curve_stroke: skia::Color::from_argb(255, 20, 20, 30),
            marker_fill: skia::Color::from_argb(255, 0, 0, 0),
            marker_outline: skia::Color::from_argb(255, 0, 0, 0),
            focus_ring: skia::Color::from_argb(255, 0, 0, 0),
            readout_text: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            curve_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            marker_fill: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            marker_outline: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            focus_ring: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            readout_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
