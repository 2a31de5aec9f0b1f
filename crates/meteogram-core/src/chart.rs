// File: crates/meteogram-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG/RGBA) using
// Skia CPU raster surfaces: axes, curve, markers, hover overlay.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{time_ticks, value_ticks};
use crate::hover::HoverState;
use crate::sample::SampleSeries;
use crate::scale::Scales;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{
    Insets, CURVE_STROKE_WIDTH, FOCUS_RADIUS, HEIGHT, MARKER_RADIUS, READOUT_OFFSET,
    TICK_LABEL_PAD, TICK_LEN, WIDTH,
};

/// Target tick count for the value axis. The time axis derives its count
/// from the sample count instead (half of it, to avoid label crowding).
const VALUE_TICK_TARGET: usize = 6;

const LABEL_SIZE: f32 = 12.0;
const READOUT_SIZE: f32 = 13.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to keep snapshot tests free of font nondeterminism.
    pub draw_labels: bool,
    /// Hover overlay to composite, if the pointer is over the chart.
    pub hover: Option<HoverState>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            hover: None,
        }
    }
}

pub struct Chart {
    pub samples: SampleSeries,
    /// Unit suffix for the hover readout (e.g. "F").
    pub unit: String,
}

impl Chart {
    pub fn new(samples: SampleSeries, unit: impl Into<String>) -> Self {
        Self { samples, unit: unit.into() }
    }

    /// Scales for the current data and dimensions, domains niced for axis
    /// labeling. The time scale ranges over the full surface width while
    /// the value scale spans the inset plot height.
    pub fn scales(&self, opts: &RenderOptions) -> Scales {
        let plot_h = (opts.height - opts.insets.vsum() as i32).max(1) as f32;
        Scales::from_series(&self.samples, opts.width.max(1) as f32, plot_h)
            .nice(VALUE_TICK_TARGET)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a tightly packed RGBA8 buffer: (pixels, width, height, row bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        let image = surface.image_snapshot();

        let row_bytes = opts.width.max(1) as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; row_bytes * opts.height.max(1) as usize];
        if !image.read_pixels(&info, &mut pixels, row_bytes, (0, 0), skia::image::CachingHint::Allow) {
            anyhow::bail!("read RGBA pixels failed");
        }
        Ok((pixels, opts.width, opts.height, row_bytes))
    }

    // One synchronous pass: every scene element is rebuilt from scratch, so
    // a data or size change can never leave stale geometry behind.
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let scales = self.scales(opts);
        let plot_h = (opts.height - opts.insets.vsum() as i32).max(1) as f32;
        let plot_w = (opts.width - opts.insets.hsum() as i32).max(1) as f32;
        let shaper = TextShaper::new();

        canvas.save();
        canvas.translate((opts.insets.left as f32, opts.insets.top as f32));

        let t_ticks = time_ticks(&scales.time, self.samples.len() / 2);
        let v_ticks = value_ticks(&scales.value, VALUE_TICK_TARGET);

        draw_gridlines(canvas, theme, &t_ticks, &v_ticks, plot_w, plot_h);
        draw_time_axis(canvas, theme, &shaper, &t_ticks, plot_w, plot_h, opts.draw_labels);
        draw_value_axis(canvas, theme, &shaper, &v_ticks, plot_h, opts.draw_labels);
        self.draw_curve(canvas, theme, &scales);
        self.draw_markers(canvas, theme, &scales);
        if let Some(hover) = &opts.hover {
            draw_hover(canvas, theme, &shaper, hover, opts.draw_labels);
        }

        canvas.restore();
    }

    fn draw_curve(&self, canvas: &skia::Canvas, theme: &Theme, scales: &Scales) {
        let samples = self.samples.samples();
        if samples.len() < 2 {
            return;
        }

        let mut path = skia::Path::new();
        let first = &samples[0];
        path.move_to((scales.time.to_px(first.at), scales.value.to_px(first.value)));
        for s in samples.iter().skip(1) {
            path.line_to((scales.time.to_px(s.at), scales.value.to_px(s.value)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(CURVE_STROKE_WIDTH);
        stroke.set_color(theme.curve_stroke);
        canvas.draw_path(&path, &stroke);
    }

    fn draw_markers(&self, canvas: &skia::Canvas, theme: &Theme, scales: &Scales) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.marker_fill);

        let mut outline = skia::Paint::default();
        outline.set_anti_alias(true);
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(1.0);
        outline.set_color(theme.marker_outline);

        for s in self.samples.samples() {
            let center = (scales.time.to_px(s.at), scales.value.to_px(s.value));
            canvas.draw_circle(center, MARKER_RADIUS, &fill);
            canvas.draw_circle(center, MARKER_RADIUS, &outline);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_gridlines(
    canvas: &skia::Canvas,
    theme: &Theme,
    t_ticks: &[crate::axis::Tick],
    v_ticks: &[crate::axis::Tick],
    plot_w: f32,
    plot_h: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for t in t_ticks {
        canvas.draw_line((t.px, 0.0), (t.px, plot_h), &paint);
    }
    for t in v_ticks {
        canvas.draw_line((0.0, t.px), (plot_w, t.px), &paint);
    }
}

fn draw_time_axis(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    ticks: &[crate::axis::Tick],
    plot_w: f32,
    plot_h: f32,
    draw_labels: bool,
) {
    let mut axis = skia::Paint::default();
    axis.set_color(theme.axis_line);
    axis.set_anti_alias(true);
    axis.set_stroke_width(1.5);
    canvas.draw_line((0.0, plot_h), (plot_w, plot_h), &axis);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    for t in ticks {
        canvas.draw_line((t.px, plot_h), (t.px, plot_h + TICK_LEN), &tick_paint);
        if draw_labels {
            shaper.draw_centered(
                canvas,
                &t.label,
                t.px,
                plot_h + TICK_LEN + TICK_LABEL_PAD,
                LABEL_SIZE,
                theme.axis_label,
            );
        }
    }
}

fn draw_value_axis(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    ticks: &[crate::axis::Tick],
    plot_h: f32,
    draw_labels: bool,
) {
    let mut axis = skia::Paint::default();
    axis.set_color(theme.axis_line);
    axis.set_anti_alias(true);
    axis.set_stroke_width(1.5);
    canvas.draw_line((0.0, 0.0), (0.0, plot_h), &axis);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    for t in ticks {
        canvas.draw_line((-6.0, t.px), (0.0, t.px), &tick_paint);
        if draw_labels {
            shaper.draw_right(canvas, &t.label, -8.0, t.px + LABEL_SIZE * 0.35, LABEL_SIZE, theme.axis_label);
        }
    }
}

fn draw_hover(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    hover: &HoverState,
    draw_labels: bool,
) {
    // Visibility is toggled rather than the overlay being dropped, matching
    // the tracker's retained-state contract.
    if !hover.visible || hover.index.is_none() {
        return;
    }

    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(1.0);
    ring.set_color(theme.focus_ring);
    canvas.draw_circle((hover.px, hover.py), FOCUS_RADIUS, &ring);

    if draw_labels && !hover.readout.is_empty() {
        shaper.draw_left(
            canvas,
            &hover.readout,
            hover.px + FOCUS_RADIUS * 0.5,
            hover.py - READOUT_OFFSET,
            READOUT_SIZE,
            theme.readout_text,
            false,
        );
    }
}
