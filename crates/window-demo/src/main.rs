// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed demo that renders meteogram-core to a window via
// RGBA blit (CPU) using winit + softbuffer, with live hover tracking.

use chrono::{DateTime, Utc};
use meteogram_core::geometry::RectF32;
use meteogram_core::{Chart, HoverTracker, PointerEvent, RenderOptions, Sample, SampleSeries};
use std::num::NonZeroU32;
use std::path::Path;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    // Arg: observations CSV path
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/observations_2023-10-01.csv".to_string());

    let samples = load_observations_csv(Path::new(&raw));
    if samples.is_empty() {
        eprintln!("no observations loaded from {raw}");
        return;
    }
    let chart = Chart::new(SampleSeries::from_sorted(samples), "F");

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Meteogram — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 400.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut tracker = HoverTracker::new();
    let insets = RenderOptions::default().insets;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    // Scales are derived per render pass, so a resize alone
                    // fully rebuilds the mapping; the tracker never caches it.
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorEntered { .. } => {
                    let opts = opts_for(size);
                    let scales = chart.scales(&opts);
                    tracker.handle(PointerEvent::Enter, &scales, &chart.samples, &chart.unit);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    let opts = opts_for(size);
                    let scales = chart.scales(&opts);
                    tracker.handle(PointerEvent::Leave, &scales, &chart.samples, &chart.unit);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // Full-surface capture region, hit test before forwarding
                    let capture = RectF32::from_ltwh(0.0, 0.0, size.width as f32, size.height as f32);
                    if capture.contains(position.x as f32, position.y as f32) {
                        let opts = opts_for(size);
                        let scales = chart.scales(&opts);
                        tracker.handle(
                            PointerEvent::Move {
                                x: position.x as f32 - insets.left as f32,
                                y: position.y as f32 - insets.top as f32,
                            },
                            &scales,
                            &chart.samples,
                            &chart.unit,
                        );
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let mut opts = opts_for(size);
                opts.hover = Some(tracker.state().clone());

                // Render to RGBA and convert to packed u32 for softbuffer
                let (rgba, _, _, _) = match chart.render_to_rgba8(&opts) {
                    Ok(frame) => frame,
                    Err(e) => {
                        eprintln!("render error: {e:?}");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        eprintln!("frame error: {e:?}");
                        return;
                    }
                };
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    let a = px[3] as u32;
                    frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

fn opts_for(size: winit::dpi::PhysicalSize<u32>) -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = size.width.max(1) as i32;
    opts.height = size.height.max(1) as i32;
    opts
}

fn load_observations_csv(path: &Path) -> Vec<Sample> {
    let mut rdr = match csv::ReaderBuilder::new().has_headers(true).from_path(path) {
        Ok(rdr) => rdr,
        Err(e) => {
            eprintln!("open csv: {e}");
            return Vec::new();
        }
    };
    let headers = match rdr.headers() {
        Ok(h) => h.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>(),
        Err(_) => return Vec::new(),
    };
    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };
    let i_time = idx(&["timestamp", "time", "date", "datetime", "observed_at"]);
    let i_value = idx(&["temperature_f", "temperature", "temp", "value", "reading"]);

    let mut out: Vec<Sample> = Vec::new();
    for rec in rdr.records().flatten() {
        let at = i_time.and_then(|ix| rec.get(ix)).and_then(parse_instant);
        let value = i_value
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(at), Some(value)) = (at, value) {
            out.push(Sample::new(at, value));
        }
    }
    out.sort_by_key(|s| s.at);
    out
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return DateTime::from_timestamp(n / 1000, 0);
        }
        return DateTime::from_timestamp(n, 0);
    }
    None
}
