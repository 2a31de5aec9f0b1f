// File: crates/demo/src/main.rs
// Summary: Demo loads an observations CSV and renders the meteogram to PNGs,
// including one frame with a simulated pointer hover.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use meteogram_core::{Chart, HoverTracker, PointerEvent, RenderOptions, Sample, SampleSeries};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the bundled sample day
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/observations_2023-10-01.csv".to_string());
    let path = PathBuf::from(&raw);
    println!("Using input file: {}", path.display());

    let samples = load_observations_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} observations", samples.len());

    if samples.is_empty() {
        anyhow::bail!("no observations loaded - check headers/delimiter.");
    }

    let series = SampleSeries::try_from_samples(samples).context("observations out of order")?;
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        println!(
            "Time range: {} .. {} ({} rows)",
            first.at, last.at, series.len()
        );
    }

    let chart = Chart::new(series, "F");

    // Optional second arg: theme name (dark/light/high-contrast-dark)
    let theme = std::env::args()
        .nth(2)
        .map(|name| meteogram_core::theme::find(&name))
        .unwrap_or_else(meteogram_core::Theme::dark);
    let mut opts = RenderOptions::default();
    opts.theme = theme;

    // Plain frame
    let out = out_name_with(&path, "chart");
    chart.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());

    // Hover frame: simulate the pointer at mid-chart
    let scales = chart.scales(&opts);
    let mut tracker = HoverTracker::new();
    tracker.handle(PointerEvent::Enter, &scales, &chart.samples, &chart.unit);
    let state = tracker
        .handle(
            PointerEvent::Move { x: opts.width as f32 * 0.5, y: opts.height as f32 * 0.5 },
            &scales,
            &chart.samples,
            &chart.unit,
        )
        .clone();
    println!("Hover readout: {}", state.readout);

    let mut hover_opts = RenderOptions::default();
    hover_opts.theme = theme;
    hover_opts.hover = Some(state);
    let out_hover = out_name_with(&path, "hover");
    chart.render_to_png(&hover_opts, &out_hover)?;
    println!("Wrote {}", out_hover.display());

    Ok(())
}

/// Produce output file name like target/out/meteogram_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("meteogram");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("meteogram_{}_{}.png", stem, suffix));
    out
}

/// Load observation rows into Samples. Header names are matched loosely so
/// exports from different stations work unchanged.
fn load_observations_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

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

    if i_time.is_none() || i_value.is_none() {
        println!("Warning: Could not find timestamp/value columns.");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let at = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_instant);
        let value = i_value
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(at), Some(value)) = (at, value) {
            out.push(Sample::new(at, value));
        }
    }
    out.sort_by_key(|s| s.at);
    Ok(out)
}

/// Accept RFC 3339 strings or epoch seconds/milliseconds.
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
            return DateTime::from_timestamp(n / 1000, 0); // epoch ms -> sec
        }
        return DateTime::from_timestamp(n, 0);
    }
    None
}
