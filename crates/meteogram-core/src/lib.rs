// File: crates/meteogram-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building
// and rendering interactive weather time-series charts.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod hover;
pub mod sample;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Chart, RenderOptions};
pub use hover::{HoverState, HoverTracker, PointerEvent};
pub use sample::{Sample, SampleSeries, SeriesError};
pub use scale::{Scales, TimeScale, ValueScale, TIME_BUCKET};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::Insets;
