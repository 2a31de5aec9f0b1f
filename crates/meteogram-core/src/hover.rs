// File: crates/meteogram-core/src/hover.rs
// Summary: Pointer tracker: Idle/Hovering state machine driving the
// highlight ring and value readout from pointer events.

use crate::sample::SampleSeries;
use crate::scale::Scales;

/// Pointer event over the chart's capture region, in surface-local pixels
/// relative to the plot origin.
#[derive(Clone, Copy, Debug)]
pub enum PointerEvent {
    Enter,
    Move { x: f32, y: f32 },
    Leave,
}

/// Transient hover result derived per pointer-move. `index` stays `None`
/// until the first Move positions the highlight; on Leave only visibility
/// toggles, the last position is retained for cheap re-entry.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    pub visible: bool,
    pub index: Option<usize>,
    pub px: f32,
    pub py: f32,
    pub readout: String,
}

/// Idle/Hovering tracker. Holds no scale references; scales are passed per
/// event so a rebuilt chart can never be observed through a stale mapping.
#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Advance the state machine. On Move: invert the pointer x through the
    /// time scale, bisect to the first sample not earlier than that instant
    /// (clamped at the upper boundary), and place the highlight and readout
    /// at that sample's mapped position.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        scales: &Scales,
        series: &SampleSeries,
        unit: &str,
    ) -> &HoverState {
        match event {
            PointerEvent::Enter => {
                self.state.visible = true;
            }
            PointerEvent::Leave => {
                self.state.visible = false;
            }
            PointerEvent::Move { x, .. } => {
                let x0 = scales.time.from_px(x);
                if let Some(i) = series.nearest_index(x0) {
                    let sample = &series.samples()[i];
                    self.state.index = Some(i);
                    self.state.px = scales.time.to_px(sample.at);
                    self.state.py = scales.value.to_px(sample.value);
                    self.state.readout = format!(
                        "{}{} ({})",
                        sample.value,
                        unit,
                        sample.at.format("%-I:%M:%S %p")
                    );
                }
            }
        }
        &self.state
    }
}
