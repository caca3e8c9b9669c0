// src/chart.rs
use std::collections::HashMap;
use eframe::egui;
use tracing::debug;

use crate::model::SentimentCounts;

/// Stable logical slot a chart is bound to: the single home summary chart,
/// or one chart per history index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Home,
    History(usize),
}

/// Everything needed to draw one three-bar sentiment chart. Bar order is
/// fixed: Positive, Neutral, Negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub values: [u32; 3],
}

impl ChartSpec {
    pub fn from_counts(counts: &SentimentCounts) -> Self {
        Self { values: counts.as_bars() }
    }
}

/// Owned reference to a live chart resource. Stale handles (from a slot
/// that has since been replaced) are safe to dispose; it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle {
    slot: ChartSlot,
    generation: u64,
}

#[derive(Debug)]
struct ChartResource {
    generation: u64,
    spec: ChartSpec,
}

/// Resource table for chart instances, keyed by slot. The one lifecycle
/// rule: before a chart is (re)created on a slot, any chart already bound
/// to that exact slot is disposed first. `create` enforces this, so after
/// any sequence of creates there is exactly one live chart per slot.
///
/// History charts are not created at projection time: their specs are
/// scheduled, then committed once the target surface has a committed,
/// measurable layout. Commits are keyed by slot, so they can arrive in
/// any order without cross-wiring charts between entries.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<ChartSlot, ChartResource>,
    scheduled: HashMap<ChartSlot, ChartSpec>,
    next_generation: u64,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart on `slot`, disposing whatever was bound there first.
    pub fn create(&mut self, slot: ChartSlot, spec: ChartSpec) -> ChartHandle {
        if let Some(prev) = self.handle_for(slot) {
            self.dispose(prev);
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        self.charts.insert(slot, ChartResource { generation, spec });
        debug!(?slot, generation, "chart created");
        ChartHandle { slot, generation }
    }

    /// Release a chart's resources. Idempotent: disposing a stale or
    /// already-disposed handle does nothing.
    pub fn dispose(&mut self, handle: ChartHandle) {
        let live = self
            .charts
            .get(&handle.slot)
            .map_or(false, |r| r.generation == handle.generation);
        if live {
            self.charts.remove(&handle.slot);
            debug!(slot = ?handle.slot, generation = handle.generation, "chart disposed");
        }
    }

    pub fn handle_for(&self, slot: ChartSlot) -> Option<ChartHandle> {
        self.charts
            .get(&slot)
            .map(|r| ChartHandle { slot, generation: r.generation })
    }

    pub fn spec(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.charts.get(&slot).map(|r| &r.spec)
    }

    pub fn live_count(&self) -> usize {
        self.charts.len()
    }

    /// Queue a chart for `slot`, to be created once the target surface is
    /// laid out. Rescheduling a slot replaces its queued spec.
    pub fn schedule(&mut self, slot: ChartSlot, spec: ChartSpec) {
        self.scheduled.insert(slot, spec);
    }

    /// Create the queued chart for `slot`, if any. Returns the handle when
    /// a chart was created.
    pub fn commit_scheduled(&mut self, slot: ChartSlot) -> Option<ChartHandle> {
        let spec = self.scheduled.remove(&slot)?;
        Some(self.create(slot, spec))
    }

    /// Dispose every history-slot chart and drop any queued history specs.
    /// Run before history re-renders or is cleared.
    pub fn dispose_history(&mut self) {
        let stale: Vec<ChartHandle> = self
            .charts
            .keys()
            .filter(|slot| matches!(slot, ChartSlot::History(_)))
            .copied()
            .filter_map(|slot| self.handle_for(slot))
            .collect();
        for handle in stale {
            self.dispose(handle);
        }
        self.scheduled.retain(|slot, _| !matches!(slot, ChartSlot::History(_)));
    }
}

// Fixed color mapping: positive=teal, neutral=amber, negative=crimson.
const BAR_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(0x20, 0xc9, 0x97),
    egui::Color32::from_rgb(0xff, 0xc1, 0x07),
    egui::Color32::from_rgb(0xdc, 0x35, 0x45),
];
const BAR_NAMES: [&str; 3] = ["Positive", "Neutral", "Negative"];

pub fn draw_bar_chart(ui: &mut egui::Ui, slot: ChartSlot, spec: &ChartSpec, height: f32) {
    let plot = egui_plot::Plot::new(("sentiment_chart", slot))
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(0.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = spec
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                egui_plot::Bar::new(i as f64, *value as f64)
                    .name(BAR_NAMES[i])
                    .width(0.6)
                    .fill(BAR_COLORS[i])
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars));
    });
}
