// src/ui/history.rs
use eframe::egui;

use crate::chart::{self, ChartSlot};
use crate::render::NO_HISTORY;
use crate::state::AppState;

pub fn show_history_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Analysis History");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🗑 Clear History").clicked() {
                state.confirm_clear_history = true;
            }
        });
    });
    ui.add_space(8.0);

    if state.history.is_empty() {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(NO_HISTORY).weak());
        });
        return;
    }

    let blocks = state.history.clone(); // Clone to avoid borrow issues
    egui::ScrollArea::vertical()
        .id_source("history_scroll")
        .show(ui, |ui| {
            for (index, block) in blocks.iter().enumerate() {
                let slot = ChartSlot::History(index);
                egui::CollapsingHeader::new(&block.header)
                    .id_source(("history_entry", index))
                    .show(ui, |ui| {
                        ui.label(format!("Counts: {}", block.counts_line));
                        ui.add_space(4.0);

                        // The body only lays out while the block is open,
                        // so this is the first point where the chart
                        // surface has a committed, measurable size. The
                        // commit is keyed by slot, never by draw order.
                        if state.charts.spec(slot).is_none() {
                            state.charts.commit_scheduled(slot);
                        }
                        if let Some(spec) = state.charts.spec(slot) {
                            let spec = spec.clone();
                            chart::draw_bar_chart(ui, slot, &spec, 160.0);
                        }

                        ui.add_space(4.0);
                        ui.columns(2, |columns| {
                            columns[0].vertical(|ui| {
                                ui.label(egui::RichText::new("Top Positive").strong());
                                super::home::show_example_list(ui, &block.positive);
                            });
                            columns[1].vertical(|ui| {
                                ui.label(egui::RichText::new("Top Negative").strong());
                                super::home::show_example_list(ui, &block.negative);
                            });
                        });
                    });
                ui.add_space(4.0);
            }
        });
}
