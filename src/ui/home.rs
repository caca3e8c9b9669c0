// src/ui/home.rs
use eframe::egui;

use crate::chart::{self, ChartSlot};
use crate::render::ListRow;
use crate::state::AppState;

/// Commands the home view hands back to the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    None,
    Analyze,
}

pub fn show_home_view(ui: &mut egui::Ui, state: &mut AppState) -> HomeAction {
    let mut action = HomeAction::None;

    ui.heading("Tweet Sentiment Analysis");
    ui.add_space(4.0);
    ui.label("Paste tweets or opinions, one per line, then analyze.");
    ui.add_space(8.0);

    ui.add(
        egui::TextEdit::multiline(&mut state.input_text)
            .hint_text("One tweet/opinion per line")
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let analyzing = state.in_flight > 0;
        if ui.add_enabled(!analyzing, egui::Button::new("Analyze")).clicked() {
            action = HomeAction::Analyze;
        }
        if ui.button("Clear").clicked() {
            state.clear_current();
        }
        if analyzing {
            ui.spinner();
            ui.label("Analyzing…");
        }
    });

    if state.summary.is_some() {
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);
        show_result_section(ui, state);
    }

    action
}

fn show_result_section(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(summary) = state.summary.clone() else { return }; // Clone to avoid borrow issues

    ui.heading(&summary.headline);
    ui.add_space(8.0);

    if let Some(spec) = state.charts.spec(ChartSlot::Home) {
        let spec = spec.clone();
        chart::draw_bar_chart(ui, ChartSlot::Home, &spec, 200.0);
    }

    ui.add_space(8.0);
    ui.columns(2, |columns| {
        columns[0].vertical(|ui| {
            ui.label(egui::RichText::new("Top Positive").strong());
            show_example_list(ui, &summary.positive);
        });
        columns[1].vertical(|ui| {
            ui.label(egui::RichText::new("Top Negative").strong());
            show_example_list(ui, &summary.negative);
        });
    });
}

pub(super) fn show_example_list(ui: &mut egui::Ui, rows: &[ListRow]) {
    for row in rows {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            if row.placeholder {
                ui.label(egui::RichText::new(&row.text).weak());
            } else {
                ui.label(&row.text);
            }
        });
    }
}
