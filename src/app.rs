// src/app.rs
use std::sync::mpsc::{channel, Receiver, Sender};
use eframe::egui;

use crate::client::{self, AnalysisClient, AnalysisOutcome};
use crate::state::{AppState, Screen};
use crate::ui::HomeAction;

pub struct SentiviewApp {
    state: AppState,
    client: AnalysisClient,
    outcome_tx: Sender<AnalysisOutcome>,
    outcome_rx: Receiver<AnalysisOutcome>,
}

impl SentiviewApp {
    pub fn new(state: AppState, client: AnalysisClient) -> Self {
        let (outcome_tx, outcome_rx) = channel();
        let mut state = state;
        state.restore_pending();
        Self { state, client, outcome_tx, outcome_rx }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.label(egui::RichText::new("Sentiview").strong());
            ui.separator();

            if ui
                .selectable_label(self.state.screen == Screen::Home, "Home")
                .clicked()
            {
                self.state.screen = Screen::Home;
            }
            // Entering History promotes the pending result, once per
            // activation, before the view renders.
            if ui
                .selectable_label(self.state.screen == Screen::History, "History")
                .clicked()
                && self.state.screen != Screen::History
            {
                self.state.activate_history();
            }
        });
    }

    fn start_analysis(&mut self, ctx: &egui::Context) {
        // Validated here as well so an empty submission never spawns a
        // worker; the client re-checks before any network activity.
        if self.state.input_text.trim().is_empty() {
            self.state.error_message =
                Some("Please enter tweets/opinions (one per line) before analyzing.".to_string());
            return;
        }

        self.state.in_flight += 1;
        client::spawn_analysis(
            self.client.clone(),
            self.state.input_text.clone(),
            self.outcome_tx.clone(),
            ctx.clone(),
        );
    }

    fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.in_flight = self.state.in_flight.saturating_sub(1);
            match outcome {
                Ok(result) => self.state.record_result(result),
                // Failed calls leave pending and history untouched.
                Err(e) => self.state.error_message = Some(e.to_string()),
            }
        }
    }

    fn show_error_modal(&mut self, ctx: &egui::Context) {
        let error_msg = self.state.error_message.clone(); // Clone first
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }

    fn show_clear_history_modal(&mut self, ctx: &egui::Context) {
        if !self.state.confirm_clear_history {
            return;
        }
        egui::Window::new("Clear History?")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Clear all saved history? This cannot be undone.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new("Clear").color(egui::Color32::RED))
                        .clicked()
                    {
                        self.state.clear_history();
                        self.state.confirm_clear_history = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.state.confirm_clear_history = false;
                    }
                });
            });
    }
}

impl eframe::App for SentiviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_outcomes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        let mut action = HomeAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.screen {
                Screen::Home => {
                    action = crate::ui::home::show_home_view(ui, &mut self.state);
                }
                Screen::History => {
                    crate::ui::history::show_history_view(ui, &mut self.state);
                }
            }
        });

        if action == HomeAction::Analyze {
            self.start_analysis(ctx);
        }

        self.show_error_modal(ctx);
        self.show_clear_history_modal(ctx);
    }
}
