// src/state.rs
use crate::chart::{ChartRegistry, ChartSlot};
use crate::model::AnalysisResult;
use crate::render::{self, HistoryBlock, SummaryView};
use crate::store::ResultStore;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    History,
}

// Core application state
pub struct AppState {
    pub screen: Screen,
    pub input_text: String,

    /// The on-screen summary of the current result, if any.
    pub summary: Option<SummaryView>,
    /// History blocks as of the last history-view activation.
    pub history: Vec<HistoryBlock>,

    pub error_message: Option<String>,
    pub confirm_clear_history: bool,
    /// Analysis requests currently in flight.
    pub in_flight: usize,

    pub store: ResultStore,
    pub charts: ChartRegistry,
}

impl AppState {
    pub fn new(store: ResultStore) -> Self {
        Self {
            screen: Screen::Home,
            input_text: String::new(),
            summary: None,
            history: Vec::new(),
            error_message: None,
            confirm_clear_history: false,
            in_flight: 0,
            store,
            charts: ChartRegistry::new(),
        }
    }

    /// Startup restore: if a pending entry survived the last run, show it
    /// on the home surface without promoting it.
    pub fn restore_pending(&mut self) {
        if let Some(entry) = self.store.get_pending() {
            self.show_summary(&entry.result);
        }
    }

    /// A successful analysis becomes the pending result and the on-screen
    /// summary. When outcomes of racing requests arrive out of order, the
    /// last one recorded here wins.
    pub fn record_result(&mut self, result: AnalysisResult) {
        self.store.set_pending(result.clone());
        self.show_summary(&result);
    }

    /// Project the result and replace the home chart. The registry
    /// disposes the previous home chart before creating the new one.
    pub fn show_summary(&mut self, result: &AnalysisResult) {
        let view = render::summarize(result);
        self.charts.create(ChartSlot::Home, view.chart.clone());
        self.summary = Some(view);
    }

    /// Entering the history view: promote the pending entry (exactly once
    /// per activation), rebuild the blocks, and reschedule per-index
    /// charts. Prior history charts are disposed before their slots are
    /// reused; the charts themselves are created lazily, once each block's
    /// surface has a committed layout.
    pub fn activate_history(&mut self) {
        let entries = self.store.promote_pending_to_history();
        self.charts.dispose_history();
        self.history = render::history_blocks(&entries);
        for (index, block) in self.history.iter().enumerate() {
            self.charts.schedule(ChartSlot::History(index), block.chart.clone());
        }
        self.screen = Screen::History;
    }

    /// Clear the input box and the on-screen result. Pending and history
    /// are untouched: the result still promotes on the next history visit.
    pub fn clear_current(&mut self) {
        self.input_text.clear();
        self.summary = None;
        if let Some(handle) = self.charts.handle_for(ChartSlot::Home) {
            self.charts.dispose(handle);
        }
    }

    /// Erase pending and history. The caller has already confirmed.
    pub fn clear_history(&mut self) {
        self.store.clear_all();
        self.charts.dispose_history();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExampleItem, Sentiment, SentimentCounts};
    use crate::store::MemoryStorage;

    fn state() -> AppState {
        AppState::new(ResultStore::new(Box::new(MemoryStorage::new())))
    }

    fn love_hate_result() -> AnalysisResult {
        AnalysisResult {
            overall: Sentiment::Neutral,
            counts: SentimentCounts { positive: 1, neutral: 0, negative: 1 },
            top_positive: vec![ExampleItem { text: "I love this!".into() }],
            top_negative: vec![ExampleItem { text: "I hate this.".into() }],
        }
    }

    #[test]
    fn recorded_result_shows_summary_and_home_chart() {
        let mut state = state();
        state.record_result(love_hate_result());

        let summary = state.summary.as_ref().expect("summary view");
        assert_eq!(summary.headline, "Overall Sentiment: NEUTRAL");
        assert_eq!(summary.chart.values, [1, 0, 1]);
        assert!(state.charts.spec(ChartSlot::Home).is_some());
    }

    #[test]
    fn two_recorded_results_leave_one_live_home_chart() {
        let mut state = state();
        state.record_result(love_hate_result());
        state.record_result(love_hate_result());

        assert_eq!(state.charts.live_count(), 1);
    }

    #[test]
    fn history_activation_promotes_exactly_once() {
        let mut state = state();
        state.record_result(love_hate_result());

        state.activate_history();
        assert_eq!(state.history.len(), 1);
        assert!(state.history[0].header.contains("NEUTRAL"));

        // A second visit with no new analysis must not duplicate the entry.
        state.activate_history();
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn history_charts_are_created_on_commit_not_activation() {
        let mut state = state();
        state.record_result(love_hate_result());
        state.activate_history();

        assert!(state.charts.spec(ChartSlot::History(0)).is_none());
        state.charts.commit_scheduled(ChartSlot::History(0));
        assert_eq!(
            state.charts.spec(ChartSlot::History(0)).map(|s| s.values),
            Some([1, 0, 1])
        );
    }

    #[test]
    fn clear_current_keeps_pending_for_later_promotion() {
        let mut state = state();
        state.input_text = "I love this!".into();
        state.record_result(love_hate_result());

        state.clear_current();

        assert!(state.input_text.is_empty());
        assert!(state.summary.is_none());
        assert!(state.charts.spec(ChartSlot::Home).is_none());

        state.activate_history();
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn clear_history_erases_everything() {
        let mut state = state();
        state.record_result(love_hate_result());
        state.activate_history();
        state.charts.commit_scheduled(ChartSlot::History(0));

        state.record_result(love_hate_result());
        state.clear_history();

        assert!(state.history.is_empty());
        assert!(state.store.get_history().is_empty());
        assert!(state.store.get_pending().is_none());
        assert!(state.charts.spec(ChartSlot::History(0)).is_none());
    }

    #[test]
    fn restore_shows_pending_without_promoting() {
        let mut state = state();
        state.store.set_pending(love_hate_result());

        state.restore_pending();

        assert!(state.summary.is_some());
        assert!(state.store.get_pending().is_some());
        assert!(state.store.get_history().is_empty());
    }
}
