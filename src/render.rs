// src/render.rs
use crate::chart::ChartSpec;
use crate::model::{AnalysisResult, ExampleItem, HistoryEntry};
use crate::sanitize::escape;

pub const NO_POSITIVE: &str = "No positive tweets found.";
pub const NO_NEGATIVE: &str = "No negative tweets found.";
pub const NO_HISTORY: &str = "No history yet. Run an analysis and open this view again to save it here.";

/// One line of an example list. Placeholder rows are rendered muted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub text: String,
    pub placeholder: bool,
}

/// View model for one result: everything the summary surface shows, with
/// all free text already sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub headline: String,
    pub chart: ChartSpec,
    pub positive: Vec<ListRow>,
    pub negative: Vec<ListRow>,
}

/// View model for one collapsible history block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryBlock {
    pub header: String,
    pub counts_line: String,
    pub chart: ChartSpec,
    pub positive: Vec<ListRow>,
    pub negative: Vec<ListRow>,
}

/// Project a result into its summary view.
pub fn summarize(result: &AnalysisResult) -> SummaryView {
    SummaryView {
        headline: format!("Overall Sentiment: {}", result.overall.display()),
        chart: ChartSpec::from_counts(&result.counts),
        positive: example_rows(&result.top_positive, NO_POSITIVE),
        negative: example_rows(&result.top_negative, NO_NEGATIVE),
    }
}

/// Project history entries into collapsible blocks, in list order.
pub fn history_blocks(entries: &[HistoryEntry]) -> Vec<HistoryBlock> {
    entries
        .iter()
        .map(|entry| HistoryBlock {
            header: format!(
                "{} - Overall: {}",
                escape(&entry.timestamp),
                entry.result.overall.display()
            ),
            counts_line: format!(
                "{} Positive, {} Neutral, {} Negative",
                entry.result.counts.positive,
                entry.result.counts.neutral,
                entry.result.counts.negative
            ),
            chart: ChartSpec::from_counts(&entry.result.counts),
            positive: example_rows(&entry.result.top_positive, NO_POSITIVE),
            negative: example_rows(&entry.result.top_negative, NO_NEGATIVE),
        })
        .collect()
}

fn example_rows(items: &[ExampleItem], placeholder: &str) -> Vec<ListRow> {
    if items.is_empty() {
        return vec![ListRow { text: escape(placeholder), placeholder: true }];
    }
    items
        .iter()
        .map(|item| ListRow { text: escape(&item.text), placeholder: false })
        .collect()
}
