// src/model.rs
use serde::{Serialize, Deserialize};

/// Closed set of sentiment labels. Remote labels are normalized through
/// `parse`; anything outside this set is rejected at the wire boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Case-insensitive parse of a wire label.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    /// Display casing rule: sentiment labels are shown uppercased.
    pub fn display(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentCounts {
    /// Fixed bar order: Positive, Neutral, Negative.
    pub fn as_bars(&self) -> [u32; 3] {
        [self.positive, self.neutral, self.negative]
    }
}

/// One example opinion from the service's top-positive/top-negative lists.
/// The wire field is named `tweet`; extra per-item fields (score, per-line
/// sentiment) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleItem {
    #[serde(alias = "tweet")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall: Sentiment,
    pub counts: SentimentCounts,
    #[serde(default)]
    pub top_positive: Vec<ExampleItem>,
    #[serde(default)]
    pub top_negative: Vec<ExampleItem>,
}

/// A result plus the local time it was produced. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub result: AnalysisResult,
}

impl HistoryEntry {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Sentiment::parse("neutral"), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::parse("Positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::parse("NEGATIVE"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::parse(" neutral "), Some(Sentiment::Neutral));
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(Sentiment::parse("mixed"), None);
        assert_eq!(Sentiment::parse(""), None);
    }

    #[test]
    fn display_is_uppercased() {
        assert_eq!(Sentiment::Neutral.display(), "NEUTRAL");
    }

    #[test]
    fn example_item_accepts_wire_field_name() {
        let item: ExampleItem = serde_json::from_str(r#"{"tweet": "I love this!"}"#).unwrap();
        assert_eq!(item.text, "I love this!");
    }

    #[test]
    fn counts_bar_order_is_fixed() {
        let counts = SentimentCounts { positive: 1, neutral: 0, negative: 2 };
        assert_eq!(counts.as_bars(), [1, 0, 2]);
    }
}
