// src/client.rs
use std::sync::mpsc::Sender;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{AnalysisResult, ExampleItem, Sentiment, SentimentCounts};

/// User-visible failure modes of an analysis request. Only these three
/// reach the user; persistence and disposal problems are recovered
/// elsewhere and never surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Please enter tweets/opinions (one per line) before analyzing.")]
    EmptyInput,
    /// The service answered with a non-success status and (maybe) a message.
    #[error("{0}")]
    Service(String),
    /// Unreachable service or a response we could not make sense of.
    #[error("Unexpected error while analyzing. Check the analysis service and try again.")]
    Transport,
}

pub type AnalysisOutcome = Result<AnalysisResult, AnalyzeError>;

/// Raw wire shapes. `overall` arrives as a free-form label and is
/// normalized through `Sentiment::parse` rather than trusted verbatim.
#[derive(Debug, Deserialize)]
struct WireResult {
    overall: String,
    counts: SentimentCounts,
    #[serde(default)]
    top_positive: Vec<ExampleItem>,
    #[serde(default)]
    top_negative: Vec<ExampleItem>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    error: Option<String>,
}

const GENERIC_SERVICE_ERROR: &str = "Error analyzing text.";

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl AnalysisClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Send the literal text to the analysis service and parse the reply.
    /// Empty (after trim) input is rejected locally, before any network
    /// activity. Never mutates any persistent state.
    pub fn analyze(&self, text: &str) -> AnalysisOutcome {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        debug!(endpoint = %self.endpoint, "sending analysis request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .map_err(|e| {
                warn!(error = %e, "analysis request failed");
                AnalyzeError::Transport
            })?;

        if !response.status().is_success() {
            let message = response
                .json::<WireError>()
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
            return Err(AnalyzeError::Service(message));
        }

        let wire: WireResult = response.json().map_err(|e| {
            warn!(error = %e, "analysis response did not parse");
            AnalyzeError::Transport
        })?;
        parse_wire_result(wire)
    }
}

fn parse_wire_result(wire: WireResult) -> AnalysisOutcome {
    let overall = Sentiment::parse(&wire.overall).ok_or_else(|| {
        warn!(label = %wire.overall, "service returned an unrecognized overall label");
        AnalyzeError::Transport
    })?;

    Ok(AnalysisResult {
        overall,
        counts: wire.counts,
        top_positive: wire.top_positive,
        top_negative: wire.top_negative,
    })
}

/// Run one analysis on a worker thread and hand the outcome back over the
/// channel, waking the UI. No retry, no cancellation; if two calls are in
/// flight the outcomes arrive in completion order and the last one to be
/// recorded as pending wins.
pub fn spawn_analysis(
    client: AnalysisClient,
    text: String,
    tx: Sender<AnalysisOutcome>,
    ctx: eframe::egui::Context,
) {
    std::thread::spawn(move || {
        let outcome = client.analyze(&text);
        // The receiver may be gone during shutdown; nothing to do then.
        let _ = tx.send(outcome);
        ctx.request_repaint();
    });
}
