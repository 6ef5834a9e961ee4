//! JSON reporter for machine-readable output

use crate::progress::ProgressReport;
use crate::quiz::QuizSession;
use crate::{Analysis, Difficulty};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report an analysis as JSON
    pub fn report(&self, analysis: &Analysis) -> String {
        self.serialize(analysis)
    }

    /// Report a finished quiz round as JSON
    pub fn report_quiz(&self, session: &QuizSession) -> String {
        self.serialize(&QuizSummary::from(session))
    }

    /// Report learning progress as JSON
    pub fn report_progress(&self, report: &ProgressReport) -> String {
        self.serialize(report)
    }

    fn serialize<T: Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of a finished quiz round
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub difficulty: Difficulty,
    pub score: usize,
    pub attempts: usize,
    pub total_questions: usize,
    pub success_rate: f64,
    pub next_difficulty: Difficulty,
}

impl From<&QuizSession> for QuizSummary {
    fn from(session: &QuizSession) -> Self {
        Self {
            difficulty: session.difficulty(),
            score: session.score(),
            attempts: session.attempts(),
            total_questions: session.total_questions(),
            success_rate: session.success_rate(),
            next_difficulty: session.recommended_difficulty(),
        }
    }
}
