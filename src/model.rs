//! Data types shared by the aggregation pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A survey definition: a stable identifier plus its ordered questions.
///
/// Surveys are owned by the external survey store and immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    pub questions: Vec<Question>,
}

/// A single survey item.
///
/// The title doubles as the join key into response data, and the upstream
/// schema allows it to be missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub title: Option<String>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// The closed set of question types in the survey schema.
///
/// Analytics only computes statistics for [`QuestionKind::Radio`] (numeric
/// average) and [`QuestionKind::Dropdown`] (choice percentages); the free-text
/// and multi-select kinds exist in the schema but yield no analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    /// Single choice rendered as free text; answers are expected to be numeric.
    Radio,
    /// Single choice from a fixed, ordered set of labels.
    Dropdown { choices: Vec<String> },
    ShortAnswer,
    Paragraph,
    Checkbox,
}

/// One respondent's full set of answers, keyed by question title.
///
/// The whole answer map may be absent for malformed records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    pub answers: Option<BTreeMap<String, String>>,
}

impl Response {
    /// Looks up the answer for a question title.
    ///
    /// Returns `None` when the answer map is absent, the title has no entry,
    /// or the stored answer is the empty string. This is the single "absent
    /// answer" case the aggregation routines handle.
    pub fn answer(&self, title: &str) -> Option<&str> {
        self.answers
            .as_ref()?
            .get(title)
            .map(String::as_str)
            .filter(|answer| !answer.is_empty())
    }
}

/// A single numeric result plus its period-over-period change.
///
/// `delta` stays `None` until the delta pass compares two reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub datum: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

impl AnalyticsData {
    pub fn new(datum: f64) -> Self {
        Self { datum, delta: None }
    }
}

/// Aggregated analytics for one survey over one response window.
///
/// `averages` holds one entry per Radio question that produced at least one
/// numeric answer; `percentages` holds, per Dropdown question, one entry per
/// defined choice. `BTreeMap` keeps serialization order deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub survey_id: String,
    pub averages: BTreeMap<String, AnalyticsData>,
    pub percentages: BTreeMap<String, BTreeMap<String, AnalyticsData>>,
}

impl Report {
    pub fn new(survey_id: impl Into<String>) -> Self {
        Self {
            survey_id: survey_id.into(),
            averages: BTreeMap::new(),
            percentages: BTreeMap::new(),
        }
    }
}
