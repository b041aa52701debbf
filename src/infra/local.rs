//! Local-file stores for offline analysis.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use survey_analytics::model::{Response, Survey};

/// Loads a survey definition from a JSON file.
pub fn load_survey(path: &Path) -> Result<Survey> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let survey = serde_json::from_reader(file)
        .with_context(|| format!("invalid survey JSON in {}", path.display()))?;
    Ok(survey)
}

/// Loads responses from a CSV export.
///
/// The header row holds question titles; each subsequent row is one
/// respondent. Empty cells become absent answers.
pub fn load_responses(path: &Path) -> Result<Vec<Response>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();

    let mut responses = Vec::new();
    for record in reader.records() {
        let record = record?;
        let answers = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(title, value)| (title.to_string(), value.to_string()))
            .collect();
        responses.push(Response {
            answers: Some(answers),
        });
    }

    Ok(responses)
}
