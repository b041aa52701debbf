use thiserror::Error;

/// Failures the report pipeline reports as values rather than panics.
///
/// Delta comparison requires both reports to have been built from the same
/// survey; each variant names the key the previous-period report lacked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("previous report has no average for question `{0}`")]
    MissingAverage(String),
    #[error("previous report has no percentages for question `{0}`")]
    MissingChoiceMap(String),
    #[error("previous report has no percentage for choice `{choice}` of question `{question}`")]
    MissingChoice { question: String, choice: String },
}
