//! Composes the survey and response stores into report requests.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use tracing::info;

use crate::model::Report;
use crate::providers::{ResponseStore, SurveyStore};
use crate::report::aggregate::build_report;
use crate::report::delta::add_delta;

/// Date token format accepted by the response store.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds reports by fetching a survey and its response windows from the
/// configured stores. The aggregation itself stays pure and synchronous;
/// only the store calls are async.
pub struct ReportService<S, R> {
    surveys: S,
    responses: R,
}

impl<S: SurveyStore, R: ResponseStore> ReportService<S, R> {
    pub fn new(surveys: S, responses: R) -> Self {
        Self { surveys, responses }
    }

    /// Builds a single-window report over all responses for the survey.
    /// No deltas are computed.
    #[tracing::instrument(skip(self))]
    pub async fn report(&self, survey_id: &str) -> Result<Report> {
        let (survey, responses) = tokio::try_join!(
            self.surveys.survey(survey_id),
            self.responses.responses(survey_id, None, None),
        )?;

        info!(responses = responses.len(), "Response window fetched");
        Ok(build_report(&survey, &responses))
    }

    /// Builds the report for `day` with deltas against the window seven
    /// calendar days earlier, re-querying the store with the same filters.
    ///
    /// An unparseable day token is a fatal input-validation error.
    #[tracing::instrument(skip(self))]
    pub async fn report_for_day(
        &self,
        survey_id: &str,
        day: &str,
        batch: Option<&str>,
    ) -> Result<Report> {
        let date = NaiveDate::parse_from_str(day, DATE_FORMAT)
            .with_context(|| format!("invalid day `{day}`, expected yyyy-MM-dd"))?;
        let prior_day = (date - Days::new(7)).format(DATE_FORMAT).to_string();

        let (survey, current, previous) = tokio::try_join!(
            self.surveys.survey(survey_id),
            self.responses.responses(survey_id, Some(day), batch),
            self.responses.responses(survey_id, Some(&prior_day), batch),
        )?;

        info!(
            current = current.len(),
            previous = previous.len(),
            prior_day,
            "Response windows fetched"
        );

        let previous = build_report(&survey, &previous);
        let current = build_report(&survey, &current);
        Ok(add_delta(&previous, current)?)
    }
}
