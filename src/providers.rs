//! Traits for the external survey and response stores.

use anyhow::Result;

use crate::model::{Response, Survey};

/// Abstraction over the survey definition store.
#[async_trait::async_trait]
pub trait SurveyStore {
    /// Returns the survey with the given identifier.
    async fn survey(&self, survey_id: &str) -> Result<Survey>;
}

/// Abstraction over the response store.
#[async_trait::async_trait]
pub trait ResponseStore {
    /// Returns the responses recorded for a survey, optionally restricted to
    /// a single day (`yyyy-MM-dd` token) and/or a single batch.
    async fn responses(
        &self,
        survey_id: &str,
        day: Option<&str>,
        batch: Option<&str>,
    ) -> Result<Vec<Response>>;
}
