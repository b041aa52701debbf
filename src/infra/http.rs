use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

use survey_analytics::model::{Question, QuestionKind, Response, Survey};
use survey_analytics::providers::{ResponseStore, SurveyStore};

/// REST client for the survey and response services.
///
/// Both services sit behind the same base URL: surveys at
/// `/surveys/{id}`, responses at `/responses` with `survey`, `date`, and
/// `batch` query parameters.
#[derive(Clone)]
pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl SurveyStore for HttpStore {
    async fn survey(&self, survey_id: &str) -> Result<Survey> {
        let url = format!("{}/surveys/{}", self.base_url, survey_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send survey request: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Survey service returned status {}: {}",
                status,
                body
            ));
        }

        // Parse as generic JSON to extract only the fields we need
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse survey response: {}", e))?;

        Ok(parse_survey(survey_id, &json))
    }
}

#[async_trait]
impl ResponseStore for HttpStore {
    async fn responses(
        &self,
        survey_id: &str,
        day: Option<&str>,
        batch: Option<&str>,
    ) -> Result<Vec<Response>> {
        let mut query = vec![("survey", survey_id)];
        if let Some(day) = day {
            query.push(("date", day));
        }
        if let Some(batch) = batch {
            query.push(("batch", batch));
        }

        let url = format!("{}/responses", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send response request: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Response service returned status {}: {}",
                status,
                body
            ));
        }

        let json: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse response list: {}", e))?;

        Ok(json.iter().map(parse_response).collect())
    }
}

fn parse_survey(survey_id: &str, json: &serde_json::Value) -> Survey {
    let id = json["uuid"].as_str().unwrap_or(survey_id).to_string();
    let questions = json["questions"]
        .as_array()
        .map(|items| items.iter().filter_map(parse_question).collect())
        .unwrap_or_default();

    Survey { id, questions }
}

/// Reads one question object; unknown or missing question types are dropped.
fn parse_question(item: &serde_json::Value) -> Option<Question> {
    let title = item["title"].as_str().map(|s| s.to_string());
    let kind = match item["questionType"].as_str()? {
        "RADIO" => QuestionKind::Radio,
        "DROPDOWN" => {
            let choices = item["choices"]
                .as_array()
                .map(|values| {
                    values
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            QuestionKind::Dropdown { choices }
        }
        "SHORT_ANSWER" => QuestionKind::ShortAnswer,
        "PARAGRAPH" => QuestionKind::Paragraph,
        "CHECKBOX" => QuestionKind::Checkbox,
        _ => return None,
    };

    Some(Question { title, kind })
}

fn parse_response(item: &serde_json::Value) -> Response {
    let answers = item["responses"].as_object().map(|map| {
        map.iter()
            .filter_map(|(title, value)| value.as_str().map(|s| (title.clone(), s.to_string())))
            .collect::<BTreeMap<_, _>>()
    });

    Response { answers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_survey_keeps_question_order() {
        let json = json!({
            "uuid": "abc-123",
            "questions": [
                { "title": "Q1", "questionType": "RADIO" },
                { "title": "Q2", "questionType": "DROPDOWN", "choices": ["Red", "Blue"] },
            ]
        });

        let survey = parse_survey("fallback", &json);

        assert_eq!(survey.id, "abc-123");
        assert_eq!(survey.questions.len(), 2);
        assert_eq!(survey.questions[0].kind, QuestionKind::Radio);
        assert_eq!(
            survey.questions[1].kind,
            QuestionKind::Dropdown {
                choices: vec!["Red".to_string(), "Blue".to_string()]
            }
        );
    }

    #[test]
    fn test_parse_question_unknown_type_dropped() {
        let item = json!({ "title": "Q1", "questionType": "MATRIX" });
        assert!(parse_question(&item).is_none());
    }

    #[test]
    fn test_parse_question_missing_title_kept() {
        let item = json!({ "questionType": "RADIO" });
        let question = parse_question(&item).unwrap();
        assert_eq!(question.title, None);
    }

    #[test]
    fn test_parse_response_without_map() {
        let response = parse_response(&json!({ "batch": "batch-7" }));
        assert!(response.answers.is_none());
    }

    #[test]
    fn test_parse_response_with_answers() {
        let response = parse_response(&json!({
            "responses": { "Q1": "3", "Q2": "Red", "Q3": 7 }
        }));

        let answers = response.answers.unwrap();
        assert_eq!(answers.get("Q1").map(String::as_str), Some("3"));
        assert_eq!(answers.get("Q2").map(String::as_str), Some("Red"));
        // Non-string answers are dropped, not stringified.
        assert!(!answers.contains_key("Q3"));
    }
}
