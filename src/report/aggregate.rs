use crate::model::{AnalyticsData, QuestionKind, Report, Response, Survey};
use crate::report::utility::mean;
use std::collections::BTreeMap;

/// Aggregates a window of [`Response`] records into a [`Report`].
///
/// Radio questions yield the arithmetic mean of their numeric answers;
/// Dropdown questions yield the share each defined choice received. Malformed
/// data never fails the build: unusable answers are excluded from the sample
/// and a question with no usable data is omitted from the report entirely.
///
/// The result depends only on the survey and the multiset of responses, not
/// on response order.
pub fn build_report(survey: &Survey, responses: &[Response]) -> Report {
    let mut report = Report::new(survey.id.clone());
    if responses.is_empty() {
        return report;
    }

    for question in &survey.questions {
        // A question without a title has no join key into the responses.
        let Some(title) = question.title.as_deref() else {
            continue;
        };

        match &question.kind {
            QuestionKind::Radio => {
                if let Some(data) = average(title, responses) {
                    report.averages.insert(title.to_string(), data);
                }
            }
            QuestionKind::Dropdown { choices } => {
                report
                    .percentages
                    .insert(title.to_string(), percentages(title, choices, responses));
            }
            // No analytics for free-text or multi-select questions.
            QuestionKind::ShortAnswer | QuestionKind::Paragraph | QuestionKind::Checkbox => {}
        }
    }

    report
}

/// Mean of the answers to `title` that parse as numbers.
///
/// Absent, empty, and unparseable answers are excluded from both the sum and
/// the effective sample size. Returns `None` when no answer qualifies, so the
/// question is omitted rather than reported as zero.
fn average(title: &str, responses: &[Response]) -> Option<AnalyticsData> {
    let values: Vec<f64> = responses
        .iter()
        .filter_map(|response| response.answer(title))
        .filter_map(|answer| answer.parse::<f64>().ok())
        .collect();

    if values.is_empty() {
        return None;
    }
    Some(AnalyticsData::new(mean(&values)))
}

/// Share of respondents per defined choice for a Dropdown question.
///
/// Every defined choice gets an entry. Answers that match no defined choice
/// are excluded from the total, so the matched shares sum to 1 whenever at
/// least one answer matched; with no matches all shares stay 0.
fn percentages(
    title: &str,
    choices: &[String],
    responses: &[Response],
) -> BTreeMap<String, AnalyticsData> {
    let mut counts: BTreeMap<&str, usize> = choices.iter().map(|c| (c.as_str(), 0)).collect();
    let mut total = 0usize;

    for response in responses {
        let Some(answer) = response.answer(title) else {
            continue;
        };
        if let Some(count) = counts.get_mut(answer) {
            *count += 1;
            total += 1;
        }
    }

    counts
        .into_iter()
        .map(|(choice, count)| {
            let datum = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            (choice.to_string(), AnalyticsData::new(datum))
        })
        .collect()
}
