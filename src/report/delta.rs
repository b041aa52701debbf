use crate::error::ReportError;
use crate::model::Report;

/// Annotates `current` with deltas against `previous` and returns it.
///
/// A previous report with both maps empty means no prior data exists; the
/// current report comes back untouched with every delta still unset.
///
/// Both reports must have been built from the same survey. A key present in
/// `current` but absent from `previous` is reported as a [`ReportError`]
/// naming the offending question (and choice, for percentages).
pub fn add_delta(previous: &Report, mut current: Report) -> Result<Report, ReportError> {
    if previous.averages.is_empty() && previous.percentages.is_empty() {
        return Ok(current);
    }

    for (title, data) in &mut current.averages {
        let prior = previous
            .averages
            .get(title)
            .ok_or_else(|| ReportError::MissingAverage(title.clone()))?;
        data.delta = Some(data.datum - prior.datum);
    }

    for (title, shares) in &mut current.percentages {
        let prior_shares = previous
            .percentages
            .get(title)
            .ok_or_else(|| ReportError::MissingChoiceMap(title.clone()))?;
        for (choice, data) in shares {
            let prior = prior_shares
                .get(choice)
                .ok_or_else(|| ReportError::MissingChoice {
                    question: title.clone(),
                    choice: choice.clone(),
                })?;
            data.delta = Some(data.datum - prior.datum);
        }
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalyticsData;
    use std::collections::BTreeMap;

    fn report_with_average(title: &str, datum: f64) -> Report {
        let mut report = Report::new("survey-1");
        report
            .averages
            .insert(title.to_string(), AnalyticsData::new(datum));
        report
    }

    fn report_with_shares(title: &str, shares: &[(&str, f64)]) -> Report {
        let mut report = Report::new("survey-1");
        let shares: BTreeMap<String, AnalyticsData> = shares
            .iter()
            .map(|(choice, datum)| (choice.to_string(), AnalyticsData::new(*datum)))
            .collect();
        report.percentages.insert(title.to_string(), shares);
        report
    }

    #[test]
    fn test_empty_previous_is_noop() {
        let previous = Report::new("survey-1");
        let current = report_with_average("Q1", 5.0);

        let annotated = add_delta(&previous, current.clone()).unwrap();

        assert_eq!(annotated, current);
        assert_eq!(annotated.averages["Q1"].delta, None);
    }

    #[test]
    fn test_average_delta() {
        let previous = report_with_average("Q1", 2.0);
        let current = report_with_average("Q1", 5.0);

        let annotated = add_delta(&previous, current).unwrap();

        assert_eq!(annotated.averages["Q1"].datum, 5.0);
        assert_eq!(annotated.averages["Q1"].delta, Some(3.0));
    }

    #[test]
    fn test_negative_delta() {
        let previous = report_with_average("Q1", 4.5);
        let current = report_with_average("Q1", 3.0);

        let annotated = add_delta(&previous, current).unwrap();

        assert_eq!(annotated.averages["Q1"].delta, Some(-1.5));
    }

    #[test]
    fn test_percentage_deltas_nested() {
        let previous = report_with_shares("Q2", &[("Red", 0.25), ("Blue", 0.75)]);
        let current = report_with_shares("Q2", &[("Red", 0.5), ("Blue", 0.5)]);

        let annotated = add_delta(&previous, current).unwrap();

        let shares = &annotated.percentages["Q2"];
        assert_eq!(shares["Red"].delta, Some(0.25));
        assert_eq!(shares["Blue"].delta, Some(-0.25));
    }

    #[test]
    fn test_missing_average_is_reported() {
        let previous = report_with_average("Q1", 2.0);
        let current = report_with_average("Q9", 5.0);

        let err = add_delta(&previous, current).unwrap_err();

        assert_eq!(err, ReportError::MissingAverage("Q9".to_string()));
    }

    #[test]
    fn test_missing_choice_map_is_reported() {
        let previous = report_with_average("Q1", 2.0);
        let mut current = report_with_average("Q1", 5.0);
        current.percentages.insert(
            "Q2".to_string(),
            BTreeMap::from([("Red".to_string(), AnalyticsData::new(1.0))]),
        );

        let err = add_delta(&previous, current).unwrap_err();

        assert_eq!(err, ReportError::MissingChoiceMap("Q2".to_string()));
    }

    #[test]
    fn test_missing_choice_is_reported() {
        let previous = report_with_shares("Q2", &[("Red", 1.0)]);
        let current = report_with_shares("Q2", &[("Red", 0.5), ("Blue", 0.5)]);

        let err = add_delta(&previous, current).unwrap_err();

        assert_eq!(
            err,
            ReportError::MissingChoice {
                question: "Q2".to_string(),
                choice: "Blue".to_string(),
            }
        );
    }
}
