//! Per-station scalar reduction of the twelve monthly readings.

use super::StationRecord;

/// Derived summary for one station; never persisted. A summary field is
/// `None` whenever its source series is absent or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSummary {
    pub location: String,
    pub station: String,
    pub precip: Option<f32>,
    pub min_low: Option<f32>,
    pub max_low: Option<f32>,
    pub min_high: Option<f32>,
    pub max_high: Option<f32>,
}

impl StationSummary {
    pub fn from_record(record: &StationRecord) -> Self {
        StationSummary {
            location: record.location.clone(),
            station: record.station.clone(),
            precip: mean(&record.precip),
            min_low: series_min(&record.min_temp),
            max_low: series_max(&record.min_temp),
            min_high: series_min(&record.max_temp),
            max_high: series_max(&record.max_temp),
        }
    }
}

fn mean(series: &Option<Vec<f32>>) -> Option<f32> {
    let values = series.as_deref()?;
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f32>() / values.len() as f32)
}

// `f32::min`/`f32::max` discard NaN operands; a NaN placeholder from a
// malformed table token has to survive into the summary.
fn series_min(series: &Option<Vec<f32>>) -> Option<f32> {
    reduce(series, |best, v| {
        if v.is_nan() || best.is_nan() {
            f32::NAN
        } else {
            best.min(v)
        }
    })
}

fn series_max(series: &Option<Vec<f32>>) -> Option<f32> {
    reduce(series, |best, v| {
        if v.is_nan() || best.is_nan() {
            f32::NAN
        } else {
            best.max(v)
        }
    })
}

fn reduce(series: &Option<Vec<f32>>, f: impl Fn(f32, f32) -> f32) -> Option<f32> {
    series.as_deref()?.iter().copied().reduce(f)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    fn record_fixture() -> StationRecord {
        StationRecord {
            location: "Alabama".to_string(),
            station: "BIRMINGHAM AP".to_string(),
            precip: Some(vec![
                1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
            ]),
            min_temp: Some(vec![
                33.0, 30.0, 42.0, 49.0, 58.0, 66.0, 70.0, 69.0, 63.0, 51.0, 42.0, 35.0,
            ]),
            avg_temp: None,
            max_temp: Some(vec![
                60.0, 62.0, 66.0, 74.0, 81.0, 87.0, 90.0, 90.0, 85.0, 75.0, 64.0, 55.0,
            ]),
        }
    }

    #[test]
    fn should_reduce_series_to_scalars() {
        let summary = StationSummary::from_record(&record_fixture());

        assert_eq!(summary.precip, Some(6.5));
        assert_eq!(summary.min_low, Some(30.0));
        assert_eq!(summary.max_low, Some(70.0));
        assert_eq!(summary.min_high, Some(55.0));
        assert_eq!(summary.max_high, Some(90.0));
    }

    #[test]
    fn should_leave_absent_series_absent() {
        let mut record = record_fixture();
        record.precip = None;

        let summary = StationSummary::from_record(&record);

        assert_eq!(summary.precip, None);
        assert_eq!(summary.min_low, Some(30.0));
    }

    #[test]
    fn should_treat_empty_series_as_absent() {
        let mut record = record_fixture();
        record.max_temp = Some(Vec::new());

        let summary = StationSummary::from_record(&record);

        assert_eq!(summary.min_high, None);
        assert_eq!(summary.max_high, None);
    }

    #[test]
    fn should_propagate_nan_placeholders() {
        let mut record = record_fixture();
        if let Some(values) = record.min_temp.as_mut() {
            values[4] = f32::NAN;
        }

        let summary = StationSummary::from_record(&record);

        assert!(summary.min_low.unwrap().is_nan());
        assert!(summary.max_low.unwrap().is_nan());
        assert_eq!(summary.min_high, Some(55.0));
    }
}
