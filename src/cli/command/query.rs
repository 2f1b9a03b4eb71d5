use anyhow::{Context, Result};

use crate::{
    cli::QueryArgs,
    query::{self, QueryConfig},
    reading::StationSummary,
    store,
};

use super::default_log_path;

pub fn query(args: &QueryArgs) -> Result<()> {
    let log_path = args.log.clone().unwrap_or_else(default_log_path);

    let records = store::read_records(&log_path)
        .with_context(|| format!("failed to read log `{}`", log_path.display()))?;
    let summaries: Vec<StationSummary> =
        records.iter().map(StationSummary::from_record).collect();

    let config = QueryConfig {
        min_low: args.min_low,
        min_high: args.min_high,
        max_high: args.max_high,
    };
    let matches = query::filter_summaries(summaries, &config);

    for summary in &matches {
        println!("{}", query::format_summary(summary));
    }
    println!("Results found: {}", matches.len());

    Ok(())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use std::io::Write;

    use tempfile::TempDir;

    use super::*;
    use crate::reading::StationRecord;

    // A log holding one well-formed record and one noise line yields exactly
    // one summary, and a high bound excludes a station whose hottest month
    // exceeds it.
    #[test]
    fn should_drive_log_through_summaries_and_bounds() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("normals-log.txt");

        let record = StationRecord {
            location: "Arizona".to_string(),
            station: "PHOENIX AP".to_string(),
            precip: None,
            min_temp: Some(vec![
                45.0, 48.0, 53.0, 60.0, 69.0, 78.0, 84.0, 83.0, 77.0, 65.0, 53.0, 45.0,
            ]),
            avg_temp: None,
            max_temp: Some(vec![
                67.0, 71.0, 77.0, 85.0, 95.0, 104.0, 105.0, 103.0, 99.0, 88.0, 75.0, 66.0,
            ]),
        };

        store::append_record(&log_path, &record).unwrap();
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&log_path)
            .unwrap();
        file.write_all(b"Arizona\tYUMA\t1,2\t3,4\n").unwrap();

        let records = store::read_records(&log_path).unwrap();
        assert_eq!(records.len(), 1);

        let summaries: Vec<StationSummary> =
            records.iter().map(StationSummary::from_record).collect();

        let config = QueryConfig {
            max_high: Some(100.0),
            ..Default::default()
        };

        assert!(query::filter_summaries(summaries, &config).is_empty());
    }
}
