//! Append-only log of harvested station records.
//!
//! One record per line, six tab-separated fields. This file is the only
//! state shared between the harvest and query phases.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::reading::StationRecord;

/// Append one record. The file is opened and closed per call so no handle is
/// held across the harvester's await points.
pub fn append_record(path: &Path, record: &StationRecord) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", record.to_line())?;

    Ok(())
}

/// Read every well-formed record from the log, in file order. Lines that do
/// not split into exactly six tab-separated fields are skipped as noise.
pub fn read_records(path: &Path) -> Result<Vec<StationRecord>> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(record) = StationRecord::from_line(&line) {
            records.push(record);
        }
    }

    Ok(records)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn record_fixture(station: &str) -> StationRecord {
        StationRecord {
            location: "Alabama".to_string(),
            station: station.to_string(),
            precip: Some(vec![
                1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
            ]),
            min_temp: None,
            avg_temp: None,
            max_temp: Some(vec![
                60.0, 62.0, 66.0, 74.0, 81.0, 87.0, 90.0, 90.0, 85.0, 75.0, 64.0, 55.0,
            ]),
        }
    }

    #[test]
    fn should_append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("normals-log.txt");

        let first = record_fixture("BIRMINGHAM AP");
        let second = record_fixture("HUNTSVILLE");

        append_record(&path, &first).unwrap();
        append_record(&path, &second).unwrap();

        let records = read_records(&path).unwrap();

        assert_eq!(records, vec![first, second]);
    }

    #[test]
    fn should_skip_noise_lines_without_affecting_neighbours() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("normals-log.txt");

        let first = record_fixture("BIRMINGHAM AP");
        let second = record_fixture("HUNTSVILLE");

        append_record(&path, &first).unwrap();
        fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap()
            .write_all(b"Alabama\tMOBILE\t1,2\t3,4\n")
            .unwrap();
        append_record(&path, &second).unwrap();

        let records = read_records(&path).unwrap();

        assert_eq!(records, vec![first, second]);
    }
}
