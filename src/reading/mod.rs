//! Station record data structures and log line (de)serialisation.

pub mod extract;
pub mod summary;

pub use summary::StationSummary;

/// Tab-separated fields in one log line.
const LOG_FIELDS: usize = 6;

/// One harvested observation set for a (location, station) pair. Each series,
/// when present, holds exactly twelve entries in calendar month order; a
/// series the source table lacked is `None`, never partially filled.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub location: String,
    pub station: String,
    pub precip: Option<Vec<f32>>,
    pub min_temp: Option<Vec<f32>>,
    pub avg_temp: Option<Vec<f32>>,
    pub max_temp: Option<Vec<f32>>,
}

impl StationRecord {
    /// Parse one log line. Returns `None` for lines that do not split into
    /// exactly six tab-separated fields.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != LOG_FIELDS {
            return None;
        }

        Some(StationRecord {
            location: fields[0].to_string(),
            station: fields[1].to_string(),
            precip: parse_series(fields[2]),
            min_temp: parse_series(fields[3]),
            avg_temp: parse_series(fields[4]),
            max_temp: parse_series(fields[5]),
        })
    }

    /// Serialise to the log line format, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.location,
            self.station,
            join_series(&self.precip),
            join_series(&self.min_temp),
            join_series(&self.avg_temp),
            join_series(&self.max_temp),
        )
    }
}

fn parse_series(field: &str) -> Option<Vec<f32>> {
    if field.is_empty() {
        return None;
    }

    Some(
        field
            .split(',')
            .map(|v| v.parse::<f32>().unwrap_or(f32::NAN))
            .collect(),
    )
}

fn join_series(series: &Option<Vec<f32>>) -> String {
    match series {
        Some(values) => values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(","),
        None => String::new(),
    }
}

// -- Tests -------------------------------------------------------------------
