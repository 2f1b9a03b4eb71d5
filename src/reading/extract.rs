//! Detail table parsing: rendered header and body text to a station record.

use crate::error::HarvestError;
use crate::navigate::DetailTable;

use super::StationRecord;

/// Header line plus twelve month rows.
const TABLE_LINES: usize = 13;

/// Build a [`StationRecord`] from one rendered detail table.
///
/// Value columns are keyed by their position among the non-empty headers;
/// that position equals the token index once a data row is split on spaces.
/// A series stays `None` when its header never appears.
pub fn extract_record(
    location: &str,
    station: &str,
    table: &DetailTable,
) -> Result<StationRecord, HarvestError> {
    let mut record = StationRecord {
        location: location.to_string(),
        station: station.to_string(),
        precip: None,
        min_temp: None,
        avg_temp: None,
        max_temp: None,
    };

    let mut precip_col = None;
    let mut min_col = None;
    let mut avg_col = None;
    let mut max_col = None;

    let headers = table.headers.iter().filter(|h| !h.is_empty());
    for (col, header) in headers.enumerate() {
        match header.as_str() {
            "MONTH" => {}
            "PRECIP (IN)" => {
                precip_col = Some(col);
                record.precip = Some(Vec::new());
            }
            "MIN TMP (°F)" => {
                min_col = Some(col);
                record.min_temp = Some(Vec::new());
            }
            "AVG TMP (°F)" => {
                avg_col = Some(col);
                record.avg_temp = Some(Vec::new());
            }
            "MAX TMP (°F)" => {
                max_col = Some(col);
                record.max_temp = Some(Vec::new());
            }
            other => return Err(HarvestError::UnknownHeader(other.to_string())),
        }
    }

    let lines: Vec<&str> = table.body.split('\n').collect();
    if lines.len() != TABLE_LINES {
        return Err(HarvestError::IncompleteTable { lines: lines.len() });
    }

    for line in &lines[1..] {
        for (col, token) in line.split(' ').enumerate() {
            let series = if Some(col) == precip_col {
                record.precip.as_mut()
            } else if Some(col) == min_col {
                record.min_temp.as_mut()
            } else if Some(col) == avg_col {
                record.avg_temp.as_mut()
            } else if Some(col) == max_col {
                record.max_temp.as_mut()
            } else {
                None
            };

            if let Some(values) = series {
                values.push(token.parse::<f32>().unwrap_or(f32::NAN));
            }
        }
    }

    Ok(record)
}

// -- Tests -------------------------------------------------------------------
