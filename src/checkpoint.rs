//! Durable traversal cursor, rewritten after every successful append.
//!
//! Lets an aborted run restart with `--resume` instead of copying indices
//! off the console.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::harvest::Cursor;

/// Sidecar path for a given log file, `<log-file>.cursor`.
pub fn path_for(log_path: &Path) -> PathBuf {
    let mut name = log_path.file_name().unwrap_or_default().to_os_string();
    name.push(".cursor");

    log_path.with_file_name(name)
}

pub fn save(path: &Path, cursor: &Cursor) -> io::Result<()> {
    let contents = format!(
        "{}\t{}\t{}\n",
        cursor.location,
        cursor.station,
        Local::now().to_rfc3339()
    );

    fs::write(path, contents)
}

/// `None` when no checkpoint exists or the file does not parse. The
/// timestamp field is informational and ignored here.
pub fn load(path: &Path) -> io::Result<Option<Cursor>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut fields = contents.split('\t');
    let location = parse_index(fields.next());
    let station = parse_index(fields.next());

    match (location, station) {
        (Some(location), Some(station)) => Ok(Some(Cursor { location, station })),
        _ => Ok(None),
    }
}

pub fn clear(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

fn parse_index(field: Option<&str>) -> Option<usize> {
    field?.trim().parse().ok()
}

// -- Tests -------------------------------------------------------------------
