use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::{
    checkpoint,
    cli::{create_spinner, HarvestArgs},
    harvest::{Cursor, Harvester},
    navigate::webdriver::WebDriverNavigator,
};

use super::default_log_path;

pub async fn harvest(args: &HarvestArgs) -> Result<String> {
    let log_path = args.log.clone().unwrap_or_else(default_log_path);
    let start = start_cursor(args, &log_path)?;

    let bar = create_spinner("Opening WebDriver session...".to_string());
    let navigator = WebDriverNavigator::connect(&args.webdriver, &args.portal).await?;
    bar.finish_with_message("Session open");

    let harvester = Harvester::new(navigator, &log_path, Duration::from_secs(args.timeout));

    match harvester.run(start).await {
        Ok(appended) => Ok(format!(
            "{} records appended to `{}`",
            appended,
            log_path.display()
        )),
        Err(failure) => {
            let cursor = failure.cursor;
            Err(anyhow::Error::new(failure).context(format!(
                "restart with `normals harvest --location {} --station {}` or `--resume`",
                cursor.location, cursor.station
            )))
        }
    }
}

// Explicit indices win over the checkpoint; with neither, start from the top.
fn start_cursor(args: &HarvestArgs, log_path: &Path) -> Result<Cursor> {
    if args.location != 0 || args.station != 0 {
        return Ok(Cursor {
            location: args.location,
            station: args.station,
        });
    }

    if args.resume {
        let path = checkpoint::path_for(log_path);
        if let Some(cursor) = checkpoint::load(&path).context("failed to read checkpoint")? {
            return Ok(cursor);
        }
    }

    Ok(Cursor::default())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use tempfile::TempDir;

    use super::*;

    fn args() -> HarvestArgs {
        HarvestArgs {
            log: None,
            webdriver: "http://localhost:9515".to_string(),
            portal: "http://localhost:8000/normals".to_string(),
            location: 0,
            station: 0,
            resume: false,
            timeout: 10,
        }
    }

    #[test]
    fn should_start_from_explicit_indices() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("normals-log.txt");

        let mut args = args();
        args.location = 4;
        args.station = 2;

        let cursor = start_cursor(&args, &log_path).unwrap();

        assert_eq!(
            cursor,
            Cursor {
                location: 4,
                station: 2,
            }
        );
    }

    #[test]
    fn should_resume_from_checkpoint_when_asked() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("normals-log.txt");

        let saved = Cursor {
            location: 3,
            station: 1,
        };
        checkpoint::save(&checkpoint::path_for(&log_path), &saved).unwrap();

        let mut args = args();
        args.resume = true;

        assert_eq!(start_cursor(&args, &log_path).unwrap(), saved);
    }

    #[test]
    fn should_start_from_the_top_without_checkpoint() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("normals-log.txt");

        let mut args = args();
        args.resume = true;

        assert_eq!(start_cursor(&args, &log_path).unwrap(), Cursor::default());
    }
}
