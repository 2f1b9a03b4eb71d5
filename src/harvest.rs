//! Resumable two-level traversal over the portal's locations and stations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use crate::checkpoint;
use crate::cli::create_progress_bar;
use crate::error::{HarvestError, HarvestFailure};
use crate::navigate::{Level, NavOption, Navigator};
use crate::reading::extract::extract_record;
use crate::store;

/// Traversal resume point: indices into the location list and into the
/// current location's station list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub location: usize,
    pub station: usize,
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "location {}, station {}", self.location, self.station)
    }
}

pub struct Harvester<N: Navigator> {
    navigator: N,
    log_path: PathBuf,
    checkpoint_path: PathBuf,
    idle_timeout: Duration,
}

impl<N: Navigator> Harvester<N> {
    pub fn new(navigator: N, log_path: &Path, idle_timeout: Duration) -> Self {
        Harvester {
            navigator,
            log_path: log_path.to_path_buf(),
            checkpoint_path: checkpoint::path_for(log_path),
            idle_timeout,
        }
    }

    /// Walk every (location, station) pair from `start` in location-major
    /// order, appending one record per pair before advancing. The navigation
    /// session is torn down exactly once whether the walk completes or
    /// aborts; on abort the failing cursor rides on the error.
    ///
    /// Records are appended in strictly increasing cursor order within a
    /// run. Nothing deduplicates across runs: a stale start cursor duplicates
    /// pairs, a future one skips them.
    pub async fn run(mut self, start: Cursor) -> Result<usize, HarvestFailure> {
        let outcome = self.walk(start).await;

        if let Err(e) = self.navigator.quit().await {
            warn!("failed to close navigation session: {e}");
        }

        if outcome.is_ok() {
            if let Err(e) = checkpoint::clear(&self.checkpoint_path) {
                warn!("failed to remove checkpoint: {e}");
            }
        }

        outcome
    }

    async fn walk(&mut self, start: Cursor) -> Result<usize, HarvestFailure> {
        let mut cursor = start;
        let mut appended = 0;

        self.navigator.open().await.map_err(|e| fail(cursor, e))?;
        self.navigator
            .wait_idle(self.idle_timeout)
            .await
            .map_err(|e| fail(cursor, e))?;

        // The location list is fetched once per run; station lists depend on
        // the selected location and are re-fetched inside the loop.
        let locations = self
            .navigator
            .list_options(Level::Location)
            .await
            .map_err(|e| fail(cursor, e))?;

        while cursor.location < locations.len() {
            let location = &locations[cursor.location];
            info!(location = %location.text, "selecting location");

            self.navigator
                .select(location)
                .await
                .map_err(|e| fail(cursor, e))?;
            self.navigator
                .wait_idle(self.idle_timeout)
                .await
                .map_err(|e| fail(cursor, e))?;
            let stations = self
                .navigator
                .list_options(Level::Station)
                .await
                .map_err(|e| fail(cursor, e))?;

            let bar = create_progress_bar(
                stations.len() as u64,
                format!("Harvesting {}", location.text),
            );
            bar.set_position(cursor.station as u64);

            while cursor.station < stations.len() {
                let station = &stations[cursor.station];
                self.harvest_station(location, station)
                    .await
                    .map_err(|e| fail(cursor, e))?;
                appended += 1;
                cursor.station += 1;

                checkpoint::save(&self.checkpoint_path, &cursor)
                    .map_err(|e| fail(cursor, e.into()))?;
                bar.inc(1);
            }

            bar.finish_with_message(format!("{} harvested", location.text));
            cursor.station = 0;
            cursor.location += 1;
        }

        Ok(appended)
    }

    async fn harvest_station(
        &mut self,
        location: &NavOption,
        station: &NavOption,
    ) -> Result<(), HarvestError> {
        self.navigator.select(station).await?;
        self.navigator.wait_idle(self.idle_timeout).await?;

        let table = self.navigator.read_table().await?;
        let record = extract_record(&location.text, &station.text, &table)?;
        store::append_record(&self.log_path, &record)?;
        info!(station = %station.text, "record appended");

        Ok(())
    }
}

fn fail(cursor: Cursor, source: HarvestError) -> HarvestFailure {
    HarvestFailure { cursor, source }
}

// -- Tests -------------------------------------------------------------------
