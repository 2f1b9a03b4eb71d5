//! Portal navigation capability.
//!
//! The harvester drives the portal through the [`Navigator`] trait. The only
//! production implementation speaks the WebDriver protocol ([`webdriver`]);
//! tests substitute a scripted navigator.

pub mod webdriver;

use std::time::Duration;

use crate::error::HarvestError;

/// The two dropdown levels of the portal, outer to inner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Location,
    Station,
}

impl Level {
    pub fn selector(self) -> &'static str {
        match self {
            Level::Location => ".locationSelect",
            Level::Station => ".stationSelect",
        }
    }
}

/// One selectable dropdown entry.
#[derive(Debug, Clone)]
pub struct NavOption {
    pub id: String,
    pub text: String,
}

/// A rendered detail table: header cell texts plus the table's full text.
#[derive(Debug, Clone)]
pub struct DetailTable {
    pub headers: Vec<String>,
    pub body: String,
}

pub trait Navigator {
    /// Load the portal landing page.
    async fn open(&mut self) -> Result<(), HarvestError>;

    async fn list_options(&mut self, level: Level) -> Result<Vec<NavOption>, HarvestError>;

    /// Side-effecting; kicks off an asynchronous UI refresh.
    async fn select(&mut self, option: &NavOption) -> Result<(), HarvestError>;

    /// Block until the busy indicator clears, or fail with
    /// [`HarvestError::NavigationTimeout`] once `timeout` elapses.
    async fn wait_idle(&mut self, timeout: Duration) -> Result<(), HarvestError>;

    async fn read_table(&mut self) -> Result<DetailTable, HarvestError>;

    /// Tear down the session.
    async fn quit(&mut self) -> Result<(), HarvestError>;
}
