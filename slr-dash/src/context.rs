//! The loaded dataset and its payload bounds.

use slr_db::models::SiteSummary;
use slr_db::Database;
use slr_launch::{LaunchError, PayloadRange, LAUNCH_CSV};
use std::path::Path;

/// Everything the layout and the handlers read, built once at startup.
///
/// The database is private and only queried after construction, so the
/// launch table cannot change for the lifetime of the context.
#[derive(Clone)]
pub struct LaunchContext {
    db: Database,
    payload_bounds: PayloadRange,
    record_count: usize,
}

impl LaunchContext {
    /// Load launches from CSV text. Fails if the text is malformed or empty.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Database::new()?;
        let record_count = db.load_launches(csv_data)?;
        let (min, max) = db
            .query_payload_bounds()?
            .ok_or(LaunchError::EmptyDataset)?;
        let payload_bounds = PayloadRange::new(min, max)?;
        log::info!(
            "[SLR] context: {} launches, payload {} to {} kg",
            record_count,
            min,
            max
        );
        Ok(Self {
            db,
            payload_bounds,
            record_count,
        })
    }

    /// Load launches from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let csv_data = slr_launch::read_launch_csv(path)?;
        Self::from_csv(&csv_data)
    }

    /// Load the dataset compiled into the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_csv(LAUNCH_CSV)
    }

    /// Smallest payload mass across all launches.
    pub fn payload_min(&self) -> f64 {
        self.payload_bounds.low()
    }

    /// Largest payload mass across all launches.
    pub fn payload_max(&self) -> f64 {
        self.payload_bounds.high()
    }

    /// `[payload_min, payload_max]`, the slider's default value.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Per-site launch and success counts, in first-seen order.
    pub fn site_summaries(&self) -> anyhow::Result<Vec<SiteSummary>> {
        self.db.query_site_summaries()
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }
}
