//! Core types for the SpaceX launch records dashboard.
//!
//! - `launch_record`: one row of the launch dataset and its CSV parser
//! - `site`: the hardcoded launch site list and the dropdown selection type
//! - `payload_range`: inclusive payload mass bounds chosen on the slider
//! - `error`: error type for loading and validating launch data

pub mod error;
pub mod launch_record;
pub mod payload_range;
pub mod site;

pub use error::LaunchError;
pub use launch_record::{read_launch_csv, LaunchRecord, LAUNCH_CSV};
pub use payload_range::PayloadRange;
pub use site::{SiteSelection, ALL_SITES, LAUNCH_SITES};
