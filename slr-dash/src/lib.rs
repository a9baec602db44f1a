//! Dashboard core for the SpaceX launch records app.
//!
//! This crate provides:
//! - `context`: the immutable [`LaunchContext`] built once at startup
//! - `layout`: the static page description (dropdown, slider, chart ids)
//! - `figure`: backend-independent chart definitions
//! - `callbacks`: the two handlers computing charts from control values
//! - `dashboard`: control state plus the subscriptions that re-run handlers

pub mod callbacks;
pub mod context;
pub mod dashboard;
pub mod figure;
pub mod layout;

pub use context::LaunchContext;
pub use dashboard::{ControlId, ControlState, Dashboard, Rendered};
pub use figure::{Figure, PieFigure, PieSlice, ScatterFigure, ScatterPoint};
pub use layout::DashboardLayout;
