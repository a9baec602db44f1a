//! Chart definitions handed to the renderer.
//!
//! A figure holds the selected data plus the encoding and title needed to
//! draw it. Figures are rebuilt from scratch on every handler call.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    /// Column the slices are named by
    pub names: String,
    /// Column the slice sizes come from
    pub values: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// One launch plotted as payload (x) against outcome class (y).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Booster version category, the color encoding
    pub color: String,
    pub launch_site: String,
    pub flight_number: Option<i64>,
    pub booster_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    /// Distinct colors of `points` in the order they first appear; the
    /// renderer draws its legend from this list
    pub color_categories: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterFigure {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(pie) => &pie.title,
            Figure::Scatter(scatter) => &scatter.title,
        }
    }

    pub fn as_pie(&self) -> Option<&PieFigure> {
        match self {
            Figure::Pie(pie) => Some(pie),
            Figure::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterFigure> {
        match self {
            Figure::Scatter(scatter) => Some(scatter),
            Figure::Pie(_) => None,
        }
    }
}
