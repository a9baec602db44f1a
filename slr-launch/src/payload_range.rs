use crate::error::{LaunchError, Result};
use serde::Serialize;

/// Inclusive payload mass bounds in kilograms, `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        // Written so that NaN on either side is rejected too
        if !(low <= high) {
            return Err(LaunchError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Whether `payload_mass_kg` lies within the bounds, both ends included.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    /// Move the low handle; it cannot pass the high handle.
    pub fn with_low(self, low: f64) -> Self {
        Self {
            low: low.min(self.high),
            high: self.high,
        }
    }

    /// Move the high handle; it cannot pass the low handle.
    pub fn with_high(self, high: f64) -> Self {
        Self {
            low: self.low,
            high: high.max(self.low),
        }
    }
}
