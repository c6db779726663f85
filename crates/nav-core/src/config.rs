//! Cost-model and runtime configuration.
//!
//! Fuel figures are fixed for the lifetime of a reporter.  The defaults match
//! the reference vehicle: 14 km per litre at 240.3 per litre.

use std::path::PathBuf;

use crate::{NavError, NavResult};

// ── FuelConfig ────────────────────────────────────────────────────────────────

/// Vehicle fuel model used to turn kilometres into litres and currency.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FuelConfig {
    /// Distance covered per litre of fuel, in km/l.
    pub fuel_efficiency_km_per_l: f64,
    /// Price of one litre of fuel in the local currency.
    pub fuel_price_per_liter: f64,
}

impl FuelConfig {
    pub const DEFAULT_EFFICIENCY_KM_PER_L: f64 = 14.0;
    pub const DEFAULT_PRICE_PER_LITER: f64 = 240.3;

    pub fn new(fuel_efficiency_km_per_l: f64, fuel_price_per_liter: f64) -> Self {
        Self { fuel_efficiency_km_per_l, fuel_price_per_liter }
    }

    /// Litres needed to drive `distance_km`.
    #[inline]
    pub fn fuel_required(&self, distance_km: u64) -> f64 {
        distance_km as f64 / self.fuel_efficiency_km_per_l
    }

    /// Fuel cost of driving `distance_km`.
    #[inline]
    pub fn trip_cost(&self, distance_km: u64) -> f64 {
        self.fuel_required(distance_km) * self.fuel_price_per_liter
    }

    /// Reject efficiencies that would divide by zero and negative prices.
    pub fn validate(&self) -> NavResult<()> {
        if !self.fuel_efficiency_km_per_l.is_finite() || self.fuel_efficiency_km_per_l <= 0.0 {
            return Err(NavError::Config(format!(
                "fuel efficiency must be a positive number of km/l, got {}",
                self.fuel_efficiency_km_per_l
            )));
        }
        if !self.fuel_price_per_liter.is_finite() || self.fuel_price_per_liter < 0.0 {
            return Err(NavError::Config(format!(
                "fuel price must be a non-negative number, got {}",
                self.fuel_price_per_liter
            )));
        }
        Ok(())
    }
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EFFICIENCY_KM_PER_L, Self::DEFAULT_PRICE_PER_LITER)
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for a navigation shell.
///
/// Typically loaded from a JSON file by the application crate.  Every field
/// has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Fuel model for cost reports.
    pub fuel: FuelConfig,
    /// Map file to load at startup.  `None` means the shell picks its own.
    pub map_path: Option<PathBuf>,
}

impl NavConfig {
    pub fn validate(&self) -> NavResult<()> {
        self.fuel.validate()
    }
}
