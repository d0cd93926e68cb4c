use std::{fs, path::Path};

use bon::bon;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    prelude::*,
    quantity::{energy::MegawattHours, power::Megawatts},
};

/// Synthetic price pattern the backend should optimize against.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Deserialize,
    Serialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Moderate noise around the daily price curve.
    #[default]
    #[value(name = "normal")]
    #[display("normal")]
    Normal,

    /// Stronger noise around the daily price curve.
    #[value(name = "volatile")]
    #[display("volatile")]
    Volatile,

    /// Normal noise with occasional price spikes.
    #[value(name = "high_peaks", alias = "high-peaks")]
    #[display("high_peaks")]
    HighPeaks,
}

/// Battery configuration submitted to both endpoints.
///
/// Built once per submission and never mutated afterwards.
#[must_use]
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatteryConfig {
    capacity_mwh: MegawattHours,
    max_power_mw: Megawatts,
    initial_soc: f64,
    scenario: Scenario,
    horizon_hours: u32,
    efficiency: Option<f64>,
}

#[bon]
impl BatteryConfig {
    #[builder]
    pub fn new(
        capacity: MegawattHours,
        max_power: Megawatts,
        initial_state_of_charge: f64,
        #[builder(default)] scenario: Scenario,
        efficiency: Option<f64>,
    ) -> Result<Self> {
        ensure!(
            capacity.0.is_finite() && capacity > MegawattHours::ZERO,
            "capacity must be positive, got {capacity}",
        );
        ensure!(
            max_power.0.is_finite() && max_power > Megawatts::ZERO,
            "maximum power must be positive, got {max_power}",
        );
        ensure!(
            (0.0..=1.0).contains(&initial_state_of_charge),
            "initial state of charge must be within `0..=1`, got {initial_state_of_charge}",
        );
        if let Some(efficiency) = efficiency {
            ensure!(
                efficiency > 0.0 && efficiency <= 1.0,
                "round-trip efficiency must be within `(0, 1]`, got {efficiency}",
            );
        }
        Ok(Self {
            capacity_mwh: capacity,
            max_power_mw: max_power,
            initial_soc: initial_state_of_charge,
            scenario,
            horizon_hours: Self::HORIZON_HOURS,
            efficiency,
        })
    }
}

impl BatteryConfig {
    /// The optimizer always plans one day ahead.
    pub const HORIZON_HOURS: u32 = 24;

    /// Read a configuration preset from a TOML file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let preset: BatteryPreset = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        debug!(?preset, "loaded");
        preset.try_into()
    }

    pub const fn capacity(&self) -> MegawattHours {
        self.capacity_mwh
    }

    pub const fn max_power(&self) -> Megawatts {
        self.max_power_mw
    }

    pub const fn initial_state_of_charge(&self) -> f64 {
        self.initial_soc
    }

    pub const fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub const fn horizon_hours(&self) -> u32 {
        self.horizon_hours
    }

    pub const fn efficiency(&self) -> Option<f64> {
        self.efficiency
    }
}

/// On-disk battery preset, same keys as the request payload.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BatteryPreset {
    capacity_mwh: MegawattHours,
    max_power_mw: Megawatts,
    initial_soc: f64,

    #[serde(default)]
    scenario: Scenario,

    #[serde(default)]
    efficiency: Option<f64>,
}

impl TryFrom<BatteryPreset> for BatteryConfig {
    type Error = Error;

    fn try_from(preset: BatteryPreset) -> Result<Self> {
        Self::builder()
            .capacity(preset.capacity_mwh)
            .max_power(preset.max_power_mw)
            .initial_state_of_charge(preset.initial_soc)
            .scenario(preset.scenario)
            .maybe_efficiency(preset.efficiency)
            .build()
    }
}
