use serde::{Deserialize, Serialize};

use crate::{
    core::{metrics::Metrics, schedule::ScheduleResult},
    quantity::{energy::MegawattHours, power::Megawatts},
};

/// Configuration acknowledgement.
#[derive(Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct OptimizationPayload {
    #[serde(default)]
    pub schedule: Option<ScheduleResult>,

    #[serde(default)]
    pub metrics: Option<Metrics>,
}

/// Battery as the backend currently has it configured.
#[must_use]
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct BatteryStatus {
    #[serde(rename = "capacity_mwh")]
    pub capacity: MegawattHours,

    #[serde(rename = "max_power_mw")]
    pub max_power: Megawatts,

    /// `0..=1`.
    #[serde(rename = "current_soc")]
    pub state_of_charge: f64,

    /// Round-trip efficiency, `0..=1`.
    pub efficiency: f64,
}
