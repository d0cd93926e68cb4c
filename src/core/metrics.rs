use serde::Deserialize;

use crate::{
    prelude::*,
    quantity::{currency::Dollars, energy::MegawattHours},
};

/// Aggregates of one optimization run.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawMetrics")]
pub struct Metrics {
    pub total_profit: Dollars,
    pub energy_charged: MegawattHours,
    pub energy_discharged: MegawattHours,

    /// `0..=1`.
    pub final_state_of_charge: f64,
}

#[derive(Deserialize)]
struct RawMetrics {
    total_profit: Dollars,
    energy_charged: MegawattHours,
    energy_discharged: MegawattHours,
    final_soc: f64,
}

impl TryFrom<RawMetrics> for Metrics {
    type Error = Error;

    fn try_from(raw: RawMetrics) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&raw.final_soc),
            "`final_soc` is out of range: {}",
            raw.final_soc,
        );
        Ok(Self {
            total_profit: raw.total_profit,
            energy_charged: raw.energy_charged,
            energy_discharged: raw.energy_discharged,
            final_state_of_charge: raw.final_soc,
        })
    }
}
