use chrono::NaiveDateTime;
use itertools::{Itertools, izip};
use serde::Deserialize;

use crate::{
    prelude::*,
    quantity::{currency::MegawattHourPrice, power::Megawatts},
};

/// Optimized dispatch schedule, one [`Step`] per backend interval.
///
/// The wire format is a set of parallel arrays. They are zipped into steps on deserialization,
/// so a schedule with mismatched series lengths or out-of-range state of charge cannot exist.
/// Extra per-step series the backend may add (`profit`, `energy_charged`…) are ignored.
#[must_use]
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "ScheduleSeries")]
pub struct ScheduleResult(Vec<Step>);

impl ScheduleResult {
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub time: NaiveDateTime,
    pub price: MegawattHourPrice,

    /// Positive discharges, negative charges.
    pub power: Megawatts,

    /// State of charge after the step, `0..=1`.
    pub state_of_charge: f64,
}

#[derive(Deserialize)]
struct ScheduleSeries {
    index: Vec<NaiveDateTime>,
    price: Vec<MegawattHourPrice>,
    power_mw: Vec<Megawatts>,
    soc: Vec<f64>,
}

impl TryFrom<ScheduleSeries> for ScheduleResult {
    type Error = Error;

    fn try_from(series: ScheduleSeries) -> Result<Self> {
        let len = series.index.len();
        ensure!(
            series.price.len() == len,
            "`price` has {} values, expected {len}",
            series.price.len(),
        );
        ensure!(
            series.power_mw.len() == len,
            "`power_mw` has {} values, expected {len}",
            series.power_mw.len(),
        );
        ensure!(series.soc.len() == len, "`soc` has {} values, expected {len}", series.soc.len());
        if let Some((position, soc)) =
            series.soc.iter().find_position(|soc| !(0.0..=1.0).contains(*soc))
        {
            bail!("`soc[{position}]` is out of range: {soc}");
        }

        let steps = izip!(series.index, series.price, series.power_mw, series.soc)
            .map(|(time, price, power, state_of_charge)| Step {
                time,
                price,
                power,
                state_of_charge,
            })
            .collect();
        Ok(Self(steps))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_deserialize_ok() -> Result {
        // language=JSON
        const SCHEDULE: &str = r#"
            {
                "index": ["2024-01-01T00:00:00", "2024-01-01T00:05:00"],
                "price": [42.5, 61.0],
                "power_mw": [-20.0, 18.4],
                "soc": [0.5166, 0.5]
            }
        "#;
        let schedule = serde_json::from_str::<ScheduleResult>(SCHEDULE)?;
        assert_eq!(schedule.len(), 2);
        let step = schedule.steps()[1];
        assert_eq!(
            step.time,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 5, 0).unwrap()
        );
        assert_eq!(step.power, Megawatts(18.4));
        assert_abs_diff_eq!(step.state_of_charge, 0.5);
        Ok(())
    }

    #[test]
    fn test_deserialize_ignores_extra_series() -> Result {
        // language=JSON
        const SCHEDULE: &str = r#"
            {
                "index": ["2024-01-01T00:00:00"],
                "price": [42.5],
                "power_mw": [-12.0],
                "soc": [0.51],
                "profit": [-42.5],
                "energy_charged": [1.0],
                "energy_discharged": [0.0]
            }
        "#;
        let schedule = serde_json::from_str::<ScheduleResult>(SCHEDULE)?;
        assert_eq!(schedule.steps()[0].power, Megawatts(-12.0));
        Ok(())
    }

    #[test]
    fn test_deserialize_mismatched_lengths() {
        // language=JSON
        const SCHEDULE: &str = r#"
            {
                "index": ["2024-01-01T00:00:00", "2024-01-01T00:05:00"],
                "price": [42.5, 61.0],
                "power_mw": [-20.0],
                "soc": [0.5, 0.5]
            }
        "#;
        let error = serde_json::from_str::<ScheduleResult>(SCHEDULE).unwrap_err();
        assert!(error.to_string().contains("`power_mw` has 1 values"), "{error}");
    }

    #[test]
    fn test_deserialize_state_of_charge_out_of_range() {
        // language=JSON
        const SCHEDULE: &str = r#"
            {
                "index": ["2024-01-01T00:00:00"],
                "price": [42.5],
                "power_mw": [0.0],
                "soc": [1.5]
            }
        "#;
        let error = serde_json::from_str::<ScheduleResult>(SCHEDULE).unwrap_err();
        assert!(error.to_string().contains("`soc[0]` is out of range"), "{error}");
    }
}
