use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{core::schedule::ScheduleResult, quantity::power::Megawatts};

/// Stable identifier of a place on the presentation surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum RegionId {
    #[display("price-chart")]
    PriceChart,

    #[display("power-chart")]
    PowerChart,

    #[display("soc-chart")]
    SocChart,

    #[display("metrics")]
    Metrics,

    #[display("config")]
    Config,

    #[display("error")]
    Error,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Bar color class, chosen by the sign of the value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tint {
    Negative,
    NonNegative,
}

impl From<Megawatts> for Tint {
    fn from(power: Megawatts) -> Self {
        if power.is_charging() { Self::Negative } else { Self::NonNegative }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const PERCENT: Self = Self { min: 0.0, max: 100.0 };
}

/// Chart description, independent of any charting library.
#[must_use]
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chart {
    pub region: RegionId,
    pub kind: ChartKind,
    pub title: &'static str,
    pub unit: &'static str,
    pub labels: Vec<NaiveDateTime>,
    pub values: Vec<f64>,

    /// Per-value tints, bar charts only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tints: Vec<Tint>,

    /// Fixed y-axis bounds, otherwise the axis follows the data.
    pub y_axis: Option<AxisRange>,
}

/// The three schedule charts.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSet {
    pub price: Chart,
    pub power: Chart,
    pub state_of_charge: Chart,
}

impl ChartSet {
    pub const fn iter(&self) -> [&Chart; 3] {
        [&self.price, &self.power, &self.state_of_charge]
    }
}

impl From<&ScheduleResult> for ChartSet {
    fn from(schedule: &ScheduleResult) -> Self {
        let labels = schedule.steps().iter().map(|step| step.time).collect_vec();
        Self {
            price: Chart {
                region: RegionId::PriceChart,
                kind: ChartKind::Line,
                title: "Electricity price",
                unit: "$/MWh",
                labels: labels.clone(),
                values: schedule.steps().iter().map(|step| step.price.0).collect(),
                tints: Vec::new(),
                y_axis: None,
            },
            power: Chart {
                region: RegionId::PowerChart,
                kind: ChartKind::Bar,
                title: "Battery power",
                unit: "MW",
                labels: labels.clone(),
                values: schedule.steps().iter().map(|step| step.power.0).collect(),
                tints: schedule.steps().iter().map(|step| Tint::from(step.power)).collect(),
                y_axis: None,
            },
            state_of_charge: Chart {
                region: RegionId::SocChart,
                kind: ChartKind::Line,
                title: "State of charge",
                unit: "%",
                labels,
                values: schedule
                    .steps()
                    .iter()
                    .map(|step| step.state_of_charge * 100.0)
                    .collect(),
                tints: Vec::new(),
                y_axis: Some(AxisRange::PERCENT),
            },
        }
    }
}
