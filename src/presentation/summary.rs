use serde::Serialize;

use crate::{core::metrics::Metrics, fmt::FormattedPercentage};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub label: &'static str,
    pub value: String,
}

/// Textual metrics summary, one entry per line.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary(Vec<SummaryEntry>);

impl Summary {
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.0
    }
}

impl From<&Metrics> for Summary {
    fn from(metrics: &Metrics) -> Self {
        Self(vec![
            SummaryEntry { label: "Total profit", value: metrics.total_profit.to_string() },
            SummaryEntry { label: "Energy charged", value: metrics.energy_charged.to_string() },
            SummaryEntry {
                label: "Energy discharged",
                value: metrics.energy_discharged.to_string(),
            },
            SummaryEntry {
                label: "Final SoC",
                value: FormattedPercentage(metrics.final_state_of_charge).to_string(),
            },
        ])
    }
}
