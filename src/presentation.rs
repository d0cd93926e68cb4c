//! Turning an optimization into something to look at.
//!
//! [`Presentation`] is built by pure functions; [`Surface`] implementations only decide where
//! and how it is written.

mod chart;
mod summary;
mod surface;

pub use self::{
    chart::{ChartSet, RegionId, Tint},
    summary::Summary,
    surface::{JsonSurface, Surface, TerminalSurface},
};
use crate::core::pipeline::Optimization;

/// Everything a surface shows after a successful submission.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    pub charts: ChartSet,
    pub summary: Summary,
}

impl From<&Optimization> for Presentation {
    fn from(optimization: &Optimization) -> Self {
        Self {
            charts: ChartSet::from(&optimization.schedule),
            summary: Summary::from(&optimization.metrics),
        }
    }
}
