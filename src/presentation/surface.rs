use std::io::{Stdout, Write, stdout};

use serde_json::{Map, Value};

use crate::{
    core::config::BatteryConfig,
    prelude::*,
    presentation::{Presentation, RegionId},
    tables::{build_charts_table, build_config_table, build_summary_table},
};

/// Where results or errors end up.
///
/// Each call replaces whatever the previous one showed: results never mix with an earlier error
/// and an error substitutes any earlier results.
pub trait Surface {
    fn show_results(&mut self, presentation: &Presentation) -> Result;

    /// Show the configuration the backend has just accepted.
    fn show_config(&mut self, config: &BatteryConfig) -> Result;

    fn show_error(&mut self, message: &str) -> Result;
}

/// Human-readable tables.
pub struct TerminalSurface<W>(W);

impl TerminalSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W> TerminalSurface<W> {
    pub const fn new(writer: W) -> Self {
        Self(writer)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn show_results(&mut self, presentation: &Presentation) -> Result {
        writeln!(self.0, "{}", build_charts_table(&presentation.charts))?;
        writeln!(self.0, "{}", build_summary_table(&presentation.summary))?;
        Ok(())
    }

    fn show_config(&mut self, config: &BatteryConfig) -> Result {
        writeln!(self.0, "{}", build_config_table(config))?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result {
        writeln!(self.0, "Error: {message}")?;
        Ok(())
    }
}

/// One JSON document per call, keyed by region identifier.
pub struct JsonSurface<W>(W);

impl JsonSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W> JsonSurface<W> {
    pub const fn new(writer: W) -> Self {
        Self(writer)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> JsonSurface<W> {
    fn write(&mut self, document: &Map<String, Value>) -> Result {
        serde_json::to_writer_pretty(&mut self.0, document)?;
        writeln!(self.0)?;
        Ok(())
    }
}

impl<W: Write> Surface for JsonSurface<W> {
    fn show_results(&mut self, presentation: &Presentation) -> Result {
        let mut document = Map::new();
        for chart in presentation.charts.iter() {
            document.insert(chart.region.to_string(), serde_json::to_value(chart)?);
        }
        document
            .insert(RegionId::Metrics.to_string(), serde_json::to_value(&presentation.summary)?);
        self.write(&document)
    }

    fn show_config(&mut self, config: &BatteryConfig) -> Result {
        let mut document = Map::new();
        document.insert(RegionId::Config.to_string(), serde_json::to_value(config)?);
        self.write(&document)
    }

    fn show_error(&mut self, message: &str) -> Result {
        let mut document = Map::new();
        document.insert(RegionId::Error.to_string(), Value::String(message.to_owned()));
        self.write(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::testing::{sample_config, sample_optimization};

    #[test]
    fn test_json_results_keyed_by_region() -> Result {
        let mut surface = JsonSurface::new(Vec::new());
        surface.show_results(&Presentation::from(&sample_optimization()))?;
        let document: Value = serde_json::from_slice(&surface.into_inner())?;
        let regions = document.as_object().context("not an object")?;
        assert_eq!(regions.len(), 4);
        assert_eq!(document["soc-chart"]["values"][0], 50.0);
        assert_eq!(document["soc-chart"]["y_axis"]["max"], 100.0);
        assert_eq!(document["power-chart"]["tints"][0], "negative");
        assert_eq!(document["price-chart"]["kind"], "line");
        assert_eq!(document["metrics"][0]["value"], "$1234.50");
        Ok(())
    }

    #[test]
    fn test_json_config() -> Result {
        let mut surface = JsonSurface::new(Vec::new());
        surface.show_config(&sample_config())?;
        let document: Value = serde_json::from_slice(&surface.into_inner())?;
        assert_eq!(document["config"]["capacity_mwh"], 100.0);
        assert_eq!(document["config"]["horizon_hours"], 24);
        Ok(())
    }

    #[test]
    fn test_json_error() -> Result {
        let mut surface = JsonSurface::new(Vec::new());
        surface.show_error("X")?;
        let document: Value = serde_json::from_slice(&surface.into_inner())?;
        assert_eq!(document, serde_json::json!({ "error": "X" }));
        Ok(())
    }

    #[test]
    fn test_terminal_error() -> Result {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_error("no battery")?;
        assert_eq!(String::from_utf8(surface.into_inner())?, "Error: no battery\n");
        Ok(())
    }

    #[test]
    fn test_terminal_results() -> Result {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_results(&Presentation::from(&sample_optimization()))?;
        let output = String::from_utf8(surface.into_inner())?;
        assert!(output.contains("State of charge"), "{output}");
        assert!(output.contains("Total profit"), "{output}");
        Ok(())
    }
}
