//! Battery form.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    core::config::{BatteryConfig, Scenario},
    prelude::*,
    quantity::{energy::MegawattHours, power::Megawatts},
};

#[must_use]
#[derive(Parser)]
pub struct BatteryArgs {
    /// Battery capacity in megawatt-hours.
    #[clap(long = "capacity-mwh", default_value = "100", env = "BATTERY_CAPACITY_MWH")]
    pub capacity: MegawattHours,

    /// Maximum charging and discharging power in megawatts.
    #[clap(long = "max-power-mw", default_value = "20", env = "BATTERY_MAX_POWER_MW")]
    pub max_power: Megawatts,

    /// Initial state of charge, `0..=1`.
    #[clap(long = "initial-soc", default_value = "0.5", env = "BATTERY_INITIAL_SOC")]
    pub initial_state_of_charge: f64,

    /// Price scenario to optimize against.
    #[clap(long, value_enum, default_value = "normal", env = "BATTERY_SCENARIO")]
    pub scenario: Scenario,

    /// Round-trip efficiency, `0..=1`. The backend keeps its own when unset.
    #[clap(long, env = "BATTERY_EFFICIENCY")]
    pub efficiency: Option<f64>,

    /// Read the battery from a TOML preset instead of the individual options.
    #[clap(
        long = "battery-file",
        env = "BATTERY_FILE",
        conflicts_with_all = [
            "capacity",
            "max_power",
            "initial_state_of_charge",
            "scenario",
            "efficiency",
        ],
    )]
    pub file: Option<PathBuf>,
}

impl BatteryArgs {
    /// Assemble a fresh configuration for one submission.
    pub fn collect(&self) -> Result<BatteryConfig> {
        if let Some(path) = &self.file {
            return BatteryConfig::read_from(path);
        }
        BatteryConfig::builder()
            .capacity(self.capacity)
            .max_power(self.max_power)
            .initial_state_of_charge(self.initial_state_of_charge)
            .scenario(self.scenario)
            .maybe_efficiency(self.efficiency)
            .build()
            .context("invalid battery configuration")
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;

    #[derive(Parser)]
    struct Form {
        #[clap(flatten)]
        battery: BatteryArgs,
    }

    fn parse(args: &[&str]) -> Result<BatteryArgs> {
        Ok(Form::try_parse_from(std::iter::once("voltwise").chain(args.iter().copied()))?.battery)
    }

    #[test]
    fn test_collect_defaults() -> Result {
        let config = parse(&[])?.collect()?;
        assert_eq!(config.capacity(), MegawattHours(100.0));
        assert_eq!(config.max_power(), Megawatts(20.0));
        assert_eq!(config.scenario(), Scenario::Normal);
        assert_eq!(config.horizon_hours(), BatteryConfig::HORIZON_HOURS);
        Ok(())
    }

    #[test]
    fn test_collect_options() -> Result {
        let config = parse(&[
            "--capacity-mwh",
            "250",
            "--max-power-mw",
            "50.5",
            "--initial-soc",
            "0.2",
            "--scenario",
            "high_peaks",
            "--efficiency",
            "0.9",
        ])?
        .collect()?;
        assert_eq!(config.capacity(), MegawattHours(250.0));
        assert_eq!(config.max_power(), Megawatts(50.5));
        assert_eq!(config.scenario(), Scenario::HighPeaks);
        assert_eq!(config.efficiency(), Some(0.9));
        Ok(())
    }

    #[test]
    fn test_collect_rejects_invalid_state_of_charge() -> Result {
        assert!(parse(&["--initial-soc", "1.5"])?.collect().is_err());
        Ok(())
    }

    #[test]
    fn test_file_conflicts_with_options() {
        assert!(parse(&["--battery-file", "battery.toml", "--capacity-mwh", "10"]).is_err());
    }

    #[test]
    fn test_collect_from_file() -> Result {
        let path = env::temp_dir().join(format!("voltwise-battery-{}.toml", std::process::id()));
        fs::write(&path, "capacity_mwh = 42.0\nmax_power_mw = 7.0\ninitial_soc = 0.9\n")?;
        let path_arg = path.to_str().context("non-UTF-8 path")?;
        let config = parse(&["--battery-file", path_arg])?.collect();
        fs::remove_file(&path)?;
        let config = config?;
        assert_eq!(config.capacity(), MegawattHours(42.0));
        assert_eq!(config.scenario(), Scenario::Normal);
        Ok(())
    }
}
