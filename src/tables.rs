use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::izip;

use crate::{
    api::BatteryStatus,
    core::config::BatteryConfig,
    fmt::FormattedPercentage,
    presentation::{ChartSet, Summary, Tint},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_charts_table(charts: &ChartSet) -> Table {
    #[expect(clippy::cast_precision_loss)]
    let mean_price = if charts.price.values.is_empty() {
        0.0
    } else {
        charts.price.values.iter().sum::<f64>() / charts.price.values.len() as f64
    };

    let mut table = new_table();
    table.set_header(vec![
        "Date",
        "Time",
        charts.price.title,
        charts.power.title,
        charts.state_of_charge.title,
    ]);
    for (time, price, (power, tint), state_of_charge) in izip!(
        &charts.price.labels,
        &charts.price.values,
        charts.power.values.iter().zip(&charts.power.tints),
        &charts.state_of_charge.values,
    ) {
        table.add_row(vec![
            Cell::new(time.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(time.format("%H:%M")),
            Cell::new(format!("{price:.2} {}", charts.price.unit))
                .set_alignment(CellAlignment::Right)
                .fg(if *price >= mean_price { Color::Red } else { Color::Green }),
            Cell::new(format!("{power:+.2} {}", charts.power.unit))
                .set_alignment(CellAlignment::Right)
                .fg(match tint {
                    Tint::Negative => Color::Green,
                    Tint::NonNegative => Color::Red,
                }),
            Cell::new(format!("{state_of_charge:.1}{}", charts.state_of_charge.unit))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    for entry in summary.entries() {
        table.add_row(vec![
            Cell::new(entry.label).add_attribute(Attribute::Bold),
            Cell::new(&entry.value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_config_table(config: &BatteryConfig) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Capacity",
        "Max power",
        "Initial SoC",
        "Scenario",
        "Horizon",
        "Efficiency",
    ]);
    table.add_row(vec![
        Cell::new(config.capacity()).set_alignment(CellAlignment::Right),
        Cell::new(config.max_power()).set_alignment(CellAlignment::Right),
        Cell::new(FormattedPercentage(config.initial_state_of_charge()))
            .set_alignment(CellAlignment::Right),
        Cell::new(config.scenario()),
        Cell::new(format!("{} h", config.horizon_hours())).set_alignment(CellAlignment::Right),
        config.efficiency().map_or_else(
            || Cell::new("default").add_attribute(Attribute::Dim),
            |efficiency| {
                Cell::new(FormattedPercentage(efficiency)).set_alignment(CellAlignment::Right)
            },
        ),
    ]);
    table
}

#[must_use]
pub fn build_status_table(status: &BatteryStatus) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Capacity", "Max power", "SoC", "Efficiency"]);
    table.add_row(vec![
        Cell::new(status.capacity).set_alignment(CellAlignment::Right),
        Cell::new(status.max_power).set_alignment(CellAlignment::Right),
        Cell::new(FormattedPercentage(status.state_of_charge)).set_alignment(CellAlignment::Right),
        Cell::new(FormattedPercentage(status.efficiency)).set_alignment(CellAlignment::Right),
    ]);
    table
}
