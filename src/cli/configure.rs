use crate::{
    api::Api,
    cli::{BatteryArgs, OutputFormat},
    core::{config::BatteryConfig, pipeline::Backend},
    prelude::*,
    presentation::{JsonSurface, Surface, TerminalSurface},
};

#[instrument(skip_all)]
pub async fn configure(api: &Api, output: OutputFormat, battery: &BatteryArgs) -> Result {
    let config = battery.collect()?;
    match output {
        OutputFormat::Table => configure_on(api, &mut TerminalSurface::stdout(), &config).await,
        OutputFormat::Json => configure_on(api, &mut JsonSurface::stdout(), &config).await,
    }
}

/// Run only the configuration stage, reporting either outcome on the surface.
async fn configure_on<B: Backend, S: Surface>(
    backend: &B,
    surface: &mut S,
    config: &BatteryConfig,
) -> Result {
    match backend.configure(config).await {
        Ok(configured) => surface.show_config(configured.config()),
        Err(error) => {
            error!(kind = error.kind(), "configuration failed: {error:#}");
            surface.show_error(&error.to_string())?;
            Err(error).context("the configuration has failed")
        }
    }
}
