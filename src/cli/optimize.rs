use crate::{
    api::Api,
    cli::{BatteryArgs, OutputFormat},
    core::controller::{Controller, SubmissionState},
    prelude::*,
    presentation::{JsonSurface, TerminalSurface},
};

#[instrument(skip_all)]
pub async fn optimize(api: Api, output: OutputFormat, battery: &BatteryArgs) -> Result {
    let config = battery.collect()?;
    let state = match output {
        OutputFormat::Table => {
            Controller::new(api, TerminalSurface::stdout()).submit(&config).await?
        }
        OutputFormat::Json => Controller::new(api, JsonSurface::stdout()).submit(&config).await?,
    };
    ensure!(state == SubmissionState::Success, "the submission has failed");
    Ok(())
}
