use crate::{api::Api, cli::OutputFormat, prelude::*, tables::build_status_table};

#[instrument(skip_all)]
pub async fn status(api: &Api, output: OutputFormat) -> Result {
    let status = api.get_status().await?;
    info!(?status, "gotcha");
    match output {
        OutputFormat::Table => println!("{}", build_status_table(&status)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
    }
    Ok(())
}
