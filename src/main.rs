#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod fmt;
mod prelude;
mod presentation;
mod quantity;
mod tables;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, configure, optimize, status},
    prelude::*,
};

#[tokio::main]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let api = args.connection.try_new_api()?;

    match args.command {
        Command::Optimize(submit_args) => {
            optimize(api, args.output, &submit_args.battery).await?;
        }
        Command::Configure(submit_args) => {
            configure(&api, args.output, &submit_args.battery).await?;
        }
        Command::Status => {
            status(&api, args.output).await?;
        }
    }

    info!("done!");
    Ok(())
}
