//! VoltWise backend client.

mod client;
mod models;
mod response;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use serde::{de, de::DeserializeOwned};

pub use self::models::BatteryStatus;
use self::{
    models::{Acknowledgement, OptimizationPayload},
    response::Envelope,
};
use crate::{
    core::{
        config::BatteryConfig,
        error::SubmissionError,
        pipeline::{Backend, Configured, Optimization},
    },
    prelude::*,
};

const CONFIGURE_PATH: &str = "api/battery/configure";
const OPTIMIZE_PATH: &str = "api/optimize";
const STATUS_PATH: &str = "api/battery/status";

pub struct Api {
    client: reqwest::Client,
    base_url: Url,
}

impl Api {
    pub fn try_new(mut base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        ensure!(!base_url.cannot_be_a_base(), "`{base_url}` cannot be a base URL");
        if !base_url.path().ends_with('/') {
            // Otherwise joining replaces the last path segment.
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client: client::try_new(timeout)?, base_url })
    }

    fn url(&self, path: &str) -> Url {
        // Relative paths always join onto a base URL.
        self.base_url.join(path).unwrap_or_else(|_| self.base_url.clone())
    }

    #[instrument(skip_all)]
    pub async fn get_status(&self) -> Result<BatteryStatus, SubmissionError> {
        info!("fetching…");
        let request = self.client.get(self.url(STATUS_PATH));
        Self::send(STATUS_PATH, request).await?.ok_or_else(|| SubmissionError::Protocol {
            path: STATUS_PATH,
            source: de::Error::custom("empty response body"),
        })
    }

    /// Send the request and parse the body, `None` meaning an empty or `null` body.
    #[instrument(skip_all, level = Level::DEBUG, fields(path = path))]
    async fn send<R: DeserializeOwned>(
        path: &'static str,
        request: RequestBuilder,
    ) -> Result<Option<R>, SubmissionError> {
        let response =
            request.send().await.map_err(|source| SubmissionError::Unreachable { path, source })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "call failed");
            return Err(SubmissionError::Transport { path, status });
        }
        let body = response
            .text()
            .await
            .map_err(|source| SubmissionError::Unreachable { path, source })?;
        debug!(%status, len = body.len(), "call succeeded");
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body).map_err(|source| SubmissionError::Protocol { path, source })
    }
}

#[async_trait]
impl Backend for Api {
    #[instrument(skip_all)]
    async fn configure<'c>(
        &self,
        config: &'c BatteryConfig,
    ) -> Result<Configured<'c>, SubmissionError> {
        info!(?config, "configuring…");
        let request = self.client.post(self.url(CONFIGURE_PATH)).json(config);
        let acknowledgement: Acknowledgement = Self::send::<Envelope>(CONFIGURE_PATH, request)
            .await?
            .ok_or_else(|| SubmissionError::Protocol {
                path: CONFIGURE_PATH,
                source: de::Error::custom("empty response body"),
            })?
            .into_payload(CONFIGURE_PATH, "battery configuration failed")?;
        if let Some(message) = acknowledgement.message {
            info!(%message, "accepted");
        }
        Ok(Configured::acknowledge(config))
    }

    #[instrument(skip_all)]
    async fn optimize(&self, configured: Configured<'_>) -> Result<Optimization, SubmissionError> {
        info!("optimizing…");
        let request = self.client.post(self.url(OPTIMIZE_PATH)).json(configured.config());
        let payload: OptimizationPayload = Self::send::<Envelope>(OPTIMIZE_PATH, request)
            .await?
            .ok_or(SubmissionError::EmptyResult { path: OPTIMIZE_PATH })?
            .into_payload(OPTIMIZE_PATH, "optimization failed")?;
        match (payload.schedule, payload.metrics) {
            (Some(schedule), Some(metrics)) => Ok(Optimization { schedule, metrics }),
            _ => Err(SubmissionError::EmptyResult { path: OPTIMIZE_PATH }),
        }
    }
}
