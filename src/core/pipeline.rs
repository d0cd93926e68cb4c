//! Configure-then-optimize pipeline.
//!
//! The optimization stage only accepts a [`Configured`] token, and the only way to get one is a
//! successful configuration stage.

use async_trait::async_trait;

use crate::{
    core::{
        config::BatteryConfig,
        error::SubmissionError,
        metrics::Metrics,
        schedule::ScheduleResult,
    },
    prelude::*,
};

/// Acknowledgement that the backend accepted this exact configuration.
#[must_use]
#[derive(Copy, Clone)]
pub struct Configured<'c>(&'c BatteryConfig);

impl<'c> Configured<'c> {
    pub(crate) const fn acknowledge(config: &'c BatteryConfig) -> Self {
        Self(config)
    }

    pub const fn config(self) -> &'c BatteryConfig {
        self.0
    }
}

/// Successful outcome of the whole pipeline.
#[must_use]
#[derive(Clone, Debug)]
pub struct Optimization {
    pub schedule: ScheduleResult,
    pub metrics: Metrics,
}

#[async_trait]
pub trait Backend: Send + Sync {
    async fn configure<'c>(
        &self,
        config: &'c BatteryConfig,
    ) -> Result<Configured<'c>, SubmissionError>;

    async fn optimize(&self, configured: Configured<'_>) -> Result<Optimization, SubmissionError>;
}

/// Run both stages in order, stopping at the first failure.
#[instrument(skip_all, fields(scenario = ?config.scenario()))]
pub async fn run<B: Backend + ?Sized>(
    backend: &B,
    config: &BatteryConfig,
) -> Result<Optimization, SubmissionError> {
    let configured = backend.configure(config).await?;
    info!("configured");
    let optimization = backend.optimize(configured).await?;
    if optimization.schedule.is_empty() {
        warn!("the schedule is empty");
    }
    info!(n_steps = optimization.schedule.len(), "optimized");
    Ok(optimization)
}


#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::{testing::*, *};

    #[tokio::test]
    async fn test_runs_both_stages_in_order() {
        let backend = FakeBackend::succeeding();
        let optimization = run(&backend, &sample_config()).await.unwrap();
        assert_eq!(optimization.schedule.len(), 2);
        assert_eq!(backend.calls(), ["configure", "optimize"]);
    }

    #[tokio::test]
    async fn test_configure_failure_skips_optimize() {
        let backend = FakeBackend::failing_configure(SubmissionError::Application {
            message: "X".to_string(),
        });
        let error = run(&backend, &sample_config()).await.unwrap_err();
        assert_eq!(error.to_string(), "X");
        assert_eq!(backend.calls(), ["configure"]);
    }

    #[tokio::test]
    async fn test_optimize_failure_propagates() {
        let backend = FakeBackend::failing_optimize(SubmissionError::Transport {
            path: "api/optimize",
            status: StatusCode::BAD_GATEWAY,
        });
        let error = run(&backend, &sample_config()).await.unwrap_err();
        assert!(matches!(
            error,
            SubmissionError::Transport { status: StatusCode::BAD_GATEWAY, .. }
        ));
        assert_eq!(backend.calls(), ["configure", "optimize"]);
    }
}
