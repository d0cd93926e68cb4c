//! Submission state machine.
//!
//! `Idle → Submitting → (Success | Failed)`, with the submit control disabled for the duration
//! of [`Controller::submit`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{
    core::{config::BatteryConfig, pipeline, pipeline::Backend},
    prelude::*,
    presentation::{Presentation, Surface},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// The trigger of a submission cycle.
///
/// It stays disabled while a cycle runs, which serializes submissions.
#[derive(Debug)]
pub struct SubmitControl {
    enabled: AtomicBool,
    n_enables: AtomicUsize,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self { enabled: AtomicBool::new(true), n_enables: AtomicUsize::new(0) }
    }
}

impl SubmitControl {
    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Number of times the control has been re-enabled after a cycle.
    #[cfg(test)]
    pub fn n_enables(&self) -> usize {
        self.n_enables.load(Ordering::Acquire)
    }

    /// Disable the control until the returned guard is dropped.
    pub fn try_disable(&self) -> Result<SubmitGuard<'_>> {
        self.enabled
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| anyhow!("a submission is already in progress"))?;
        debug!("submit control disabled");
        Ok(SubmitGuard(self))
    }
}

/// Re-enables the [`SubmitControl`] when dropped, whichever way the cycle ends.
#[must_use]
pub struct SubmitGuard<'a>(&'a SubmitControl);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.enabled.store(true, Ordering::Release);
        let n_enables = self.0.n_enables.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(n_enables, "submit control re-enabled");
    }
}

pub struct Controller<B, S> {
    backend: B,
    surface: S,
    control: SubmitControl,
    state: SubmissionState,
}

impl<B: Backend, S: Surface> Controller<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self { backend, surface, control: SubmitControl::default(), state: SubmissionState::Idle }
    }

    #[cfg(test)]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    #[cfg(test)]
    pub const fn control(&self) -> &SubmitControl {
        &self.control
    }

    #[cfg(test)]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Run one full submission cycle and return the terminal state.
    ///
    /// Pipeline errors do not fail this call: they end up on the surface and in
    /// [`SubmissionState::Failed`]. Only a surface that cannot be written to fails it.
    #[instrument(skip_all)]
    pub async fn submit(&mut self, config: &BatteryConfig) -> Result<SubmissionState> {
        let Self { backend, surface, control, state } = self;
        let _guard = control.try_disable()?;
        *state = SubmissionState::Submitting;

        match pipeline::run(&*backend, config).await {
            Ok(optimization) => {
                surface.show_results(&Presentation::from(&optimization))?;
                *state = SubmissionState::Success;
            }
            Err(error) => {
                error!(kind = error.kind(), "submission failed: {error:#}");
                *state = SubmissionState::Failed;
                surface.show_error(&error.to_string())?;
            }
        }

        info!(state = %state, "submission completed");
        Ok(*state)
    }
}
