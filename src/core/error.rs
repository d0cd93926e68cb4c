use reqwest::StatusCode;

/// Everything that can go wrong within a submission cycle.
///
/// None of these is retried. The controller reports each one to the surface as its display
/// message, so [`SubmissionError::Application`] shows exactly what the backend said.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SubmissionError {
    /// The endpoint responded with a non-success status.
    #[display("transport failure: `{path}` responded with HTTP {status}")]
    Transport { path: &'static str, status: StatusCode },

    /// No status at all: connection failure, timeout or a broken body stream.
    #[display("transport failure: `{path}` is unreachable: {source}")]
    Unreachable { path: &'static str, source: reqwest::Error },

    #[display("malformed response from `{path}`: {source}")]
    Protocol { path: &'static str, source: serde_json::Error },

    #[display("{message}")]
    Application { message: String },

    #[display("`{path}` returned an empty result")]
    EmptyResult { path: &'static str },
}

impl SubmissionError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } | Self::Unreachable { .. } => "transport",
            Self::Protocol { .. } => "protocol",
            Self::Application { .. } => "application",
            Self::EmptyResult { .. } => "empty-result",
        }
    }
}
