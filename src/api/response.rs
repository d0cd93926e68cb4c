use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::core::error::SubmissionError;

/// Common response envelope of the VoltWise endpoints.
///
/// The payload fields sit next to `success` and `error` in the same object. They are kept as raw
/// JSON until `success` is checked, and only then parsed.
#[derive(Deserialize)]
pub struct Envelope {
    success: bool,

    #[serde(default)]
    error: Option<String>,

    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Envelope {
    /// Parse the payload, or turn `success: false` into an application error.
    pub fn into_payload<P: DeserializeOwned>(
        self,
        path: &'static str,
        default_message: &str,
    ) -> Result<P, SubmissionError> {
        if !self.success {
            let message = self
                .error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| default_message.to_owned());
            return Err(SubmissionError::Application { message });
        }
        serde_json::from_value(Value::Object(self.payload))
            .map_err(|source| SubmissionError::Protocol { path, source })
    }
}
