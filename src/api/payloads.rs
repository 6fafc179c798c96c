use serde::{Deserialize, Serialize};
use crate::models::Train;

/// Shown when the explanation service answers without an explanation
pub const FALLBACK_EXPLANATION: &str = "Sorry, could not get an explanation for this halt.";

/// Shown when a delay was accepted but the service sent no message
pub const DEFAULT_DELAY_MESSAGE: &str = "Delay injected.";

/// Body of the explanation request: the halted train and the train it is
/// waiting for
#[derive(Debug, Clone, Serialize)]
pub struct ExplainRequest<'a> {
    pub ahead_train: &'a Train,
    pub behind_train: &'a Train,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExplainResponse {
    #[serde(default)]
    pub explanation: Option<String>,
}

impl ExplainResponse {
    /// The explanation verbatim, or the generic fallback when it is missing or blank
    #[must_use]
    pub fn into_message(self) -> String {
        self.explanation
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_EXPLANATION.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelayRequest {
    pub train_id: String,
    pub delay_seconds: u32,
}

impl DelayRequest {
    /// Validate user input for a delay injection
    ///
    /// # Errors
    ///
    /// Returns an error if the train id is blank or the delay is not a positive
    /// number of seconds.
    pub fn new(train_id: &str, delay_seconds: &str) -> Result<Self, String> {
        let train_id = train_id.trim();
        if train_id.is_empty() {
            return Err("Train ID is required".to_string());
        }

        let delay_seconds: u32 = delay_seconds
            .trim()
            .parse()
            .map_err(|_| format!("Invalid delay: {delay_seconds}"))?;
        if delay_seconds == 0 {
            return Err("Delay must be greater than zero".to_string());
        }

        Ok(Self {
            train_id: train_id.to_string(),
            delay_seconds,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DelayResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl DelayResponse {
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DELAY_MESSAGE.to_string())
    }
}
