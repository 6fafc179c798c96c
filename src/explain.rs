//! Asks the simulation why a halted train is waiting.
//!
//! The blocking train is looked up in the snapshot the controller is looking
//! at. A reference to a train that is no longer live never reaches the
//! network.

use std::fmt;
use crate::api::{ExplainRequest, SimulationApi};
use crate::models::{SimulationSnapshot, Train};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainError {
    /// Only halted trains have a cause to explain
    NotHalted,
    /// `halted_by` is empty or names a train missing from the snapshot
    CauseUnavailable,
    /// The explanation request itself failed
    Remote(String),
}

impl fmt::Display for ExplainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainError::NotHalted => f.write_str("This train is not halted."),
            ExplainError::CauseUnavailable => {
                f.write_str("Conflict details not available to generate explanation.")
            }
            ExplainError::Remote(e) => write!(f, "Explanation request failed: {e}"),
        }
    }
}

/// Find the live train that `halted` is waiting for
///
/// # Errors
///
/// Returns an error if the train is not halted, or if its blocking train is
/// unknown, not in the snapshot, or is the train itself.
pub fn resolve_cause<'a>(
    snapshot: &'a SimulationSnapshot,
    halted: &Train,
) -> Result<&'a Train, ExplainError> {
    if !halted.status.is_halted() {
        return Err(ExplainError::NotHalted);
    }

    halted
        .halted_by
        .as_deref()
        .filter(|id| *id != halted.id)
        .and_then(|id| snapshot.train(id))
        .ok_or(ExplainError::CauseUnavailable)
}

/// Build the request body, or fail locally if there is nothing to ask about
///
/// # Errors
///
/// See [`resolve_cause`].
pub fn prepare_request<'a>(
    snapshot: &'a SimulationSnapshot,
    halted: &'a Train,
) -> Result<ExplainRequest<'a>, ExplainError> {
    let behind_train = resolve_cause(snapshot, halted)?;
    Ok(ExplainRequest {
        ahead_train: halted,
        behind_train,
    })
}

/// Single request/response exchange: no retry, no caching.
///
/// # Errors
///
/// Returns [`ExplainError::CauseUnavailable`] or [`ExplainError::NotHalted`]
/// without contacting the service, or [`ExplainError::Remote`] if the request
/// failed.
pub async fn request_explanation<A: SimulationApi>(
    api: &A,
    snapshot: &SimulationSnapshot,
    halted: &Train,
) -> Result<String, ExplainError> {
    let request = prepare_request(snapshot, halted)?;
    let response = api.explain(&request).await.map_err(ExplainError::Remote)?;
    Ok(response.into_message())
}
