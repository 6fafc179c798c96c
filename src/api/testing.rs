//! In-memory [`SimulationApi`] double that records every outbound call

use std::cell::RefCell;
use super::{DelayRequest, DelayResponse, ExplainRequest, ExplainResponse, SimulationApi};
use crate::models::{DecisionOutcome, ScheduleEntry, SimulationSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    FetchSimulationState,
    FetchSchedules,
    RespondToDecision(DecisionOutcome),
    Explain { ahead: String, behind: String },
    SimulateDelay(DelayRequest),
}

#[derive(Default)]
pub struct RecordingApi {
    pub calls: RefCell<Vec<RecordedCall>>,
    pub snapshot: Option<SimulationSnapshot>,
    pub explanation: Option<String>,
    pub fail_with: Option<String>,
}

impl RecordingApi {
    pub fn failing(error: &str) -> Self {
        Self {
            fail_with: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), String> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl SimulationApi for RecordingApi {
    async fn fetch_simulation_state(&self) -> Result<SimulationSnapshot, String> {
        self.record(RecordedCall::FetchSimulationState)?;
        Ok(self.snapshot.clone().unwrap_or_default())
    }

    async fn fetch_schedules(&self) -> Result<Vec<ScheduleEntry>, String> {
        self.record(RecordedCall::FetchSchedules)?;
        Ok(Vec::new())
    }

    async fn respond_to_decision(&self, outcome: &DecisionOutcome) -> Result<(), String> {
        self.record(RecordedCall::RespondToDecision(outcome.clone()))
    }

    async fn explain(&self, request: &ExplainRequest<'_>) -> Result<ExplainResponse, String> {
        self.record(RecordedCall::Explain {
            ahead: request.ahead_train.id.clone(),
            behind: request.behind_train.id.clone(),
        })?;
        Ok(ExplainResponse {
            explanation: self.explanation.clone(),
        })
    }

    async fn simulate_delay(&self, request: &DelayRequest) -> Result<DelayResponse, String> {
        self.record(RecordedCall::SimulateDelay(request.clone()))?;
        Ok(DelayResponse::default())
    }
}
