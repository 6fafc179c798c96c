//! Controller-facing projection of the decision workflow.
//!
//! The authoritative `status` field is the only state: a train offers
//! accept/reject while it is `AWAITING_DECISION` with a plan, and answering
//! does not change anything locally. The next snapshot that shows a new
//! status is what moves the train on. Sending the same answer twice is left
//! to the service to arbitrate.

use crate::api::SimulationApi;
use crate::models::{Decision, DecisionOutcome, PlanAction, ProposedPlan, SimulationSnapshot, Train};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainAction {
    Explain,
    Accept,
    Reject,
}

impl TrainAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrainAction::Explain => "Explain Why?",
            TrainAction::Accept => "Accept",
            TrainAction::Reject => "Reject",
        }
    }

    #[must_use]
    pub fn decision(self) -> Option<Decision> {
        match self {
            TrainAction::Explain => None,
            TrainAction::Accept => Some(Decision::Accept),
            TrainAction::Reject => Some(Decision::Reject),
        }
    }
}

/// Affordances a train card offers in the train's current status
#[must_use]
pub fn available_actions(train: &Train) -> Vec<TrainAction> {
    if train.status.is_halted() {
        vec![TrainAction::Explain]
    } else if train.pending_plan().is_some() {
        vec![TrainAction::Accept, TrainAction::Reject]
    } else {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDecision<'a> {
    pub train: &'a Train,
    pub plan: &'a ProposedPlan,
}

/// Trains waiting on the controller, in snapshot order
#[must_use]
pub fn pending_decisions(snapshot: &SimulationSnapshot) -> Vec<PendingDecision<'_>> {
    snapshot
        .iter()
        .filter_map(|train| train.pending_plan().map(|plan| PendingDecision { train, plan }))
        .collect()
}

/// One-line summary of a proposed plan for the controller
#[must_use]
pub fn describe_plan(plan: &ProposedPlan) -> String {
    let mut text = match (&plan.action, plan.location_km) {
        (PlanAction::MoveToLoopAndHalt, Some(km)) => format!("Move to loop at {km:.1} km"),
        (PlanAction::MoveToLoopAndHalt, None) => "Move to next loop".to_string(),
        (PlanAction::Halt, _) => "Halt immediately".to_string(),
        (PlanAction::Other(action), Some(km)) => format!("{action} at {km:.1} km"),
        (PlanAction::Other(action), None) => action.clone(),
    };

    if let Some(reason) = plan.reason.as_deref().filter(|r| !r.is_empty()) {
        text.push_str(&format!(" ({reason})"));
    }

    text
}

/// Send the controller's answer for `train_id`.
///
/// Fire-and-forget: the snapshot is not touched and nothing is deduplicated.
///
/// # Errors
///
/// Returns an error if the command could not be delivered.
pub async fn submit_decision<A: SimulationApi>(
    api: &A,
    train_id: &str,
    decision: Decision,
) -> Result<DecisionOutcome, String> {
    let outcome = DecisionOutcome::new(train_id, decision);
    api.respond_to_decision(&outcome).await?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{RecordedCall, RecordingApi};
    use crate::models::TrainStatus;
    use futures_lite::future::block_on;

    fn awaiting(id: &str, action: PlanAction, location_km: Option<f64>) -> Train {
        let mut train = Train::new(id, format!("Train {id}"), 40.0);
        train.status = TrainStatus::AwaitingDecision;
        train.proposed_plan = Some(ProposedPlan {
            action,
            location_km,
            caused_by: Some("E1".to_string()),
            reason: None,
        });
        train
    }

    #[test]
    fn test_only_awaiting_with_plan_offers_decision() {
        let train = awaiting("G1", PlanAction::Halt, None);
        assert_eq!(available_actions(&train), vec![TrainAction::Accept, TrainAction::Reject]);

        let mut without_plan = train.clone();
        without_plan.proposed_plan = None;
        assert!(available_actions(&without_plan).is_empty());

        let mut en_route = train;
        en_route.status = TrainStatus::EnRoute;
        assert!(available_actions(&en_route).is_empty());
    }

    #[test]
    fn test_halted_trains_offer_explain() {
        let mut train = Train::new("G1", "Goods", 40.0);
        train.status = TrainStatus::HaltedInLoop;
        assert_eq!(available_actions(&train), vec![TrainAction::Explain]);

        train.status = TrainStatus::Halted;
        assert_eq!(available_actions(&train), vec![TrainAction::Explain]);
    }

    #[test]
    fn test_pending_decisions_in_snapshot_order() {
        let snapshot = SimulationSnapshot::new(
            "00:10:00",
            vec![
                awaiting("B", PlanAction::Halt, None),
                Train::new("X", "Runner", 10.0),
                awaiting("A", PlanAction::MoveToLoopAndHalt, Some(85.5)),
            ],
        );

        let pending = pending_decisions(&snapshot);
        let ids: Vec<&str> = pending.iter().map(|p| p.train.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_describe_plan() {
        let plan = ProposedPlan {
            action: PlanAction::MoveToLoopAndHalt,
            location_km: Some(85.5),
            caused_by: None,
            reason: None,
        };
        assert_eq!(describe_plan(&plan), "Move to loop at 85.5 km");

        let halt = ProposedPlan {
            action: PlanAction::Halt,
            location_km: None,
            caused_by: None,
            reason: Some("No loop lines ahead".to_string()),
        };
        assert_eq!(describe_plan(&halt), "Halt immediately (No loop lines ahead)");
    }

    #[test]
    fn test_submit_sends_outcome_without_touching_snapshot() {
        let api = RecordingApi::default();
        let snapshot = SimulationSnapshot::new("00:10:00", vec![awaiting("G1", PlanAction::Halt, None)]);

        let outcome = block_on(submit_decision(&api, "G1", Decision::Accept)).expect("submit should succeed");
        assert_eq!(outcome, DecisionOutcome::new("G1", Decision::Accept));
        assert_eq!(
            api.calls(),
            vec![RecordedCall::RespondToDecision(DecisionOutcome::new("G1", Decision::Accept))]
        );

        // Still awaiting until the service says otherwise
        assert_eq!(available_actions(snapshot.train("G1").expect("train present")).len(), 2);
    }

    #[test]
    fn test_repeated_decision_is_sent_each_time() {
        let api = RecordingApi::default();
        block_on(submit_decision(&api, "G1", Decision::Reject)).expect("first submit");
        block_on(submit_decision(&api, "G1", Decision::Reject)).expect("second submit");
        assert_eq!(api.calls().len(), 2);
    }

    #[test]
    fn test_submit_failure_is_reported() {
        let api = RecordingApi::failing("Server error: 404");
        let result = block_on(submit_decision(&api, "G1", Decision::Accept));
        assert_eq!(result, Err("Server error: 404".to_string()));
    }
}
