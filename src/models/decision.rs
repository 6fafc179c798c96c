use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Accept => f.write_str("accept"),
            Decision::Reject => f.write_str("reject"),
        }
    }
}

/// One-shot command sent when the controller answers a proposed plan.
/// Nothing is kept locally once it has been sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub train_id: String,
    pub decision: Decision,
}

impl DecisionOutcome {
    #[must_use]
    pub fn new(train_id: impl Into<String>, decision: Decision) -> Self {
        Self {
            train_id: train_id.into(),
            decision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let outcome = DecisionOutcome::new("T9", Decision::Reject);
        let value = serde_json::to_value(&outcome).expect("outcome should serialize");
        assert_eq!(value, serde_json::json!({"train_id": "T9", "decision": "reject"}));
    }
}
