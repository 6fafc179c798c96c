use serde::{Deserialize, Serialize};
use std::fmt;
use crate::time::whole_seconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainType {
    Express,
    Goods,
    #[default]
    #[serde(other)]
    Local,
}

impl TrainType {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            TrainType::Express => "🚄",
            TrainType::Goods => "🚂",
            TrainType::Local => "🚃",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            TrainType::Express => "type-EXPRESS",
            TrainType::Goods => "type-GOODS",
            TrainType::Local => "type-LOCAL",
        }
    }
}

/// Movement status published by the simulation.
///
/// `ON_SCHEDULE` is the service's name for `EN_ROUTE`. Statuses the console
/// does not know about decode as `Unknown` and are drawn on the main line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainStatus {
    #[default]
    #[serde(alias = "ON_SCHEDULE")]
    EnRoute,
    EnRouteToLoop,
    HaltedInLoop,
    Halted,
    AwaitingDecision,
    AdaptiveCruise,
    Arrived,
    #[serde(other)]
    Unknown,
}

impl TrainStatus {
    #[must_use]
    pub fn is_halted(self) -> bool {
        matches!(self, TrainStatus::Halted | TrainStatus::HaltedInLoop)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrainStatus::EnRoute => "EN ROUTE",
            TrainStatus::EnRouteToLoop => "EN ROUTE TO LOOP",
            TrainStatus::HaltedInLoop => "HALTED IN LOOP",
            TrainStatus::Halted => "HALTED",
            TrainStatus::AwaitingDecision => "AWAITING DECISION",
            TrainStatus::AdaptiveCruise => "ADAPTIVE CRUISE",
            TrainStatus::Arrived => "ARRIVED",
            TrainStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a proposed plan asks the halted train to do.
///
/// Actions the console does not recognise are kept verbatim so they can still
/// be shown to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanAction {
    MoveToLoopAndHalt,
    Halt,
    Other(String),
}

impl From<String> for PlanAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "MOVE_TO_LOOP_AND_HALT" => PlanAction::MoveToLoopAndHalt,
            "HALT" => PlanAction::Halt,
            _ => PlanAction::Other(value),
        }
    }
}

impl From<PlanAction> for String {
    fn from(action: PlanAction) -> Self {
        match action {
            PlanAction::MoveToLoopAndHalt => "MOVE_TO_LOOP_AND_HALT".to_string(),
            PlanAction::Halt => "HALT".to_string(),
            PlanAction::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedPlan {
    pub action: PlanAction,
    #[serde(default)]
    pub location_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingStation {
    pub name: String,
    pub distance_km: f64,
    #[serde(default)]
    pub eta_seconds: Option<f64>,
}

/// One live train as of a single snapshot. Identity is `id`; nothing else
/// about the value survives from one poll to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub train_type: TrainType,
    #[serde(default)]
    pub status: TrainStatus,
    pub position_km: f64,
    #[serde(default)]
    pub speed_kmh: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default)]
    pub next_station: String,
    #[serde(default)]
    pub eta_next_station: Option<f64>,
    #[serde(default)]
    pub maneuver_target_km: Option<f64>,
    #[serde(default)]
    pub halted_by: Option<String>,
    #[serde(default)]
    pub proposed_plan: Option<ProposedPlan>,
    #[serde(default)]
    pub upcoming_stations: Vec<UpcomingStation>,
}

impl Train {
    /// Minimal en-route train at the given position
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, position_km: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            train_type: TrainType::default(),
            status: TrainStatus::EnRoute,
            position_km,
            speed_kmh: 0.0,
            priority: None,
            next_station: String::new(),
            eta_next_station: None,
            maneuver_target_km: None,
            halted_by: None,
            proposed_plan: None,
            upcoming_stations: Vec::new(),
        }
    }

    /// ETA to the next station in whole seconds; negative or absent means unknown
    #[must_use]
    pub fn eta_seconds(&self) -> Option<u64> {
        whole_seconds(self.eta_next_station)
    }

    /// The plan awaiting a controller decision, if this train is waiting on one
    #[must_use]
    pub fn pending_plan(&self) -> Option<&ProposedPlan> {
        if self.status == TrainStatus::AwaitingDecision {
            self.proposed_plan.as_ref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
