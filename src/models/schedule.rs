use serde::{Deserialize, Serialize};
use super::TrainType;
use crate::time::format_clock_seconds;

/// Static timetable row. Independent of live trains: an entry may or may not
/// have spawned a train yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub train_type: TrainType,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub departure_time_seconds: i64,
    #[serde(default)]
    pub start_station: Option<String>,
    #[serde(default)]
    pub end_station: Option<String>,
}

impl ScheduleEntry {
    #[must_use]
    pub fn departure_label(&self) -> String {
        format_clock_seconds(self.departure_time_seconds)
    }

    /// Start and end station for the table, `-` when the service sent neither
    #[must_use]
    pub fn journey_label(&self) -> String {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => format!("{start} → {end}"),
            (Some(start), None) => format!("from {start}"),
            (None, Some(end)) => format!("to {end}"),
            (None, None) => "-".to_string(),
        }
    }
}
