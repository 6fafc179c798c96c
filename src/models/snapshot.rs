use chrono::NaiveTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use super::Train;
use crate::time::parse_time_hms;

const INITIAL_SIMULATION_TIME: &str = "00:00:00";

/// A complete view of every live train at one simulation instant.
///
/// Each successful pull replaces the previous snapshot wholesale. Trains are
/// keyed by `id` in the order the service listed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    #[serde(default = "initial_simulation_time")]
    pub simulation_time: String,
    #[serde(default, with = "trains_by_id")]
    pub trains: IndexMap<String, Train>,
}

impl Default for SimulationSnapshot {
    fn default() -> Self {
        Self {
            simulation_time: initial_simulation_time(),
            trains: IndexMap::new(),
        }
    }
}

fn initial_simulation_time() -> String {
    INITIAL_SIMULATION_TIME.to_string()
}

impl SimulationSnapshot {
    #[must_use]
    pub fn new(simulation_time: impl Into<String>, trains: impl IntoIterator<Item = Train>) -> Self {
        Self {
            simulation_time: simulation_time.into(),
            trains: trains.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    #[must_use]
    pub fn train(&self, id: &str) -> Option<&Train> {
        self.trains.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Train> {
        self.trains.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Simulation clock, `None` when the service sent something other than `HH:MM:SS`
    #[must_use]
    pub fn clock(&self) -> Option<NaiveTime> {
        parse_time_hms(&self.simulation_time).ok()
    }
}

/// The service sends trains as a list; the console keys them by id.
/// A repeated id keeps its first position and the last payload.
mod trains_by_id {
    use crate::models::Train;
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(trains: &IndexMap<String, Train>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(trains.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<IndexMap<String, Train>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let trains = Vec::<Train>::deserialize(deserializer)?;
        Ok(trains.into_iter().map(|t| (t.id.clone(), t)).collect())
    }
}
