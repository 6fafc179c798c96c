use serde::de::DeserializeOwned;
use serde::Serialize;
use super::payloads::{DelayRequest, DelayResponse, ExplainRequest, ExplainResponse};
use crate::models::{DecisionOutcome, ScheduleEntry, SimulationSnapshot};

const SIMULATION_STATE_PATH: &str = "/api/get_simulation_state";
const SCHEDULES_PATH: &str = "/api/schedules";
const RESPOND_TO_DECISION_PATH: &str = "/api/respond_to_decision";
const EXPLAIN_PATH: &str = "/api/explain";
const SIMULATE_DELAY_PATH: &str = "/api/simulate_delay";

/// Request/response surface of the remote simulation
#[allow(async_fn_in_trait)]
pub trait SimulationApi {
    /// Pull the current snapshot of every live train
    async fn fetch_simulation_state(&self) -> Result<SimulationSnapshot, String>;

    /// Pull the static timetable
    async fn fetch_schedules(&self) -> Result<Vec<ScheduleEntry>, String>;

    /// Answer a proposed plan. The response body carries nothing the console needs.
    async fn respond_to_decision(&self, outcome: &DecisionOutcome) -> Result<(), String>;

    /// Ask why a train was halted for another
    async fn explain(&self, request: &ExplainRequest<'_>) -> Result<ExplainResponse, String>;

    /// Inject a delay into a running train
    async fn simulate_delay(&self, request: &DelayRequest) -> Result<DelayResponse, String>;
}

/// [`SimulationApi`] over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpSimulationClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpSimulationClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        self.http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("Server error: {e}"))?
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to deserialize: {e}"))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> Result<reqwest::Response, String> {
        self.http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("Server error: {e}"))
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T, String> {
        self.post(path, body)
            .await?
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to deserialize: {e}"))
    }
}

impl SimulationApi for HttpSimulationClient {
    async fn fetch_simulation_state(&self) -> Result<SimulationSnapshot, String> {
        self.get_json(SIMULATION_STATE_PATH).await
    }

    async fn fetch_schedules(&self) -> Result<Vec<ScheduleEntry>, String> {
        self.get_json(SCHEDULES_PATH).await
    }

    async fn respond_to_decision(&self, outcome: &DecisionOutcome) -> Result<(), String> {
        self.post(RESPOND_TO_DECISION_PATH, outcome).await.map(|_| ())
    }

    async fn explain(&self, request: &ExplainRequest<'_>) -> Result<ExplainResponse, String> {
        self.post_json(EXPLAIN_PATH, request).await
    }

    async fn simulate_delay(&self, request: &DelayRequest) -> Result<DelayResponse, String> {
        self.post_json(SIMULATE_DELAY_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = HttpSimulationClient::new("http://127.0.0.1:5001/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5001");
        assert_eq!(
            client.endpoint(SIMULATION_STATE_PATH),
            "http://127.0.0.1:5001/api/get_simulation_state"
        );
    }

    #[test]
    fn test_empty_base_url_targets_same_origin() {
        let client = HttpSimulationClient::new("  ");
        assert_eq!(client.endpoint(SCHEDULES_PATH), "/api/schedules");
    }
}
