use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use crate::constants::{
    CONSOLE_CONFIG_PATH, DEFAULT_API_BASE_URL, MAP_HEIGHT, MAP_WIDTH, MIN_POLL_INTERVAL_MS,
    SCHEDULE_POLL_INTERVAL_MS, SNAPSHOT_POLL_INTERVAL_MS, TRACK_END_X, TRACK_START_X,
};
use crate::models::Route;
use crate::position::RenderBounds;

/// Size of the route map and the horizontal extent of the drawn track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapGeometry {
    pub width: f64,
    pub height: f64,
    pub track_start_x: f64,
    pub track_end_x: f64,
}

impl Default for MapGeometry {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            track_start_x: TRACK_START_X,
            track_end_x: TRACK_END_X,
        }
    }
}

impl MapGeometry {
    #[must_use]
    pub fn bounds(&self) -> RenderBounds {
        RenderBounds {
            start_x: self.track_start_x,
            end_x: self.track_end_x,
        }
    }

    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Console settings. Every key is optional in the served JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub snapshot_interval_ms: u64,
    pub schedule_interval_ms: u64,
    pub route: Route,
    pub map: MapGeometry,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            snapshot_interval_ms: SNAPSHOT_POLL_INTERVAL_MS,
            schedule_interval_ms: SCHEDULE_POLL_INTERVAL_MS,
            route: Route::default(),
            map: MapGeometry::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a served configuration, filling gaps with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of the expected shape.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str::<Self>(text)
            .map(Self::normalized)
            .map_err(|e| format!("Failed to parse console config: {e}"))
    }

    /// Raise cadences to the floor and repair the route
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.snapshot_interval_ms = self.snapshot_interval_ms.max(MIN_POLL_INTERVAL_MS);
        self.schedule_interval_ms = self.schedule_interval_ms.max(MIN_POLL_INTERVAL_MS);
        self.route = self.route.normalized();
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = DEFAULT_API_BASE_URL.to_string();
        }
        self
    }

    /// Fetch `/console-config.json` from the console's own origin.
    /// Any failure falls back to the defaults.
    pub async fn load() -> Self {
        match fetch_served_config().await {
            Ok(config) => {
                crate::log!("Loaded console config, simulation at {}", config.api_base_url);
                config
            }
            Err(e) => {
                leptos::logging::warn!("Using default console config: {e}");
                Self::default()
            }
        }
    }
}

async fn fetch_served_config() -> Result<ConsoleConfig, String> {
    let origin = web_sys::window()
        .ok_or("No window")?
        .location()
        .origin()
        .map_err(|e: JsValue| format!("No origin: {e:?}"))?;

    let text = reqwest::get(format!("{origin}{CONSOLE_CONFIG_PATH}"))
        .await
        .map_err(|e| format!("Request failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("Server error: {e}"))?
        .text()
        .await
        .map_err(|e| format!("Failed to read body: {e}"))?;

    ConsoleConfig::from_json(&text)
}
