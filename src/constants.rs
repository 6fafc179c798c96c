/// Simulation service used when no configuration is served
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5001";

/// Path (relative to the console's own origin) of the optional configuration override
pub const CONSOLE_CONFIG_PATH: &str = "/console-config.json";

/// Snapshot pull cadence
pub const SNAPSHOT_POLL_INTERVAL_MS: u64 = 1_500;

/// Schedule table pull cadence
pub const SCHEDULE_POLL_INTERVAL_MS: u64 = 5_000;

/// Configured cadences below this are raised to it
pub const MIN_POLL_INTERVAL_MS: u64 = 250;

pub const DEFAULT_MANEUVER_WINDOW_KM: f64 = 2.0;

// Map geometry (SVG user units)
pub const MAP_WIDTH: f64 = 1400.0;
pub const MAP_HEIGHT: f64 = 250.0;
pub const TRACK_START_X: f64 = 210.0;
pub const TRACK_END_X: f64 = 1310.0;
pub const DEFAULT_MAIN_TRACK_Y: f64 = 151.0;
pub const DEFAULT_LOOP_TRACK_Y: f64 = 121.0;

/// How long a toast notice stays on screen
pub const TOAST_DURATION_MS: u64 = 4_000;
