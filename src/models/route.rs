use serde::{Deserialize, Serialize};
use super::Station;
use crate::constants::{DEFAULT_LOOP_TRACK_Y, DEFAULT_MAIN_TRACK_Y, DEFAULT_MANEUVER_WINDOW_KM};

/// Static description of the corridor: stations, length, and the two
/// reference lines a train is drawn on.
///
/// Every field falls back to the default corridor when missing, so a partial
/// override such as `{"maneuver_window_km": 5.0}` is a valid route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub stations: Vec<Station>,
    pub total_length_km: f64,
    pub main_track_y: f64,
    pub loop_track_y: f64,
    /// Distance over which a train moves between the main line and a loop.
    /// Half of it is spent on each side of the loop's kilometer mark.
    pub maneuver_window_km: f64,
}

impl Default for Route {
    fn default() -> Self {
        Self::mumbai_pune()
    }
}

impl Route {
    /// The Mumbai CST to Pune corridor with passing loops at every
    /// intermediate station
    #[must_use]
    pub fn mumbai_pune() -> Self {
        Self {
            stations: vec![
                Station::new("MUMBAI CST", 0.0),
                Station::new("THANE", 41.9),
                Station::new("KALYAN", 85.5),
                Station::new("KARJAT", 118.7),
                Station::new("LONAVALA", 150.1),
                Station::new("PUNE", 192.0),
            ],
            total_length_km: 192.0,
            main_track_y: DEFAULT_MAIN_TRACK_Y,
            loop_track_y: DEFAULT_LOOP_TRACK_Y,
            maneuver_window_km: DEFAULT_MANEUVER_WINDOW_KM,
        }
    }

    /// Half of the maneuver window, zero when the window is unusable
    #[must_use]
    pub fn half_window_km(&self) -> f64 {
        if self.maneuver_window_km.is_finite() && self.maneuver_window_km > 0.0 {
            self.maneuver_window_km / 2.0
        } else {
            0.0
        }
    }

    /// Stations that have a passing loop (every station except the two termini)
    pub fn loop_stations(&self) -> impl Iterator<Item = &Station> {
        let last = self.stations.len().saturating_sub(1);
        self.stations
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != 0 && *idx != last)
            .map(|(_, station)| station)
    }

    /// Sort stations by distance and repair unusable lengths.
    ///
    /// A missing or non-positive total length is replaced by the furthest
    /// station, and an unusable window collapses to zero.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.stations
            .sort_by(|a, b| a.position_km.total_cmp(&b.position_km));

        if !(self.total_length_km.is_finite() && self.total_length_km > 0.0) {
            self.total_length_km = self
                .stations
                .last()
                .map_or(0.0, |s| s.position_km.max(0.0));
        }

        if !(self.maneuver_window_km.is_finite() && self.maneuver_window_km >= 0.0) {
            self.maneuver_window_km = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_is_mumbai_pune() {
        let route = Route::default();
        assert_eq!(route.stations.len(), 6);
        assert_eq!(route.total_length_km, 192.0);
        assert_eq!(route.stations[0].name, "MUMBAI CST");
        assert_eq!(route.stations[5].name, "PUNE");
    }

    #[test]
    fn test_loop_stations_skip_termini() {
        let route = Route::default();
        let names: Vec<&str> = route.loop_stations().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["THANE", "KALYAN", "KARJAT", "LONAVALA"]);
    }

    #[test]
    fn test_loop_stations_empty_route() {
        let route = Route {
            stations: Vec::new(),
            ..Route::default()
        };
        assert_eq!(route.loop_stations().count(), 0);
    }

    #[test]
    fn test_half_window() {
        let mut route = Route::default();
        route.maneuver_window_km = 5.0;
        assert_eq!(route.half_window_km(), 2.5);

        route.maneuver_window_km = -1.0;
        assert_eq!(route.half_window_km(), 0.0);

        route.maneuver_window_km = f64::NAN;
        assert_eq!(route.half_window_km(), 0.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let route: Route = serde_json::from_str(r#"{"maneuver_window_km": 5.0}"#)
            .expect("partial route should deserialize");
        assert_eq!(route.maneuver_window_km, 5.0);
        assert_eq!(route.total_length_km, 192.0);
        assert_eq!(route.main_track_y, DEFAULT_MAIN_TRACK_Y);
    }

    #[test]
    fn test_normalized_repairs_length_and_order() {
        let route = Route {
            stations: vec![Station::new("B", 20.0), Station::new("A", 0.0)],
            total_length_km: 0.0,
            maneuver_window_km: f64::INFINITY,
            ..Route::default()
        }
        .normalized();

        assert_eq!(route.stations[0].name, "A");
        assert_eq!(route.total_length_km, 20.0);
        assert_eq!(route.maneuver_window_km, 0.0);
    }
}
