//! Maps a train's one-dimensional route position and maneuver status to a
//! point on the route map.
//!
//! Everything here is a pure function of `(Train, Route, RenderBounds)`. Bad
//! numbers (zero-length routes, negative or NaN positions, an empty maneuver
//! window) are clamped to the nearest meaningful boundary, never reported:
//! a train always gets drawn somewhere.

use crate::models::{Route, SimulationSnapshot, Train, TrainStatus};

/// Horizontal extent of the drawn track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderBounds {
    pub start_x: f64,
    pub end_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPoint {
    pub x: f64,
    pub y: f64,
}

/// Where a train is in its move between the main line and a passing loop.
/// `progress` runs 0 to 1 in the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ManeuverPhase {
    MainLine,
    Diverging { progress: f64 },
    InLoop,
    Rejoining { progress: f64 },
}

impl ManeuverPhase {
    /// Share of the vertical gap already covered towards the loop line
    #[must_use]
    pub fn loop_weight(self) -> f64 {
        match self {
            ManeuverPhase::MainLine => 0.0,
            ManeuverPhase::Diverging { progress } => progress,
            ManeuverPhase::InLoop => 1.0,
            ManeuverPhase::Rejoining { progress } => 1.0 - progress,
        }
    }
}

/// Fraction of the route covered, clamped to `[0, 1]`.
/// A route without a usable length pins every train to its start.
#[must_use]
pub fn route_fraction(position_km: f64, total_length_km: f64) -> f64 {
    if !(total_length_km.is_finite() && total_length_km > 0.0) {
        return 0.0;
    }
    let pct = position_km / total_length_km;
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 1.0)
    }
}

/// Horizontal coordinate of a kilometer mark
#[must_use]
pub fn horizontal_position(position_km: f64, route: &Route, bounds: RenderBounds) -> f64 {
    let pct = route_fraction(position_km, route.total_length_km);
    if pct >= 1.0 {
        return bounds.end_x;
    }
    let lo = bounds.start_x.min(bounds.end_x);
    let hi = bounds.start_x.max(bounds.end_x);
    (bounds.start_x + pct * (bounds.end_x - bounds.start_x)).clamp(lo, hi)
}

/// Classify the train's maneuver from its status, position and loop target
#[must_use]
pub fn maneuver_phase(train: &Train, route: &Route) -> ManeuverPhase {
    let half_window = route.half_window_km();
    let position = sanitized_position(train.position_km);
    let target = train.maneuver_target_km.filter(|km| km.is_finite());

    match (train.status, target) {
        (TrainStatus::EnRouteToLoop | TrainStatus::HaltedInLoop, Some(target)) => {
            if position >= target {
                return ManeuverPhase::InLoop;
            }
            let maneuver_start = target - half_window;
            let progress = span_fraction(position - maneuver_start, half_window);
            if progress > 0.0 {
                ManeuverPhase::Diverging { progress }
            } else {
                ManeuverPhase::MainLine
            }
        }
        // The service drops the target once the train has pulled into the loop
        (TrainStatus::HaltedInLoop, None) => ManeuverPhase::InLoop,
        (_, Some(target)) if train.halted_by.is_none() => {
            if position <= target {
                return ManeuverPhase::InLoop;
            }
            let progress = span_fraction(position - target, half_window);
            if progress < 1.0 {
                ManeuverPhase::Rejoining { progress }
            } else {
                ManeuverPhase::MainLine
            }
        }
        _ => ManeuverPhase::MainLine,
    }
}

/// Vertical coordinate, always between the main and loop reference lines
#[must_use]
pub fn vertical_position(train: &Train, route: &Route) -> f64 {
    let main_y = route.main_track_y;
    let loop_y = route.loop_track_y;

    match maneuver_phase(train, route) {
        ManeuverPhase::MainLine => main_y,
        ManeuverPhase::InLoop => loop_y,
        phase => {
            let y = main_y + phase.loop_weight() * (loop_y - main_y);
            y.clamp(main_y.min(loop_y), main_y.max(loop_y))
        }
    }
}

#[must_use]
pub fn map_train(train: &Train, route: &Route, bounds: RenderBounds) -> RenderPoint {
    RenderPoint {
        x: horizontal_position(train.position_km, route, bounds),
        y: vertical_position(train, route),
    }
}

/// Map every train of a snapshot, in snapshot order
#[must_use]
pub fn map_snapshot<'a>(
    snapshot: &'a SimulationSnapshot,
    route: &Route,
    bounds: RenderBounds,
) -> Vec<(&'a Train, RenderPoint)> {
    snapshot
        .iter()
        .map(|train| (train, map_train(train, route, bounds)))
        .collect()
}

fn sanitized_position(position_km: f64) -> f64 {
    if position_km.is_nan() {
        0.0
    } else {
        position_km.max(0.0)
    }
}

/// `distance / span` clamped to `[0, 1]`; an empty span is a step at zero
fn span_fraction(distance: f64, span: f64) -> f64 {
    if span > 0.0 {
        (distance / span).clamp(0.0, 1.0)
    } else if distance > 0.0 {
        1.0
    } else {
        0.0
    }
}
