use leptos::{component, view, CollectView, IntoView, Signal, SignalWith};
use crate::config::MapGeometry;
use crate::models::{Route, SimulationSnapshot};
use crate::position::{horizontal_position, map_snapshot, RenderBounds};

/// Narrowest a passing loop is drawn, in map units either side of its station
const MIN_LOOP_HALF_SPAN: f64 = 14.0;

/// Vertical offset of station labels below the main line
const STATION_LABEL_OFFSET: f64 = 28.0;

const TRAIN_MARKER_RADIUS: f64 = 6.0;

/// SVG path of a passing loop: leaves the main line, runs along the loop line
/// and rejoins symmetrically around `center_x`.
#[must_use]
pub fn loop_path_data(center_x: f64, half_span: f64, main_y: f64, loop_y: f64) -> String {
    let half_span = half_span.max(0.0);
    let shoulder = half_span / 2.0;
    format!(
        "M {:.1} {main_y:.1} L {:.1} {loop_y:.1} L {:.1} {loop_y:.1} L {:.1} {main_y:.1}",
        center_x - half_span,
        center_x - shoulder,
        center_x + shoulder,
        center_x + half_span,
    )
}

fn loop_half_span(station_km: f64, route: &Route, bounds: RenderBounds) -> f64 {
    let half_window = route.half_window_km();
    let left = horizontal_position(station_km - half_window, route, bounds);
    let right = horizontal_position(station_km + half_window, route, bounds);
    ((right - left) / 2.0).max(MIN_LOOP_HALF_SPAN)
}

#[component]
#[must_use]
pub fn RouteMap(
    snapshot: Signal<Option<SimulationSnapshot>>,
    route: Route,
    map: MapGeometry,
) -> impl IntoView {
    let bounds = map.bounds();
    let main_y = route.main_track_y;
    let loop_y = route.loop_track_y;

    let loops = route
        .loop_stations()
        .map(|station| {
            let center_x = horizontal_position(station.position_km, &route, bounds);
            let half_span = loop_half_span(station.position_km, &route, bounds);
            view! {
                <path
                    class="track loop-track"
                    d={loop_path_data(center_x, half_span, main_y, loop_y)}
                />
            }
        })
        .collect_view();

    let stations = route
        .stations
        .iter()
        .map(|station| {
            let x = horizontal_position(station.position_km, &route, bounds);
            view! {
                <g class=format!("station station-{}", station.slug())>
                    <circle cx=x cy=main_y r="5"/>
                    <text x=x y={main_y + STATION_LABEL_OFFSET} text-anchor="middle">
                        {station.name.clone()}
                    </text>
                    <text class="station-km" x=x y={main_y + STATION_LABEL_OFFSET + 14.0} text-anchor="middle">
                        {format!("{:.1} km", station.position_km)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let trains = move || {
        snapshot.with(|snapshot| {
            let Some(snapshot) = snapshot else {
                return ().into_view();
            };
            map_snapshot(snapshot, &route, bounds)
                .into_iter()
                .map(|(train, point)| {
                    let title = format!("{} - {}", train.display_name(), train.status);
                    view! {
                        <g
                            class=format!("train-marker {}", train.train_type.css_class())
                            transform=format!("translate({:.1} {:.1})", point.x, point.y)
                        >
                            <title>{title}</title>
                            <circle r=TRAIN_MARKER_RADIUS/>
                            <text y="-10" text-anchor="middle">{train.id.clone()}</text>
                        </g>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="route-map">
            <svg viewBox={map.view_box()} preserveAspectRatio="xMidYMid meet">
                <line
                    class="track main-track"
                    x1={bounds.start_x} y1=main_y
                    x2={bounds.end_x} y2=main_y
                />
                {loops}
                {stations}
                <g class="trains">{trains}</g>
            </svg>
        </section>
    }
}
