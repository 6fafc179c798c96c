use actix_files::Files;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Overrides for the console's built-in defaults. Unset variables are left
/// out so the console keeps its own default for them.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
struct ConsoleConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<RouteOverrides>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct RouteOverrides {
    maneuver_window_km: f64,
}

impl ConsoleConfigOverrides {
    fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: lookup("RAIL_API_BASE_URL")
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            snapshot_interval_ms: parse_var(&lookup, "SNAPSHOT_INTERVAL_MS"),
            schedule_interval_ms: parse_var(&lookup, "SCHEDULE_INTERVAL_MS"),
            route: parse_var::<f64>(&lookup, "MANEUVER_WINDOW_KM")
                .filter(|km| km.is_finite())
                .map(|maneuver_window_km| RouteOverrides { maneuver_window_km }),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse().ok())
}

#[get("/console-config.json")]
async fn console_config(overrides: web::Data<ConsoleConfigOverrides>) -> impl Responder {
    HttpResponse::Ok().json(overrides.get_ref())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let overrides = web::Data::new(ConsoleConfigOverrides::from_env());
    println!("Starting server on 0.0.0.0:{port}");
    println!("Console config overrides: {:?}", overrides.get_ref());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(overrides.clone())
            .service(console_config)
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_no_variables_serves_empty_object() {
        let overrides = ConsoleConfigOverrides::from_lookup(lookup_from(&[]));
        assert_eq!(overrides, ConsoleConfigOverrides::default());
        assert_eq!(serde_json::to_string(&overrides).expect("serialize"), "{}");
    }

    #[test]
    fn test_variables_are_mapped() {
        let overrides = ConsoleConfigOverrides::from_lookup(lookup_from(&[
            ("RAIL_API_BASE_URL", " http://sim:5001 "),
            ("SNAPSHOT_INTERVAL_MS", "1000"),
            ("MANEUVER_WINDOW_KM", "3.5"),
        ]));

        let json = serde_json::to_value(&overrides).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "api_base_url": "http://sim:5001",
                "snapshot_interval_ms": 1000,
                "route": {"maneuver_window_km": 3.5}
            })
        );
    }

    #[test]
    fn test_unparseable_variables_are_ignored() {
        let overrides = ConsoleConfigOverrides::from_lookup(lookup_from(&[
            ("RAIL_API_BASE_URL", "  "),
            ("SCHEDULE_INTERVAL_MS", "soon"),
            ("MANEUVER_WINDOW_KM", "NaN"),
        ]));
        assert_eq!(overrides, ConsoleConfigOverrides::default());
    }

    #[actix_web::test]
    async fn test_console_config_endpoint() {
        let overrides = ConsoleConfigOverrides {
            schedule_interval_ms: Some(8000),
            ..ConsoleConfigOverrides::default()
        };
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(overrides))
                .service(console_config),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/console-config.json").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({"schedule_interval_ms": 8000}));
    }
}
