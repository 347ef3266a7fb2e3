//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::de::DeserializeOwned;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::candidates::{CandidateError, CandidateResolver, CitySelection};
use crate::catalog::top_cities;
use crate::osrm::OsrmLegEstimator;
use crate::planner::{GeoLegEstimator, Plan, PlanError, PlanRequest, PlanSynthesizer};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/countries", get(list_countries))
        .route("/countries/:country/cities", get(list_cities))
        .route("/candidates", post(build_candidates))
        .route("/plan", post(create_plan))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List supported countries.
async fn list_countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        countries: state.catalog.supported_countries(),
    })
}

/// List the top cities of a country.
async fn list_cities(
    State(state): State<AppState>,
    Path(country): Path<String>,
    Query(query): Query<CitiesQuery>,
) -> Result<Json<CitiesResponse>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_CITY_LIMIT);
    let cities = top_cities(state.catalog.as_ref(), &country, limit);

    if cities.is_empty() {
        return Err(AppError::NotFound {
            message: format!("No cities configured for country '{}'", country.trim()),
        });
    }

    Ok(Json(CitiesResponse {
        country: state.catalog.canonicalize(&country),
        cities,
    }))
}

/// Resolve a candidate city set for a country pair.
async fn build_candidates(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CitySelection>, AppError> {
    let req: CandidatesRequest = parse_json(&body)?;

    let mut rng = match req.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let resolver = CandidateResolver::new(state.catalog.as_ref(), &state.bridges);
    let selection = resolver.build(&req.from_country, &req.to_country, req.max_cities, &mut rng)?;

    Ok(Json(selection))
}

/// Synthesize a trip plan.
async fn create_plan(State(state): State<AppState>, body: Bytes) -> Result<Json<Plan>, AppError> {
    let req: PlanRequest = parse_json(&body)?;
    let geo = GeoLegEstimator::new(state.config.estimate);

    let plan = match &state.routing {
        Some(routing) => {
            let estimator = OsrmLegEstimator::new(routing.clone(), geo);
            PlanSynthesizer::new(state.catalog.as_ref(), estimator, &state.config).synthesize(&req)?
        }
        None => PlanSynthesizer::new(state.catalog.as_ref(), geo, &state.config).synthesize(&req)?,
    };

    info!(
        cities = ?plan.cities,
        mode = %plan.routing_mode,
        total = plan.estimated_total,
        "plan created"
    );

    Ok(Json(plan))
}

/// Parse a JSON body, logging the body on failure.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "JSON parse error");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<CandidateError> for AppError {
    fn from(e: CandidateError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::BridgeTable;
    use crate::catalog::TableCatalog;
    use crate::planner::PlanConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(
            TableCatalog::builtin(),
            BridgeTable::builtin(),
            PlanConfig::default(),
        ))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_ok() {
        let response = app().oneshot(get_req("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn countries_sorted() {
        let (status, body) = send(get_req("/countries")).await;
        assert_eq!(status, StatusCode::OK);

        let countries: Vec<String> = serde_json::from_value(body["countries"].clone()).unwrap();
        assert_eq!(countries.len(), 24);
        assert!(countries.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn cities_for_alias() {
        let (status, body) = send(get_req("/countries/UK/cities?limit=2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["country"], "United Kingdom");
        assert_eq!(body["cities"], json!(["London", "Manchester"]));
    }

    #[tokio::test]
    async fn cities_unknown_country() {
        let (status, body) = send(get_req("/countries/Atlantis/cities")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("Atlantis"));
    }

    #[tokio::test]
    async fn plan_france_italy() {
        let (status, body) = send(post_json(
            "/plan",
            json!({
                "from_country": "France",
                "to_country": "Italy",
                "budget_usd": 2000,
                "start_date": "2025-06-01",
                "end_date": "2025-06-08",
                "interests": ["food"],
                "pace": "balanced"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cities"], json!(["Paris", "Rome"]));
        assert_eq!(body["routing_mode"], "estimated_geo");
        assert_eq!(body["route"][0]["mode"], "estimated_geo");
        assert_eq!(body["route"][0]["from_lat"], 48.8566);
        assert_eq!(body["itinerary"][1]["day"], 2);
        assert_eq!(body["map_points"][1]["city"], "Rome");
        assert_eq!(body["trip_days"], 8);
        assert!(body["cost_breakdown"]["total"].as_f64().unwrap() <= 2000.0);
        assert_eq!(body["estimated_total"], body["cost_breakdown"]["total"]);
    }

    #[tokio::test]
    async fn plan_rejects_unknown_pace() {
        let (status, body) = send(post_json(
            "/plan",
            json!({
                "from_country": "France",
                "to_country": "Italy",
                "budget_usd": 2000,
                "start_date": "2025-06-01",
                "end_date": "2025-06-08",
                "pace": "frantic"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn plan_rejects_negative_budget() {
        let (status, _) = send(post_json(
            "/plan",
            json!({
                "from_country": "France",
                "to_country": "Italy",
                "budget_usd": -10,
                "start_date": "2025-06-01",
                "end_date": "2025-06-08"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn plan_empty_chain_is_bad_request() {
        let (status, body) = send(post_json(
            "/plan",
            json!({
                "from_country": " ",
                "to_country": "",
                "budget_usd": 100,
                "start_date": "2025-06-01",
                "end_date": "2025-06-08"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "country chain is empty after cleaning");
    }

    #[tokio::test]
    async fn candidates_seeded() {
        let request = json!({
            "from_country": "Spain",
            "to_country": "Italy",
            "max_cities": 4,
            "seed": 7
        });
        let (status, first) = send(post_json("/candidates", request.clone())).await;
        let (_, second) = send(post_json("/candidates", request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(first["bridge_countries"], json!(["France"]));
        assert_eq!(first["candidates"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn candidates_unconfigured_country() {
        let (status, body) = send(post_json(
            "/candidates",
            json!({"from_country": "Atlantis", "to_country": "Italy"}),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "No cities configured for from_country='Atlantis'"
        );
    }

    #[tokio::test]
    async fn candidates_through_two_bridges() {
        let (status, body) = send(post_json(
            "/candidates",
            json!({"from_country": "Portugal", "to_country": "Italy", "max_cities": 6, "seed": 1}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bridge_countries"], json!(["Spain", "France"]));
        assert_eq!(body["candidates"].as_array().unwrap().len(), 6);
    }
}
