use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use triplog_core::catalog::DestinationCatalog;
use triplog_core::domain::destination::Destination;
use triplog_core::domain::recommendation::RecommendationSet;
use triplog_core::domain::stats::{self, SpendingSummary, TripStats};
use triplog_core::domain::trip::{NewTrip, TripRecord};
use triplog_core::engine::{EngineConfig, RecommendationEngine};
use triplog_core::provider::DestinationProvider;
use triplog_core::storage::trips::PgTripStore;

const DEFAULT_PORT: u16 = 5000;
const MAX_POPULAR_LIMIT: usize = 50;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = triplog_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let engine_config = EngineConfig::from_env();
    engine_config.validate()?;

    let pool = connect_pool(&settings).await;
    let catalog = match &pool {
        Some(pool) => match triplog_core::storage::destinations::load_catalog(pool).await {
            Ok(catalog) => catalog,
            Err(e) => {
                sentry_anyhow::capture_anyhow(&e);
                tracing::error!(error = %e, "destination catalog load failed; serving an empty catalog");
                DestinationCatalog::default()
            }
        },
        None => DestinationCatalog::default(),
    };
    if catalog.is_empty() {
        tracing::warn!("destination catalog is empty; run triplog_seeder to populate it");
    }

    tracing::info!(
        catalog_len = catalog.len(),
        neighbors = engine_config.neighbors,
        cold_start_threshold = engine_config.cold_start_threshold,
        "recommendation engine ready"
    );

    let state = AppState {
        pool,
        catalog,
        engine: RecommendationEngine::new(engine_config),
    };

    let app = router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn connect_pool(settings: &triplog_core::config::Settings) -> Option<PgPool> {
    match settings.require_database_url() {
        Ok(db_url) => match sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
        {
            Ok(pool) => match triplog_core::storage::migrate(&pool).await {
                Ok(()) => Some(pool),
                Err(e) => {
                    sentry_anyhow::capture_anyhow(&e);
                    tracing::error!(error = %e, "db migrations failed; starting API in degraded mode");
                    None
                }
            },
            Err(e) => {
                let err = anyhow::Error::new(e);
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(error = %err, "db connect failed; starting API in degraded mode");
                None
            }
        },
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "DATABASE_URL missing; starting API in degraded mode");
            None
        }
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/destinations/popular", get(popular_destinations))
        .route("/users/:user_id/trips", get(list_trips).post(create_trip))
        .route("/users/:user_id/trips/stats", get(trip_stats))
        .route("/users/:user_id/trips/spending", get(spending))
        .route("/users/:user_id/trips/:trip_id", get(get_trip))
        .route("/users/:user_id/recommendations", get(recommendations))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    pool: Option<PgPool>,
    catalog: DestinationCatalog,
    engine: RecommendationEngine,
}

impl AppState {
    fn trip_store(&self) -> Result<PgTripStore, ApiError> {
        self.pool
            .clone()
            .map(PgTripStore::new)
            .ok_or_else(|| ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "database unavailable"))
    }
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn internal(err: anyhow::Error) -> Self {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct PopularParams {
    limit: Option<usize>,
}

async fn popular_destinations(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Result<Json<Vec<Destination>>, ApiError> {
    let limit = params
        .limit
        .unwrap_or(state.engine.config().cold_start_size)
        .min(MAX_POPULAR_LIMIT);
    let popular = DestinationProvider::top_by_popularity(&state.catalog, limit)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(popular))
}

#[derive(Debug, Serialize)]
struct CreatedTrip {
    id: Uuid,
}

async fn create_trip(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    payload: Result<Json<NewTrip>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedTrip>), ApiError> {
    let Json(trip) =
        payload.map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
    let trip = trip
        .validate()
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.to_string()))?;
    let store = state.trip_store()?;

    let id = store.insert(user_id, &trip).await.map_err(ApiError::internal)?;
    Ok((StatusCode::CREATED, Json(CreatedTrip { id })))
}

async fn list_trips(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<TripRecord>>, ApiError> {
    let store = state.trip_store()?;
    let trips = store
        .list_for_user(user_id)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(trips))
}

async fn get_trip(
    State(state): State<AppState>,
    Path((user_id, trip_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TripRecord>, ApiError> {
    let store = state.trip_store()?;
    let trip = store
        .get_for_user(user_id, trip_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "trip not found"))?;
    Ok(Json(trip))
}

async fn trip_stats(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<TripStats>, ApiError> {
    let store = state.trip_store()?;
    let trips = store
        .list_for_user(user_id)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(stats::trip_stats(&trips)))
}

async fn spending(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SpendingSummary>, ApiError> {
    let store = state.trip_store()?;
    let trips = store
        .list_for_user(user_id)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(stats::spending_summary(&trips)))
}

async fn recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RecommendationSet>, ApiError> {
    let store = state.trip_store()?;
    let set = triplog_core::provider::recommend_for_user(
        &state.engine,
        &store,
        &state.catalog,
        user_id,
    )
    .await
    .map_err(ApiError::internal)?;
    Ok(Json(set))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &triplog_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn degraded_app() -> Router {
        router(AppState {
            pool: None,
            catalog: DestinationCatalog::new(vec![
                Destination::new("Naples", 1800.0, 4.4, 74),
                Destination::new("Bangkok", 2600.0, 4.8, 92),
                Destination::new("Vienna", 5000.0, 4.8, 87),
            ]),
            engine: RecommendationEngine::default(),
        })
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    fn post_trip(user_id: Uuid, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/users/{user_id}/trips"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn recommendations_need_the_database() {
        let req = Request::builder()
            .uri(format!("/users/{}/recommendations", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(degraded_app(), req).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "database unavailable");
    }

    #[tokio::test]
    async fn malformed_trip_body_is_a_json_400() {
        let req = post_trip(
            Uuid::new_v4(),
            json!({
                "destination": "Lisbon",
                "start_date": "2025-04-01",
                "end_date": "2025-04-06",
                "budget": "cheap",
                "rating": 4.0,
            }),
        );
        let (status, body) = send(degraded_app(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msg = body["error"].as_str().unwrap();
        assert!(msg.contains("budget"), "{msg}");
    }

    #[tokio::test]
    async fn missing_field_and_bad_date_are_json_400s() {
        let missing = post_trip(
            Uuid::new_v4(),
            json!({"destination": "Lisbon", "budget": 100.0, "rating": 4.0}),
        );
        let (status, body) = send(degraded_app(), missing).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let bad_date = post_trip(
            Uuid::new_v4(),
            json!({
                "destination": "Lisbon",
                "start_date": "04/01/2025",
                "end_date": "2025-04-06",
                "budget": 100.0,
                "rating": 4.0,
            }),
        );
        let (status, body) = send(degraded_app(), bad_date).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn invalid_trip_is_rejected_before_touching_the_database() {
        let req = post_trip(
            Uuid::new_v4(),
            json!({
                "destination": "Lisbon",
                "start_date": "2025-04-01",
                "end_date": "2025-04-06",
                "budget": 100.0,
                "rating": 7.0,
            }),
        );
        let (status, body) = send(degraded_app(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("rating"));
    }

    #[tokio::test]
    async fn valid_trip_in_degraded_mode_is_503() {
        let req = post_trip(
            Uuid::new_v4(),
            json!({
                "destination": "Lisbon",
                "start_date": "2025-04-01",
                "end_date": "2025-04-06",
                "budget": 100.0,
                "rating": 4.0,
            }),
        );
        let (status, _) = send(degraded_app(), req).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn popular_destinations_are_served_from_the_catalog() {
        let req = Request::builder()
            .uri("/destinations/popular?limit=2")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(degraded_app(), req).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Bangkok", "Vienna"]);
        assert_eq!(body[0]["popularity"], 92);
    }

    #[tokio::test]
    async fn popular_destinations_default_to_cold_start_size() {
        let req = Request::builder()
            .uri("/destinations/popular")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(degraded_app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }
}
