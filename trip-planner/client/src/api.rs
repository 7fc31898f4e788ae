/// HTTP API for the planner
/// - GET  /health
/// - GET  /airports
/// - POST /plan

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use trip_core::{TripRequest, AIRPORTS};

use crate::orchestration::Planner;
use crate::render::PlanView;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct AirportEntry {
    code: &'static str,
    label: String,
}

/// Response for POST /plan
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub success: bool,
    pub plan_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanResponse {
    fn failure(plan_id: String, error: String) -> Self {
        Self {
            success: false,
            plan_id,
            plan: None,
            error: Some(error),
        }
    }
}

pub fn router(planner: Arc<Planner>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/airports", get(list_airports))
        .route("/plan", post(create_plan))
        .layer(CorsLayer::permissive())
        .layer(Extension(planner))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn list_airports() -> Json<Vec<AirportEntry>> {
    Json(
        AIRPORTS
            .iter()
            .map(|airport| AirportEntry {
                code: airport.code,
                label: airport.label(),
            })
            .collect(),
    )
}

async fn create_plan(
    Extension(planner): Extension<Arc<Planner>>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> (StatusCode, Json<PlanResponse>) {
    let plan_id = format!("plan_{}", uuid::Uuid::new_v4());
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("[HTTP] Rejected {}: {}", plan_id, rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(PlanResponse::failure(plan_id, rejection.body_text())),
            );
        }
    };
    tracing::info!(
        "[HTTP] Plan request {} - {} -> {}, {} day(s)",
        plan_id,
        request.origin,
        request.destination,
        request.trip_days
    );

    if let Err(e) = request.validate() {
        tracing::warn!("[HTTP] Rejected {}: {}", plan_id, e);
        return (
            StatusCode::BAD_REQUEST,
            Json(PlanResponse::failure(plan_id, e.to_string())),
        );
    }

    match planner.generate_plan(&request).await {
        Ok(plan) => {
            tracing::info!(
                "[HTTP] Plan {} ready with {} flight option(s)",
                plan_id,
                plan.flights.len()
            );
            (
                StatusCode::OK,
                Json(PlanResponse {
                    success: true,
                    plan_id,
                    plan: Some(PlanView::from(&plan)),
                    error: None,
                }),
            )
        }
        Err(e) => {
            tracing::error!("[HTTP] Plan {} failed: {:#}", plan_id, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(PlanResponse::failure(plan_id, format!("{:#}", e))),
            )
        }
    }
}
