use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{any, post};
use axum::{Json, Router};
use hackair::{Hackair, HackairError, Target, TimeRange, parse_window};

use crate::error::ApiError;
use crate::protocol::{QueryRequest, QueryResponse, Table, TimeSeries};

/// Build the dashboard router around an orchestrator.
pub fn router(hackair: Hackair) -> Router {
    Router::new()
        .route("/", any(health))
        .route("/search", post(search))
        .route("/query", post(query))
        .with_state(hackair)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn search() -> Json<[&'static str; 4]> {
    Json(Target::ALL.map(Target::as_str))
}

#[tracing::instrument(name = "hackair_server::query", skip_all)]
async fn query(
    State(hackair): State<Hackair>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Vec<QueryResponse>>, ApiError> {
    let Json(req) = payload?;
    let window = parse_window(&req.range.from, &req.range.to)?;
    tracing::debug!(%window, targets = req.targets.len(), "query");

    let mut out = Vec::with_capacity(req.targets.len());
    for item in &req.targets {
        let Ok(target) = item.target.parse::<Target>() else {
            tracing::debug!(name = %item.target, "skipping unknown target");
            continue;
        };
        out.push(answer(&hackair, target, window).await?);
    }
    Ok(Json(out))
}

async fn answer(
    hackair: &Hackair,
    target: Target,
    window: TimeRange,
) -> Result<QueryResponse, HackairError> {
    let response = match (target, target.series_kind()) {
        (_, Some(kind)) => QueryResponse::TimeSeries(TimeSeries {
            target,
            datapoints: hackair.pollutant(kind, window).await?,
        }),
        (Target::SensorsCount, None) => {
            QueryResponse::Table(Table::sensor_count(hackair.sensors_count(window).await?))
        }
        (_, None) => QueryResponse::Table(Table::sensors(hackair.sensors(window).await?)),
    };
    Ok(response)
}
