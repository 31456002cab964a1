//! Inventory endpoints
//!
//! A single route dispatches on HTTP method and query-parameter shape:
//!
//! | Method | Query                | Operation              |
//! |--------|----------------------|------------------------|
//! | GET    | `stok` + `kondisi`   | stock-condition filter |
//! | GET    | `bajuId`             | single item            |
//! | GET    | `stok=empty`         | zero-stock list        |
//! | GET    | none                 | full list              |
//! | POST   | —                    | create from JSON body  |
//! | PUT    | —                    | update from JSON body  |
//! | DELETE | `bajuId`             | delete by id           |
//!
//! Unrecognized query shapes are client errors (400) rather than silent
//! empty successes.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Garment, NewGarment, StockComparator};

/// GET / - the query shape selects the operation.
async fn get_garments(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    match params.len() {
        1 => {
            if let Some(raw) = params.get("bajuId") {
                let id = parse_int(raw, "bajuId")?;
                tracing::info!(operation = "get_by_id", id, "Dispatching inventory query");
                let garment = state.service.garment_by_id(id).await?;
                Ok(Json(Envelope::success(garment)).into_response())
            } else if params.get("stok").map(String::as_str) == Some("empty") {
                tracing::info!(operation = "get_empty_stock", "Dispatching inventory query");
                let garments = state.service.garments_with_empty_stock().await?;
                Ok(Json(Envelope::success(garments)).into_response())
            } else {
                Err(ApiError::BadRequest(
                    "unrecognized query parameter; expected bajuId or stok=empty".into(),
                ))
            }
        }
        2 => match (params.get("stok"), params.get("kondisi")) {
            (Some(stok), Some(kondisi)) => {
                let stock = parse_int(stok, "stok")?;
                let cmp = StockComparator::parse(kondisi).ok_or_else(|| {
                    ApiError::BadRequest(format!(
                        "unrecognized kondisi '{kondisi}'; expected >, < or ="
                    ))
                })?;
                tracing::info!(
                    operation = "get_by_stock",
                    stock,
                    kondisi = cmp.sql(),
                    "Dispatching inventory query"
                );
                let garments = state.service.garments_by_stock(stock, cmp).await?;
                Ok(Json(Envelope::success(garments)).into_response())
            }
            _ => Err(ApiError::BadRequest(
                "unrecognized query parameters; expected stok and kondisi".into(),
            )),
        },
        // 0 params, or more than the dispatcher knows about: full list
        _ => {
            tracing::info!(operation = "get_all", "Dispatching inventory query");
            let garments = state.service.all_garments().await?;
            Ok(Json(Envelope::success(garments)).into_response())
        }
    }
}

/// POST / - create a garment from the JSON body.
async fn create_garment(
    State(state): State<AppState>,
    body: Result<Json<NewGarment>, JsonRejection>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let Json(new) = body.map_err(bad_body)?;

    tracing::info!(operation = "create", "Dispatching inventory write");
    state.service.create_garment(&new).await?;

    Ok(Json(Envelope::empty()))
}

/// PUT / - overwrite all mutable fields of the garment matching the body's id.
async fn update_garment(
    State(state): State<AppState>,
    body: Result<Json<Garment>, JsonRejection>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let Json(garment) = body.map_err(bad_body)?;

    tracing::info!(operation = "update", id = garment.id, "Dispatching inventory write");
    state.service.update_garment(&garment).await?;

    Ok(Json(Envelope::empty()))
}

/// DELETE /?bajuId=<id>
async fn delete_garment(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let raw = params
        .get("bajuId")
        .ok_or_else(|| ApiError::BadRequest("missing bajuId parameter".into()))?;
    let id = parse_int(raw, "bajuId")?;

    tracing::info!(operation = "delete", id, "Dispatching inventory write");
    state.service.delete_garment(id).await?;

    Ok(Json(Envelope::empty()))
}

fn parse_int(raw: &str, field: &str) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("{field} must be an integer, got '{raw}'")))
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(format!("invalid request body: {rejection}"))
}

/// Inventory routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_garments)
            .post(create_garment)
            .put(update_garment)
            .delete(delete_garment),
    )
}
