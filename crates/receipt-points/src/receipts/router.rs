use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{Receipt, ReceiptId};
use super::repository::ReceiptRepository;
use super::service::ReceiptService;

/// Router builder exposing the receipt intake and points lookup endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let receipt = match payload {
        Ok(Json(receipt)) => receipt,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected malformed receipt");
            let payload = json!({
                "error": format!("The receipt is invalid: {}", rejection.body_text()),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.process(receipt) {
        Ok(id) => (StatusCode::OK, Json(json!({ "id": id.0 }))).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let id = ReceiptId(id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(json!({ "points": points }))).into_response(),
        Err(error) if error.is_not_found() => {
            let payload = json!({
                "error": "No receipt found for that id",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
