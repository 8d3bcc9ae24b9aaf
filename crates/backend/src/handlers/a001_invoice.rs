use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_invoice::{Invoice, InvoiceDraft};
use serde_json::{json, Value};

use crate::domain::a001_invoice::{service, ServiceError};
use crate::shared::app_state::AppState;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

fn error_response(error: ServiceError) -> (StatusCode, Json<Value>) {
    let status = match &error {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Storage(e) => {
            tracing::error!("invoice storage failure: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "error": error.to_string() })))
}

/// Ошибка разбора тела запроса в том же виде `{"error": ...}`
fn rejection_response(rejection: JsonRejection) -> (StatusCode, Json<Value>) {
    tracing::warn!("rejected invoice payload: {}", rejection.body_text());
    (
        rejection.status(),
        Json(json!({ "error": rejection.body_text() })),
    )
}

/// GET /invoices
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Json<Vec<Invoice>>> {
    match service::list_all(&state.db).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(error_response(e)),
    }
}

/// POST /invoices
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<InvoiceDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Invoice>)> {
    let Json(draft) = payload.map_err(rejection_response)?;
    match service::create(&state.db, draft).await {
        Ok(invoice) => Ok((StatusCode::CREATED, Json(invoice))),
        Err(e) => Err(error_response(e)),
    }
}

/// DELETE /invoices/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    match service::delete(&state.db, &id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response(e)),
    }
}

/// PUT /invoices/:id/done
pub async fn toggle_done(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Invoice>> {
    match service::toggle_done(&state.db, &id).await {
        Ok(invoice) => Ok(Json(invoice)),
        Err(e) => Err(error_response(e)),
    }
}
