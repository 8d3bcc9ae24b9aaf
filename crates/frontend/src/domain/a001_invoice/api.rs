//! Remote data gateway for invoices
//!
//! One function per HTTP operation of the invoice server. Every failure is
//! classified into [`ApiError`]; callers decide how to surface it.

use contracts::domain::a001_invoice::{Invoice, InvoiceDraft, InvoiceId};
use contracts::shared::api_paths;
use contracts::shared::ApiError;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

fn encode_id(id: &InvoiceId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

/// Сервер отвечает `{"error": "..."}`; иначе берем тело как есть
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

async fn ensure_ok(response: Response, action: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} failed with HTTP {}: {}", action, status, body);
    Err(ApiError::server(status, error_message(&body)))
}

/// GET /invoices
pub async fn list_invoices() -> Result<Vec<Invoice>, ApiError> {
    let response = Request::get(&api_url(api_paths::INVOICES))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = ensure_ok(response, "list invoices").await?;
    let status = response.status();

    response
        .json::<Vec<Invoice>>()
        .await
        .map_err(|e| ApiError::server(status, format!("Failed to parse response: {}", e)))
}

/// POST /invoices
pub async fn create_invoice(draft: &InvoiceDraft) -> Result<(), ApiError> {
    let response = Request::post(&api_url(api_paths::INVOICES))
        .json(draft)
        .map_err(|e| ApiError::Validation(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response, "create invoice").await?;
    Ok(())
}

/// DELETE /invoices/:id
pub async fn delete_invoice(id: &InvoiceId) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&api_paths::invoice_path(&encode_id(id))))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response, "delete invoice").await?;
    Ok(())
}

/// PUT /invoices/:id/done
pub async fn toggle_done(id: &InvoiceId) -> Result<(), ApiError> {
    let response = Request::put(&api_url(&api_paths::invoice_done_path(&encode_id(id))))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response, "toggle invoice").await?;
    Ok(())
}
