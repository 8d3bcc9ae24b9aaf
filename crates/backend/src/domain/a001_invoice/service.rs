use super::repository;
use contracts::domain::a001_invoice::{Invoice, InvoiceDraft, InvoiceId};
use contracts::shared::ApiError;
use sea_orm::DatabaseConnection;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invoice {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Получение списка всех накладных
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Invoice>, ServiceError> {
    Ok(repository::list_all(db).await?)
}

/// Создание новой накладной; id назначается сервером
pub async fn create(db: &DatabaseConnection, draft: InvoiceDraft) -> Result<Invoice, ServiceError> {
    draft.validate().map_err(|e| match e {
        ApiError::Validation(message) => ServiceError::Validation(message),
        other => ServiceError::Validation(other.to_string()),
    })?;

    let invoice = Invoice::from_draft(InvoiceId(Uuid::new_v4().to_string()), draft);
    repository::insert(db, &invoice).await?;

    tracing::info!(id = %invoice.id, item = %invoice.item_name, "invoice created");
    Ok(invoice)
}

/// Переключение признака выполнения
pub async fn toggle_done(db: &DatabaseConnection, id: &str) -> Result<Invoice, ServiceError> {
    if !repository::flip_done(db, id).await? {
        return Err(ServiceError::NotFound(id.to_string()));
    }
    let invoice = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

    tracing::info!(id = %invoice.id, done = invoice.done, "invoice status toggled");
    Ok(invoice)
}

/// Удаление накладной
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    if !repository::delete(db, id).await? {
        return Err(ServiceError::NotFound(id.to_string()));
    }
    tracing::info!(id = %id, "invoice deleted");
    Ok(())
}
