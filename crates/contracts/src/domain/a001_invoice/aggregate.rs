use chrono::Local;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::shared::{parse_date_like, ApiError};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор накладной, назначается сервером и никогда не меняется
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub String);

impl InvoiceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Накладная (позиция складского учёта с ценой и сроком годности)
///
/// Даты хранятся так, как пришли с сервера: поиск сравнивает сырую строку
/// `invoiceDate`, а форматирование и классификация разбирают её по месту.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id", alias = "id")]
    pub id: InvoiceId,

    pub invoice_number: String,
    pub invoice_date: String,
    pub item_name: String,
    #[serde(deserialize_with = "price_from_number_or_string")]
    pub price: f64,
    pub expiry_date: String,

    #[serde(default)]
    pub done: bool,
}

impl Invoice {
    /// Собрать запись из черновика (используется сервером при создании)
    pub fn from_draft(id: InvoiceId, draft: InvoiceDraft) -> Self {
        Self {
            id,
            invoice_number: draft.invoice_number,
            invoice_date: draft.invoice_date,
            item_name: draft.item_name,
            price: draft.price,
            expiry_date: draft.expiry_date,
            done: false,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Данные для создания накладной (тело POST /invoices)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub invoice_date: String,
    pub item_name: String,
    #[serde(deserialize_with = "price_from_number_or_string")]
    pub price: f64,
    pub expiry_date: String,
}

/// Цена приходит числом или строкой: веб-форма отправляет сырое значение поля,
/// и сервер может вернуть его как есть. Сериализуется всегда числом.
fn price_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(value) => Ok(value),
        RawPrice::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid price {:?}", text))),
    }
}

impl InvoiceDraft {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), ApiError> {
        require("Invoice number", &self.invoice_number)?;
        require("Invoice date", &self.invoice_date)?;
        require("Item name", &self.item_name)?;
        require("Expiry date", &self.expiry_date)?;

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ApiError::Validation(
                "Price must be a non-negative number".into(),
            ));
        }
        if parse_date_like(&self.invoice_date, &Local).is_none() {
            return Err(ApiError::Validation("Invoice date is not a valid date".into()));
        }
        if parse_date_like(&self.expiry_date, &Local).is_none() {
            return Err(ApiError::Validation("Expiry date is not a valid date".into()));
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Состояние формы добавления: пять строк, привязанных к полям ввода
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceForm {
    pub invoice_number: String,
    pub invoice_date: String,
    pub item_name: String,
    pub price: String,
    pub expiry_date: String,
}

impl InvoiceForm {
    /// Преобразовать форму в черновик для отправки
    pub fn to_draft(&self) -> Result<InvoiceDraft, ApiError> {
        require("Price", &self.price)?;
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ApiError::Validation("Price must be a number".into()))?;

        let draft = InvoiceDraft {
            invoice_number: self.invoice_number.trim().to_string(),
            invoice_date: self.invoice_date.trim().to_string(),
            item_name: self.item_name.trim().to_string(),
            price,
            expiry_date: self.expiry_date.trim().to_string(),
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn is_complete(&self) -> bool {
        [
            &self.invoice_number,
            &self.invoice_date,
            &self.item_name,
            &self.price,
            &self.expiry_date,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }
}
