//! API utilities for frontend-backend communication
//!
//! The invoice server address is fixed at build time. Set `INVOICE_API_BASE`
//! when building to point the client somewhere other than the default.

/// Address of the invoice server when no override is given
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the base URL for API requests, without a trailing slash
pub fn api_base() -> &'static str {
    option_env!("INVOICE_API_BASE")
        .map(|base| base.trim_end_matches('/'))
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

/// Build a full API URL from a path
///
/// # Example
/// ```text
/// api_url("/invoices") -> "http://localhost:5000/invoices"
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
