//! Пути HTTP API накладных (общие для клиента и сервера)

/// Коллекция: GET отдает список, POST создает
pub const INVOICES: &str = "/invoices";

/// Шаблоны маршрутов в синтаксисе axum
pub const INVOICE_ROUTE: &str = "/invoices/:id";
pub const INVOICE_DONE_ROUTE: &str = "/invoices/:id/done";

/// DELETE /invoices/:id
pub fn invoice_path(encoded_id: &str) -> String {
    format!("{}/{}", INVOICES, encoded_id)
}

/// PUT /invoices/:id/done
pub fn invoice_done_path(encoded_id: &str) -> String {
    format!("{}/{}/done", INVOICES, encoded_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(invoice_path("abc"), "/invoices/abc");
        assert_eq!(invoice_done_path("abc"), "/invoices/abc/done");
    }
}
