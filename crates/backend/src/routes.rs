use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    routing::{get, put},
    Router,
};
use contracts::shared::api_paths;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::shared::app_state::AppState;
use crate::shared::format::format_body_size;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            api_paths::INVOICES,
            get(handlers::a001_invoice::list_all).post(handlers::a001_invoice::create),
        )
        .route(
            api_paths::INVOICE_ROUTE,
            axum::routing::delete(handlers::a001_invoice::delete),
        )
        .route(
            api_paths::INVOICE_DONE_ROUTE,
            put(handlers::a001_invoice::toggle_done),
        )
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

/// Журнал запросов: время, размер ответа, статус, метод и путь
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{:>5}ms | {:>12} | {} {:>6} {} ({})",
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        start.elapsed().as_millis(),
        format_body_size(bytes.len()),
        parts.status.as_u16(),
        method,
        uri.path()
    );
    if parts.status.is_success() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::initialize_database;
    use contracts::domain::a001_invoice::{Invoice, InvoiceDraft};
    use reqwest::{Client, StatusCode};

    async fn spawn_app() -> String {
        let db_file = std::env::temp_dir().join(format!("invoices_test_{}.db", uuid::Uuid::new_v4()));
        let db = initialize_database(&db_file.to_string_lossy())
            .await
            .expect("init test database");
        let app = configure_routes(AppState::new(db));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind random port");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn draft(item: &str) -> InvoiceDraft {
        InvoiceDraft {
            invoice_number: "INV-100".into(),
            invoice_date: "2024-03-15".into(),
            item_name: item.into(),
            price: 50.0,
            expiry_date: "2024-03-20".into(),
        }
    }

    async fn list(client: &Client, base: &str) -> Vec<Invoice> {
        client
            .get(format!("{}{}", base, api_paths::INVOICES))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn create(client: &Client, base: &str, item: &str) -> Invoice {
        let response = client
            .post(format!("{}{}", base, api_paths::INVOICES))
            .json(&draft(item))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let base = spawn_app().await;
        let client = Client::new();

        let before = list(&client, &base).await;
        let created = create(&client, &base, "Milk").await;
        let after = list(&client, &base).await;

        assert_eq!(after.len(), before.len() + 1);
        for invoice in &before {
            assert!(after.contains(invoice));
        }
        let stored = after.iter().find(|i| i.id == created.id).unwrap();
        assert_eq!(stored.item_name, "Milk");
        assert_eq!(stored.price, 50.0);
        assert_eq!(stored.invoice_date, "2024-03-15");
        assert!(!stored.done);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let base = spawn_app().await;
        let client = Client::new();

        let first = create(&client, &base, "Milk").await;
        let second = create(&client, &base, "Soap").await;
        let ids: Vec<_> = list(&client, &base).await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_delete_then_list() {
        let base = spawn_app().await;
        let client = Client::new();

        let keep = create(&client, &base, "Bread").await;
        let gone = create(&client, &base, "Eggs").await;

        let response = client
            .delete(format!("{}{}", base, api_paths::invoice_path(gone.id.as_str())))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());

        let after = list(&client, &base).await;
        assert!(after.iter().all(|i| i.id != gone.id));
        assert!(after.iter().any(|i| i.id == keep.id));

        let again = client
            .delete(format!("{}{}", base, api_paths::invoice_path(gone.id.as_str())))
            .send()
            .await
            .unwrap();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_done() {
        let base = spawn_app().await;
        let client = Client::new();
        let created = create(&client, &base, "Butter").await;
        let url = format!("{}{}", base, api_paths::invoice_done_path(created.id.as_str()));

        client.put(&url).send().await.unwrap();
        let after_first = list(&client, &base).await;
        assert!(after_first.iter().find(|i| i.id == created.id).unwrap().done);

        client.put(&url).send().await.unwrap();
        let after_second = list(&client, &base).await;
        assert!(!after_second.iter().find(|i| i.id == created.id).unwrap().done);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id() {
        let base = spawn_app().await;
        let response = Client::new()
            .put(format!("{}{}", base, api_paths::invoice_done_path("missing")))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let base = spawn_app().await;
        let client = Client::new();
        let mut bad = draft("  ");
        bad.price = -5.0;

        let response = client
            .post(format!("{}{}", base, api_paths::INVOICES))
            .json(&bad)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("Item name is required"));
        assert!(list(&client, &base).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_string_price() {
        let base = spawn_app().await;
        let client = Client::new();

        let response = client
            .post(format!("{}{}", base, api_paths::INVOICES))
            .json(&serde_json::json!({
                "invoiceNumber": "INV-7",
                "invoiceDate": "2024-03-15",
                "itemName": "Milk",
                "price": "50",
                "expiryDate": "2024-03-20"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let stored = list(&client, &base).await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].price, 50.0);
    }

    #[tokio::test]
    async fn test_malformed_body_returns_json_error() {
        let base = spawn_app().await;
        let client = Client::new();

        let response = client
            .post(format!("{}{}", base, api_paths::INVOICES))
            .header("Content-Type", "application/json")
            .body(r#"{"invoiceNumber":"INV-7","price":"fifty"}"#)
            .send()
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(list(&client, &base).await.is_empty());
    }
}
