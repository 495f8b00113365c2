use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Store handlers
        .route(
            "/api/store",
            get(handlers::a001_store::list_all).post(handlers::a001_store::create),
        )
        .route(
            "/api/store/:id",
            get(handlers::a001_store::get_by_id).delete(handlers::a001_store::delete),
        )
        .route(
            "/api/store/testdata",
            post(handlers::a001_store::insert_test_data),
        )
        // A002 SKU handlers
        .route(
            "/api/sku",
            get(handlers::a002_sku::list_all).post(handlers::a002_sku::create),
        )
        .route(
            "/api/sku/:id",
            get(handlers::a002_sku::get_by_id).delete(handlers::a002_sku::delete),
        )
        .route("/api/sku/testdata", post(handlers::a002_sku::insert_test_data))
        // A003 Calendar
        .route("/api/calendar", get(handlers::a003_calendar::list_all))
        // P001 Planning
        .route("/api/planning", post(handlers::p001_planning::record_fact))
        .route(
            "/api/planning/import-csv",
            post(handlers::p001_planning::import_csv),
        )
        .route(
            "/api/planning/:store_id",
            get(handlers::p001_planning::list_facts),
        )
        .route(
            "/api/planning/:store_id/aggregate",
            get(handlers::p001_planning::get_aggregate),
        )
        // D001 Weekly metrics dashboard
        .route(
            "/api/d001/weekly-metrics/:store_id",
            get(handlers::d001_weekly_metrics::get_weekly_metrics),
        )
        .route(
            "/api/d001/monthly-metrics/:store_id",
            get(handlers::d001_weekly_metrics::get_monthly_metrics),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::SqliteDatastore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        let datastore = SqliteDatastore::open_in_memory().await.unwrap();
        configure_routes(AppState::new(datastore))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn store(id: &str) -> Value {
        json!({"id": id, "label": "Main", "city": "Austin", "state": "TX"})
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_store_round_trip() {
        let app = app().await;

        let (status, created) = send(&app, Method::POST, "/api/store", Some(store("ST001"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "ST001");
        assert_eq!(created["city"], "Austin");

        let (status, list) = send(&app, Method::GET, "/api/store", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::DELETE, "/api/store/ST001", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list) = send(&app, Method::GET, "/api/store", None).await;
        assert!(list.as_array().unwrap().is_empty());

        let (status, body) = send(&app, Method::DELETE, "/api/store/ST001", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_bad_prefix_is_400() {
        let app = app().await;
        let (status, body) = send(&app, Method::POST, "/api/store", Some(store("XX001"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "bad_prefix");
        assert_eq!(body["field"], "id");

        let (_, list) = send(&app, Method::GET, "/api/store", None).await;
        assert!(list.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_is_400() {
        let app = app().await;
        send(&app, Method::POST, "/api/store", Some(store("ST001"))).await;
        let (status, body) = send(&app, Method::POST, "/api/store", Some(store("ST001"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "duplicate_id");

        let (_, list) = send(&app, Method::GET, "/api/store", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_weekly_metrics_end_to_end() {
        let app = app().await;
        send(&app, Method::POST, "/api/store", Some(store("ST001"))).await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/sku",
            Some(json!({
                "id": "SK1", "label": "Mug", "class": "Drinkware",
                "department": "Kitchen", "price": 5.0, "cost": 3.0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/planning",
            Some(json!({"storeId": "ST001", "skuId": "SK1", "week": "W01", "salesUnits": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, metrics) = send(&app, Method::GET, "/api/d001/weekly-metrics/ST001", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(metrics["storeId"], "ST001");
        assert_eq!(metrics["weeks"].as_array().unwrap().len(), 52);
        assert_eq!(metrics["weeks"][0], "W01");
        assert_eq!(metrics["gmDollars"][0], 20.0);
        assert_eq!(metrics["gmPercent"][0], 40.0);
        assert_eq!(metrics["gmDollars"][1], 0.0);

        let (_, aggregate) = send(&app, Method::GET, "/api/planning/ST001/aggregate", None).await;
        assert_eq!(aggregate["SK1"]["salesData"][0]["salesUnits"], 10);
    }

    #[tokio::test]
    async fn test_csv_import_endpoint() {
        let app = app().await;
        send(&app, Method::POST, "/api/store/testdata", None).await;
        send(&app, Method::POST, "/api/sku/testdata", None).await;

        let csv = "store_id,sku_id,week,sales_units\nST001,SK1001,W01,3\nST001,SK1001,W77,3\n";
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/planning/import-csv")
                    .header("content-type", "text/csv")
                    .body(Body::from(csv))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let result: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result["imported"], 1);
        assert_eq!(result["errors"][0]["line"], 3);

        let (_, facts) = send(&app, Method::GET, "/api/planning/ST001", None).await;
        assert_eq!(facts.as_array().unwrap().len(), 1);
    }
}
