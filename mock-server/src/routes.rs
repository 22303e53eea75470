use axum::{
    routing::{get, post, put},
    Router,
};
use param_console_shared::{IndividualParameter, SpideringAttribute, SpideringEvent};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, resources::Resource, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(resource_routes::<IndividualParameter>())
        .merge(resource_routes::<SpideringAttribute>())
        .merge(resource_routes::<SpideringEvent>());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Real endpoints of one resource plus the bodyless GET forms the console
/// sends in mock-server mode.
fn resource_routes<R: Resource>() -> Router<AppState> {
    let base = format!("/config/{}", R::PATH);

    Router::new()
        .route(
            &format!("{base}/search"),
            post(handlers::search::<R>).get(handlers::search_default::<R>),
        )
        .route(&format!("{base}/details"), get(handlers::details_sample::<R>))
        .route(&format!("{base}/details/:id"), get(handlers::details::<R>))
        .route(
            &format!("{base}/sub-table"),
            post(handlers::sub_table::<R>).get(handlers::sub_table_sample::<R>),
        )
        .route(&base, post(handlers::create::<R>).get(handlers::acknowledge))
        .route(
            &format!("{base}/:id"),
            put(handlers::update::<R>).delete(handlers::delete::<R>),
        )
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::fixtures;

    const FAILING_ID: i64 = 3;

    fn app() -> Router {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
        let state = AppState::new(fixtures::seed(12, today), Some(FAILING_ID)).with_today(today);
        create_router(state)
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Result<Request<Body>> {
        let builder = Request::builder().method(method).uri(uri);
        Ok(match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))?,
            None => builder.body(Body::empty())?,
        })
    }

    async fn json_body(response: Response) -> Result<Value> {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tokio::test]
    async fn search_returns_requested_page_and_total() -> Result<()> {
        let body = json!({
            "pagination": { "pageNumber": 2, "pageSize": 5, "needTotalCount": true },
            "active": "Y"
        });
        let response = app()
            .oneshot(request(
                Method::POST,
                "/api/config/individual-parameters/search",
                Some(body),
            )?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await?;
        // rows 4 and 9 of 12 are inactive
        assert_eq!(json["pagination"]["totalItemCount"], 10);
        assert_eq!(json["items"].as_array().map(Vec::len), Some(5));
        Ok(())
    }

    #[tokio::test]
    async fn search_reports_child_counts() -> Result<()> {
        let body = json!({
            "pagination": { "pageNumber": 1, "pageSize": 10 },
            "active": "ALL"
        });
        let response = app()
            .oneshot(request(
                Method::POST,
                "/api/config/individual-parameters/search",
                Some(body),
            )?)
            .await?;
        let json = json_body(response).await?;
        assert_eq!(json["items"][0]["childListCount"], 2);
        assert_eq!(json["items"][1]["childListCount"], 0);
        Ok(())
    }

    #[tokio::test]
    async fn attribute_sub_table_is_scoped_by_spa_id() -> Result<()> {
        let response = app()
            .oneshot(request(
                Method::POST,
                "/api/config/spidering-attributes/sub-table",
                Some(json!({ "spaId": 1, "active": "ALL" })),
            )?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await?;
        let rows = json.as_array().cloned().unwrap_or_default();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row["spaId"] == 1));
        Ok(())
    }

    #[tokio::test]
    async fn details_of_unknown_id_maps_to_record_not_found() -> Result<()> {
        let response = app()
            .oneshot(request(Method::GET, "/api/config/spidering-events/details/999", None)?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await?;
        assert_eq!(json["errorCode"], json!(["RECORD_NOT_FOUND"]));
        Ok(())
    }

    #[tokio::test]
    async fn delete_of_protected_row_is_a_conflict() -> Result<()> {
        // parameter row 0 is not deletable
        let response = app()
            .oneshot(request(Method::DELETE, "/api/config/individual-parameters/1", None)?)
            .await?;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = json_body(response).await?;
        assert_eq!(json["errorCode"], json!(["DELETE_NOT_ALLOWED"]));
        Ok(())
    }

    #[tokio::test]
    async fn configured_id_fails_delete() -> Result<()> {
        let response = app()
            .oneshot(request(
                Method::DELETE,
                &format!("/api/config/spidering-events/{FAILING_ID}"),
                None,
            )?)
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await?;
        assert_eq!(json["errorCode"], json!(["DELETE_FAILED"]));
        Ok(())
    }

    #[tokio::test]
    async fn create_then_delete_moves_row_to_inactive() -> Result<()> {
        let app = app();
        let created = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/config/individual-parameters",
                Some(json!({ "name": "NEW_LIMIT", "numericValue": 5, "startDate": "2025-01-01" })),
            )?)
            .await?;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = json_body(created).await?;
        let id = created["parId"].as_i64().unwrap_or_default();
        assert_eq!(created["deleteFlag"], true);

        let deleted = app
            .clone()
            .oneshot(request(
                Method::DELETE,
                &format!("/api/config/individual-parameters/{id}"),
                None,
            )?)
            .await?;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let details = app
            .oneshot(request(
                Method::GET,
                &format!("/api/config/individual-parameters/details/{id}"),
                None,
            )?)
            .await?;
        let json = json_body(details).await?;
        assert_eq!(json["endDate"], "2025-06-14");
        assert_eq!(json["reinstateFlag"], true);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_bad_range_is_rejected() -> Result<()> {
        let response = app()
            .oneshot(request(
                Method::PUT,
                "/api/config/spidering-attributes/1",
                Some(json!({
                    "name": "Employer mismatch",
                    "startDate": "2025-03-01",
                    "endDate": "2025-02-01"
                })),
            )?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await?;
        assert_eq!(json["errorCode"], json!(["INVALID_DATE_RANGE"]));
        Ok(())
    }

    #[tokio::test]
    async fn details_carry_child_count() -> Result<()> {
        let response = app()
            .oneshot(request(Method::GET, "/api/config/individual-parameters/details/1", None)?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await?;
        assert_eq!(json["parId"], 1);
        assert_eq!(json["childListCount"], 2);
        Ok(())
    }

    #[tokio::test]
    async fn reinstate_with_past_end_date_names_the_window() -> Result<()> {
        // parameter row 4 (id 9) is inactive
        let response = app()
            .oneshot(request(
                Method::PUT,
                "/api/config/individual-parameters/9",
                Some(json!({
                    "name": "REVIEW_QUEUE_LIMIT",
                    "startDate": "2024-01-01",
                    "endDate": "2025-06-10",
                    "reinstateFlag": true
                })),
            )?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await?;
        assert_eq!(json["errorCode"], json!(["REINSTATE_REQUIRES_OPEN_WINDOW"]));
        Ok(())
    }

    #[tokio::test]
    async fn bodyless_get_forms_answer() -> Result<()> {
        let app = app();
        for uri in [
            "/api/config/spidering-events/search",
            "/api/config/spidering-events/details",
            "/api/config/spidering-events/sub-table",
        ] {
            let response = app.clone().oneshot(request(Method::GET, uri, None)?).await?;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }

        let response = app
            .oneshot(request(Method::GET, "/api/config/spidering-events", None)?)
            .await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        Ok(())
    }
}
