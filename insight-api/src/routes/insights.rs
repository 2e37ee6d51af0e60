//! Insight endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use insight_core::Insight;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::ApiError, AppState};

/// Request body for single-headline analysis
#[derive(Debug, Deserialize)]
pub struct HeadlineInput {
    pub headline: String,
}

#[derive(Debug, Serialize)]
struct NewsInsightsResponse {
    insights: Vec<Insight>,
}

/// Create insight routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news-insights", get(news_insights))
        .route("/analyze-headline", post(analyze_headline))
}

/// GET /news-insights - Insights for the latest live headlines
async fn news_insights(State(state): State<AppState>) -> Json<NewsInsightsResponse> {
    let insights = state.insight_service.news_insights().await;
    info!("Serving {} live insights", insights.len());
    Json(NewsInsightsResponse { insights })
}

/// POST /analyze-headline - Insight for one supplied headline
async fn analyze_headline(
    State(state): State<AppState>,
    Json(input): Json<HeadlineInput>,
) -> Result<Json<Insight>, ApiError> {
    let insight = state
        .insight_service
        .analyze_headline(&input.headline)
        .await?;
    Ok(Json(insight))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::testing::test_app;

    async fn read_json(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn analyze_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze-headline")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_headline() {
        let response = test_app(&[])
            .oneshot(analyze_request(
                r#"{"headline": "Bitcoin surges amid inflation fears"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({
                "headline": "Bitcoin surges amid inflation fears",
                "sentiment": "POSITIVE",
                "confidence": 0.9,
                "linked_asset": "BTC-USD",
                "latest_price": 64000.0
            })
        );
    }

    #[tokio::test]
    async fn test_analyze_headline_without_price() {
        let response = test_app(&[])
            .oneshot(analyze_request(r#"{"headline": "Oil tanker seized"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["linked_asset"], "XLE");
        assert_eq!(json["latest_price"], Value::Null);
    }

    #[tokio::test]
    async fn test_analyze_headline_rejects_missing_field() {
        let response = test_app(&[])
            .oneshot(analyze_request(r#"{"title": "Oil surges"}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_analyze_headline_rejects_missing_body() {
        let response = test_app(&[])
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze-headline")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_analyze_headline_model_failure() {
        let response = test_app(&[])
            .oneshot(analyze_request(r#"{"headline": "model-error"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = read_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("model crashed"));
    }

    #[tokio::test]
    async fn test_news_insights() {
        let response = test_app(&["Crypto crash deepens", "model-error", "Markets drift"])
            .oneshot(get("/news-insights"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        let insights = json["insights"].as_array().unwrap();
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0]["headline"], "Crypto crash deepens");
        assert_eq!(insights[0]["sentiment"], "NEGATIVE");
        assert_eq!(insights[0]["latest_price"], 64000.0);
        assert_eq!(insights[1]["linked_asset"], "SPY");
        assert_eq!(insights[1]["sentiment"], "NEUTRAL");
    }

    #[tokio::test]
    async fn test_news_insights_empty_feed() {
        let response = test_app(&[]).oneshot(get("/news-insights")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"insights": []}));
    }
}
