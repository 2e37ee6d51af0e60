//! Market Insight API Server
//!
//! HTTP API server that turns news headlines into sentiment-scored,
//! asset-linked market insights.

mod config;
mod error;
mod routes;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use insight_core::{PricePort, SentimentPort};
use insight_market::YahooChartClient;
use insight_news::NewsApiClient;
use insight_sentiment::{HuggingFaceClient, LexiconModel};
use insight_services::{InsightPipeline, InsightService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{AppConfig, SentimentBackend};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub insight_service: Arc<InsightService>,
}

/// Build the router with all routes and middleware
pub fn app(state: AppState) -> Router {
    // Configure CORS for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,insight_api=debug")),
        )
        .init();

    info!("Starting Market Insight API");

    let config = AppConfig::from_env()?;

    let sentiment: Arc<dyn SentimentPort> = match &config.sentiment {
        SentimentBackend::HuggingFace(hf) => {
            info!("Using hosted sentiment model {}", hf.model);
            Arc::new(HuggingFaceClient::new(hf.clone())?)
        }
        SentimentBackend::Lexicon => {
            info!("HF_API_TOKEN not set - using offline lexicon sentiment model");
            Arc::new(LexiconModel::new())
        }
    };

    let prices: Arc<dyn PricePort> = Arc::new(YahooChartClient::new(config.prices.clone())?);
    let news = Arc::new(NewsApiClient::new(config.news.clone())?);

    let pipeline = InsightPipeline::with_config(sentiment, prices, config.pipeline.clone());
    info!(
        "Insight pipeline ready ({} headlines in flight)",
        config.pipeline.max_concurrency
    );

    let state = AppState {
        insight_service: Arc::new(InsightService::new(news, pipeline, config.service.clone())),
    };

    let addr = config.socket_addr();
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
