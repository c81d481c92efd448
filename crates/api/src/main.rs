use anyhow::Context;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ohaeng_core::catalog::recommendations_for_label;
use ohaeng_core::config::Settings;
use ohaeng_core::domain::{BirthProfile, Element, ElementTheme, StockPick};
use ohaeng_core::reading::{Reading, SharePayload};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    if let Err(err) = serve(&settings).await {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "api stopped with error");
        return Err(err);
    }

    Ok(())
}

async fn serve(settings: &Settings) -> anyhow::Result<()> {
    if settings.public_url.is_none() {
        tracing::warn!("PUBLIC_URL not set; share links will be returned without a url");
    }

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port()));
    let app = router(AppState {
        public_url: settings.public_url.clone(),
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr} failed"))?;

    tracing::info!(%addr, "api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("api server failed")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/elements", get(list_elements))
        .route("/elements/:label/recommendations", get(get_recommendations))
        .route("/readings", post(create_reading))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    public_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ApiElement {
    element: Element,
    korean_name: &'static str,
    theme: &'static ElementTheme,
}

#[derive(Debug, Serialize)]
struct ApiRecommendations {
    element: Element,
    picks: &'static [StockPick; 3],
}

#[derive(Debug, Serialize)]
struct ApiReading {
    reading: Reading,
    summary: String,
    share: SharePayload,
}

async fn list_elements() -> Json<Vec<ApiElement>> {
    Json(
        Element::ALL
            .into_iter()
            .map(|element| ApiElement {
                element,
                korean_name: element.korean_name(),
                theme: element.theme(),
            })
            .collect(),
    )
}

async fn get_recommendations(Path(label): Path<String>) -> Json<ApiRecommendations> {
    let (element, picks) = recommendations_for_label(&label);
    Json(ApiRecommendations { element, picks })
}

async fn create_reading(
    State(state): State<AppState>,
    Json(profile): Json<BirthProfile>,
) -> Json<ApiReading> {
    let reading = Reading::for_profile(profile);
    let share = reading.share_payload(state.public_url.as_deref());
    let summary = reading.summary();

    tracing::info!(
        element = %reading.element,
        top_pick = reading.top_pick().ticker,
        "reading created"
    );

    Json(ApiReading {
        reading,
        summary,
        share,
    })
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
