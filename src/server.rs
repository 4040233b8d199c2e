use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::site::{Route, SystemClock};
use crate::ui::{self, PageContext};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<(), AppError> {
    let addr = config.bind_address();
    let state = AppState::new(config, Arc::new(SystemClock));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(AppError::Serve)
}

/// Build the application router: pages, health probe, static assets, and
/// the request timeout and tracing layers.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    let router = Router::new()
        // HTML pages
        .route(Route::Home.path(), get(home_handler))
        .route(Route::Features.path(), get(features_handler))
        .route(Route::About.path(), get(about_handler))
        .route(Route::Contact.path(), get(contact_handler))
        .route(Route::Soap.path(), get(app_handler))
        .route("/health", get(health_handler))
        // Static assets
        .nest_service("/static", static_dir)
        .fallback(not_found_handler);

    with_request_timeout(router, timeout)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer `408 Request Timeout` when the inner handler runs past `timeout`.
pub fn with_request_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(axum::middleware::from_fn_with_state(timeout, request_timeout))
}

async fn request_timeout(State(timeout): State<Duration>, req: Request, next: Next) -> Response {
    match tokio::time::timeout(timeout, next.run(req)).await {
        Ok(res) => res,
        Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Render one of the site's own routes, or the 404 page if it is not served.
fn render_page(state: &AppState, route: Route) -> Response {
    let ctx = PageContext {
        site: &state.config.site,
        year: state.clock.year(),
    };

    match ui::render_route(&ctx, route) {
        Some(markup) => {
            debug!(name: "page.rendered", route = %route, year = ctx.year, "Page rendered");
            Html(markup.into_string()).into_response()
        }
        None => not_found(state, route.path()),
    }
}

fn not_found(state: &AppState, path: &str) -> Response {
    info!(name: "route.not_found", path = %path, "No page for path");
    let ctx = PageContext {
        site: &state.config.site,
        year: state.clock.year(),
    };
    (
        StatusCode::NOT_FOUND,
        Html(ui::render_not_found(&ctx).into_string()),
    )
        .into_response()
}

/// GET / - Landing page.
async fn home_handler(State(state): State<AppState>) -> Response {
    render_page(&state, Route::Home)
}

/// GET /features
async fn features_handler(State(state): State<AppState>) -> Response {
    render_page(&state, Route::Features)
}

/// GET /about
async fn about_handler(State(state): State<AppState>) -> Response {
    render_page(&state, Route::About)
}

/// GET /contact
async fn contact_handler(State(state): State<AppState>) -> Response {
    render_page(&state, Route::Contact)
}

/// GET /soap - Hand off to the configured application, if any.
async fn app_handler(State(state): State<AppState>) -> Response {
    match &state.config.site.app_url {
        Some(url) => Redirect::temporary(url.as_str()).into_response(),
        None => render_page(&state, Route::Soap),
    }
}

async fn not_found_handler(State(state): State<AppState>, req: Request) -> Response {
    not_found(&state, req.uri().path())
}

// ─────────────────────────────────────────────────────────────────────────────
// Health
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health - Liveness probe.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
