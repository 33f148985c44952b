use std::net::SocketAddr;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use color_eyre::Result;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, instrument};

use crate::state::AppState;

pub(crate) mod errors;
pub(crate) mod md;
mod templates;

pub(crate) mod pages {
    pub(crate) mod recipes;
    pub(crate) mod taxonomy;
}

use errors::ServerError;

type ResponseResult<T = Response> = Result<T, ServerError>;

const SITE_STYLES: &str = include_str!("../../static/site.css");

pub(crate) async fn serve() -> Result<()> {
    let state = AppState::from_env()?;

    run_axum(state).await
}

fn make_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::recipes::recipes_index))
        .route("/recipes", get(pages::recipes::recipes_index))
        .route("/recipes/:slug", get(pages::recipes::recipe_get))
        .route("/taxonomy/:vocabulary/:term", get(pages::taxonomy::term_get))
        .route("/styles/site.css", get(styles_get))
        .fallback(fallback)
        .with_state(state)
}

async fn styles_get() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], SITE_STYLES)
}

/// Bare `/{slug}` paths that name a recipe redirect to the canonical
/// `/recipes/{slug}` URL; everything else is a 404.
async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let slug = uri.path().trim_matches('/');

    if state.book.by_slug(slug).is_some() {
        let canonical = state.app.app_url(&format!("/recipes/{slug}"));
        return Redirect::permanent(&canonical).into_response();
    }

    (StatusCode::NOT_FOUND, "Page not found").into_response()
}

#[instrument(skip_all)]
async fn run_axum(state: AppState) -> Result<()> {
    let tracer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_response(DefaultOnResponse::new().include_headers(true));

    let home_page = state.app.home_page();
    let app = make_router(state).layer(tracer);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}, serving {home_page}");

    axum::serve(listener, app).await?;

    Ok(())
}
