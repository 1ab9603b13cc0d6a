//! Router, handlers and server loop for the web form

use super::page;
use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use qa_application::AskQuestionUseCase;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub ask: AskQuestionUseCase,
}

impl AppState {
    pub fn new(ask: AskQuestionUseCase) -> Self {
        Self { ask }
    }
}

/// Fields posted by the page's form
#[derive(Debug, Default, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question_input: Option<String>,
}

/// Build the router
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_question))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn show_form() -> Html<String> {
    Html(page::render(None))
}

async fn submit_question(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QuestionForm>,
) -> Html<String> {
    let raw = form.question_input.unwrap_or_default();
    let result = state.ask.execute(&raw).await;
    Html(page::render(result.as_ref()))
}

async fn health() -> &'static str {
    "ok"
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = create_app(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
