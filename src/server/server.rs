use anyhow::Result;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crate::calendar::CalendarService;
use crate::event_store::EventStore;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{http_cache, log_requests, state::*, ServerConfig};

const MISSING_START_MESSAGE: &str = "Please provide a valid Start date parameter";
const MISSING_END_MESSAGE: &str = "Please provide a valid End date parameter.";

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

/// Query-string parameters of the events endpoint. Both are optional here so
/// the handler can produce the per-field messages instead of axum's generic
/// rejection.
#[derive(Deserialize, Debug)]
struct EventsQuery {
    start: Option<String>,
    end: Option<String>,
}

async fn get_calendar_events(
    State(calendar): State<GuardedCalendarService>,
    Query(query): Query<EventsQuery>,
) -> Response {
    // Start is checked first; an empty value counts as missing.
    let start = match present(&query.start) {
        Some(value) => value,
        None => return (StatusCode::BAD_REQUEST, MISSING_START_MESSAGE).into_response(),
    };
    let end = match present(&query.end) {
        Some(value) => value,
        None => return (StatusCode::BAD_REQUEST, MISSING_END_MESSAGE).into_response(),
    };

    match calendar.get_events(start, end) {
        Ok(events) => Json(events).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)).into_response(),
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ServerState {
    fn new(config: ServerConfig, event_store: Arc<dyn EventStore>) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            calendar: Arc::new(CalendarService::new(event_store)),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

pub fn make_app(config: ServerConfig, event_store: Arc<dyn EventStore>) -> Router {
    let state = ServerState::new(config.clone(), event_store);

    let calendar_routes: Router = Router::new()
        .route("/calendar/events", get(get_calendar_events))
        .layer(middleware::from_fn_with_state(
            config.cache_max_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/v1", calendar_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(event_store: Arc<dyn EventStore>, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let app = make_app(config, event_store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
