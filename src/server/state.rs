use axum::extract::FromRef;

use crate::calendar::CalendarService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCalendarService = Arc<CalendarService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub calendar: GuardedCalendarService,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedCalendarService {
    fn from_ref(input: &ServerState) -> Self {
        input.calendar.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
