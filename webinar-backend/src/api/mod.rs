// webinar-backend/src/api/mod.rs
use crate::service::team_service::TeamService;
use std::sync::Arc;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<TeamService>,
}

impl AppState {
    pub fn new(team_service: Arc<TeamService>) -> Self {
        Self { team_service }
    }
}
