//! Reversi game server: persists games, turns, 64-square board snapshots and
//! moves in Postgres, and serves them over a small JSON HTTP API.

use std::sync::Arc;

use crate::{
    api::app::AppState,
    core::{games::GameService, turns::TurnService},
    repo::connection::Database,
};

pub mod api;
pub mod config;
pub mod contracts;
pub mod core;
pub mod repo;

pub fn build_state(db: Database) -> AppState {
    AppState {
        game_service: Arc::new(GameService::new(db.clone())),
        turn_service: Arc::new(TurnService::new(db)),
    }
}
