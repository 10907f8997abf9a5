use crate::{
    api::{
        assets::with_static_files,
        handler::{
            handle_error, handle_get_turn, handle_hello, handle_register_turn, handle_start_game,
        },
    },
    core::{games::GameService, turns::TurnService},
};
use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use std::{io, net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub struct AppService {
    pub static_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService>,
    pub turn_service: Arc<TurnService>,
}

#[derive(Clone)]
pub struct GameState {
    pub game_service: Arc<GameService>,
}

impl FromRef<AppState> for GameState {
    fn from_ref(app_state: &AppState) -> Self {
        GameState {
            game_service: app_state.game_service.clone(),
        }
    }
}

#[derive(Clone)]
pub struct TurnState {
    pub turn_service: Arc<TurnService>,
}

impl FromRef<AppState> for TurnState {
    fn from_ref(app_state: &AppState) -> Self {
        TurnState {
            turn_service: app_state.turn_service.clone(),
        }
    }
}

impl AppService {
    pub fn game_router(&self) -> Router<AppState> {
        let router = Router::new()
            .route("/", post(handle_start_game))
            .route("/latest/turns", post(handle_register_turn))
            .route("/latest/turns/{turn_count}", get(handle_get_turn));
        router
    }

    pub fn api_router(&self) -> Router<AppState> {
        let router = Router::new()
            .route("/hello", get(handle_hello))
            .route("/error", get(handle_error))
            .nest("/games", self.game_router());
        router
    }

    pub fn router(&self, app_state: AppState) -> Router {
        let router = Router::new()
            .nest("/api", self.api_router())
            .with_state(app_state);
        with_static_files(router, self.static_dir.clone()).layer(TraceLayer::new_for_http())
    }

    pub async fn run(&self, app_state: AppState, addr: SocketAddr) -> io::Result<()> {
        let listener = TcpListener::bind(addr).await?;
        debug!("Reversi application started: http://{}", listener.local_addr()?);
        axum::serve(listener, self.router(app_state)).await
    }
}
