use crate::{
    api::{
        app::{GameState, TurnState},
        error::AppError,
        extractor::{AppJson, AppPath},
    },
    contracts::payloads::{MessageResponse, MovePayload, RegisterTurnPayload},
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/*
====================
Diagnostic Handler
====================
*/

pub async fn handle_hello() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Hello Axum".to_string(),
    })
}

pub async fn handle_error() -> Result<StatusCode, AppError> {
    Err(AppError::Internal("Error endpoint".to_string()))
}

/*
====================
Game Handler
====================
*/

pub async fn handle_start_game(State(state): State<GameState>) -> Result<impl IntoResponse, AppError> {
    state.game_service.start_new_game().await?;
    Ok(StatusCode::CREATED)
}

/*
====================
Turn Handler
====================
*/

pub async fn handle_get_turn(
    State(state): State<TurnState>,
    AppPath(turn_count): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let turn = state
        .turn_service
        .find_latest_game_turn_by_turn_count(turn_count)
        .await?;
    Ok((StatusCode::OK, Json(turn)))
}

pub async fn handle_register_turn(
    State(state): State<TurnState>,
    AppJson(payload): AppJson<RegisterTurnPayload>,
) -> Result<impl IntoResponse, AppError> {
    let RegisterTurnPayload {
        turn_count,
        placement: MovePayload { disc, x, y },
    } = payload;
    state
        .turn_service
        .register_turn(turn_count, disc, x, y)
        .await?;
    Ok(StatusCode::CREATED)
}
