use chrono::Utc;
use tracing::info;

use crate::{
    api::error::AppError,
    core::board::{Board, Disc},
    repo::{
        connection::Database,
        error::RepoError,
        games::{GameRecord, GameRepo},
        squares::SquareRepo,
        turns::{NewTurnDTO, TurnRepo},
    },
};

pub struct GameService {
    db: Database,
    game_repo: GameRepo,
    turn_repo: TurnRepo,
    square_repo: SquareRepo,
}

impl GameService {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            game_repo: GameRepo,
            turn_repo: TurnRepo,
            square_repo: SquareRepo,
        }
    }

    /// Creates the game row, turn 0 and the starting snapshot in one transaction.
    pub async fn start_new_game(&self) -> Result<GameRecord, AppError> {
        let now = Utc::now();
        let mut tx = self.db.begin().await?;

        let game = self.game_repo.insert(&mut *tx, now).await?;
        let turn = self
            .turn_repo
            .insert(
                &mut *tx,
                NewTurnDTO {
                    game_id: game.id,
                    turn_count: 0,
                    next_disc: Some(Disc::Dark),
                    end_at: now,
                },
            )
            .await?;
        self.square_repo
            .insert_all(&mut *tx, turn.id, &Board::initial())
            .await?;

        tx.commit().await.map_err(RepoError::from)?;
        info!(game_id = %game.id, "new game started");
        Ok(game)
    }
}
