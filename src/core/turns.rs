use chrono::Utc;
use sqlx::PgConnection;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    api::error::AppError,
    contracts::payloads::GetTurnResponse,
    core::board::{Board, Disc, Point},
    repo::{
        connection::Database,
        error::RepoError,
        games::{GameRecord, GameRepo},
        moves::{MoveRecord, MoveRepo},
        squares::SquareRepo,
        turns::{NewTurnDTO, TurnRecord, TurnRepo},
    },
};

pub struct TurnService {
    db: Database,
    game_repo: GameRepo,
    turn_repo: TurnRepo,
    square_repo: SquareRepo,
    move_repo: MoveRepo,
}

impl TurnService {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            game_repo: GameRepo,
            turn_repo: TurnRepo,
            square_repo: SquareRepo,
            move_repo: MoveRepo,
        }
    }

    pub async fn find_latest_game_turn_by_turn_count(
        &self,
        turn_count: i32,
    ) -> Result<GetTurnResponse, AppError> {
        let mut conn = self.db.acquire().await?;
        let game = self.latest_game(&mut *conn).await?;
        let turn = self.find_turn(&mut *conn, game.id, turn_count).await?;
        let board = self.load_board(&mut *conn, turn.id).await?;

        Ok(GetTurnResponse {
            turn_count,
            board,
            next_disc: turn.next_disc,
            // TODO: read the winner from a game results table once terminal detection exists
            winner_disc: None,
        })
    }

    /// Copies the board of `turn_count - 1`, writes `disc` at `(x, y)` and
    /// stores the result as turn `turn_count`. No legality check, no flipping.
    pub async fn register_turn(
        &self,
        turn_count: i32,
        disc: Disc,
        x: i32,
        y: i32,
    ) -> Result<TurnRecord, AppError> {
        let point = Point::new(x, y)?;
        let previous_turn_count = turn_count
            .checked_sub(1)
            .ok_or(AppError::TurnNotFound(turn_count))?;

        let mut tx = self.db.begin().await?;

        let game = self.latest_game(&mut *tx).await?;
        let previous = self
            .find_turn(&mut *tx, game.id, previous_turn_count)
            .await?;
        let mut board = self.load_board(&mut *tx, previous.id).await?;

        board.place(point, disc);

        let turn = self
            .turn_repo
            .insert(
                &mut *tx,
                NewTurnDTO {
                    game_id: game.id,
                    turn_count,
                    next_disc: Some(disc.next()),
                    end_at: Utc::now(),
                },
            )
            .await?;
        self.square_repo.insert_all(&mut *tx, turn.id, &board).await?;
        self.move_repo.insert(&mut *tx, turn.id, disc, point).await?;

        tx.commit().await.map_err(RepoError::from)?;
        info!(turn_count, ?disc, x, y, game_id = %game.id, "turn registered");
        Ok(turn)
    }

    /// The placement that produced `turn_count`; `None` for turn 0.
    pub async fn find_latest_game_move_by_turn_count(
        &self,
        turn_count: i32,
    ) -> Result<Option<MoveRecord>, AppError> {
        let mut conn = self.db.acquire().await?;
        let game = self.latest_game(&mut *conn).await?;
        let turn = self.find_turn(&mut *conn, game.id, turn_count).await?;
        Ok(self.move_repo.find_for_turn_id(&mut *conn, turn.id).await?)
    }

    async fn latest_game(&self, conn: &mut PgConnection) -> Result<GameRecord, AppError> {
        self.game_repo
            .find_latest(conn)
            .await?
            .ok_or(AppError::LatestGameNotFound)
    }

    async fn find_turn(
        &self,
        conn: &mut PgConnection,
        game_id: Uuid,
        turn_count: i32,
    ) -> Result<TurnRecord, AppError> {
        self.turn_repo
            .find_for_game_id_and_turn_count(conn, game_id, turn_count)
            .await?
            .ok_or(AppError::TurnNotFound(turn_count))
    }

    async fn load_board(&self, conn: &mut PgConnection, turn_id: Uuid) -> Result<Board, AppError> {
        let records = self.square_repo.find_for_turn_id(conn, turn_id).await?;
        debug!(%turn_id, squares = records.len(), "loaded snapshot");
        let squares = records
            .iter()
            .map(|record| record.square())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Board::from_squares(squares)?)
    }
}
