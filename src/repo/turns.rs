use chrono::{DateTime, Utc};
use sqlx::{prelude::FromRow, query_as, PgConnection};
use uuid::Uuid;

use crate::{core::board::Disc, repo::error::RepoError};

pub struct NewTurnDTO {
    pub game_id: Uuid,
    pub turn_count: i32,
    pub next_disc: Option<Disc>,
    pub end_at: DateTime<Utc>,
}

#[derive(FromRow, Debug, Clone)]
pub struct TurnRecord {
    pub id: Uuid,
    pub game_id: Uuid,
    pub turn_count: i32,
    pub next_disc: Option<Disc>,
    pub end_at: DateTime<Utc>,
}

pub struct TurnRepo;

impl TurnRepo {
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        turn: NewTurnDTO,
    ) -> Result<TurnRecord, RepoError> {
        let turn = query_as::<_, TurnRecord>(
            r#"
            insert into turns (game_id, turn_count, next_disc, end_at)
            values ($1, $2, $3, $4)
            returning id, game_id, turn_count, next_disc, end_at
            "#,
        )
        .bind(turn.game_id)
        .bind(turn.turn_count)
        .bind(turn.next_disc)
        .bind(turn.end_at)
        .fetch_one(conn)
        .await?;
        Ok(turn)
    }

    pub async fn find_for_game_id_and_turn_count(
        &self,
        conn: &mut PgConnection,
        game_id: Uuid,
        turn_count: i32,
    ) -> Result<Option<TurnRecord>, RepoError> {
        let turn = query_as::<_, TurnRecord>(
            r#"
            select id, game_id, turn_count, next_disc, end_at
            from turns
            where game_id = $1 and turn_count = $2
            "#,
        )
        .bind(game_id)
        .bind(turn_count)
        .fetch_optional(conn)
        .await?;
        Ok(turn)
    }
}
