use chrono::{DateTime, Utc};
use sqlx::{prelude::FromRow, query_as, PgConnection};
use uuid::Uuid;

use crate::repo::error::RepoError;

#[derive(FromRow, Debug, Clone)]
pub struct GameRecord {
    pub id: Uuid,
    pub seq: i64,
    pub started_at: DateTime<Utc>,
}

pub struct GameRepo;

impl GameRepo {
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        started_at: DateTime<Utc>,
    ) -> Result<GameRecord, RepoError> {
        let game = query_as::<_, GameRecord>(
            "insert into games (started_at) values ($1) returning id, seq, started_at",
        )
        .bind(started_at)
        .fetch_one(conn)
        .await?;
        Ok(game)
    }

    /// Latest by insertion order, independent of the stored timestamps.
    pub async fn find_latest(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Option<GameRecord>, RepoError> {
        let game = query_as::<_, GameRecord>(
            "select id, seq, started_at from games order by seq desc limit 1",
        )
        .fetch_optional(conn)
        .await?;
        Ok(game)
    }
}
