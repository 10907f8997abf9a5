use sqlx::{prelude::FromRow, query_as, PgConnection};
use uuid::Uuid;

use crate::{
    core::board::{Disc, Point},
    repo::error::RepoError,
};

#[derive(FromRow, Debug, Clone)]
pub struct MoveRecord {
    pub id: Uuid,
    pub turn_id: Uuid,
    pub disc: Disc,
    pub x: i32,
    pub y: i32,
}

pub struct MoveRepo;

impl MoveRepo {
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        turn_id: Uuid,
        disc: Disc,
        point: Point,
    ) -> Result<MoveRecord, RepoError> {
        let record = query_as::<_, MoveRecord>(
            r#"
            insert into moves (turn_id, disc, x, y)
            values ($1, $2, $3, $4)
            returning id, turn_id, disc, x, y
            "#,
        )
        .bind(turn_id)
        .bind(disc)
        .bind(point.x())
        .bind(point.y())
        .fetch_one(conn)
        .await?;
        Ok(record)
    }

    /// Turn 0 has no move.
    pub async fn find_for_turn_id(
        &self,
        conn: &mut PgConnection,
        turn_id: Uuid,
    ) -> Result<Option<MoveRecord>, RepoError> {
        let record = query_as::<_, MoveRecord>(
            "select id, turn_id, disc, x, y from moves where turn_id = $1",
        )
        .bind(turn_id)
        .fetch_optional(conn)
        .await?;
        Ok(record)
    }
}
