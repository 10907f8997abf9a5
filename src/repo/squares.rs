use sqlx::{prelude::FromRow, query_as, PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    core::board::{Board, BoardError, Disc, Point},
    repo::error::RepoError,
};

#[derive(FromRow, Debug, Clone)]
pub struct SquareRecord {
    pub id: Uuid,
    pub turn_id: Uuid,
    pub x: i32,
    pub y: i32,
    pub disc: Disc,
}

impl SquareRecord {
    pub fn square(&self) -> Result<(Point, Disc), BoardError> {
        Ok((Point::new(self.x, self.y)?, self.disc))
    }
}

pub struct SquareRepo;

impl SquareRepo {
    /// Writes the full 64-square snapshot of `board` in one statement.
    pub async fn insert_all(
        &self,
        conn: &mut PgConnection,
        turn_id: Uuid,
        board: &Board,
    ) -> Result<(), RepoError> {
        let mut builder = QueryBuilder::<Postgres>::new("insert into squares (turn_id, x, y, disc) ");
        builder.push_values(board.squares(), |mut row, (point, disc)| {
            row.push_bind(turn_id)
                .push_bind(point.x())
                .push_bind(point.y())
                .push_bind(disc);
        });
        builder.build().execute(conn).await?;
        Ok(())
    }

    pub async fn find_for_turn_id(
        &self,
        conn: &mut PgConnection,
        turn_id: Uuid,
    ) -> Result<Vec<SquareRecord>, RepoError> {
        let squares = query_as::<_, SquareRecord>(
            "select id, turn_id, x, y, disc from squares where turn_id = $1",
        )
        .bind(turn_id)
        .fetch_all(conn)
        .await?;
        Ok(squares)
    }
}
