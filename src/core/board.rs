use serde::{Deserialize, Serialize};
use sqlx::Type;
use thiserror::Error;

pub const BOARD_SIZE: usize = 8;
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown disc value {0}")]
    InvalidDisc(i32),
    #[error("square ({x}, {y}) is outside the board")]
    OutOfRange { x: i32, y: i32 },
    #[error("square ({x}, {y}) appears more than once in the snapshot")]
    DuplicateSquare { x: i32, y: i32 },
    #[error("snapshot has {0} squares, expected {SQUARE_COUNT}")]
    IncompleteSnapshot(usize),
}

/// Disc state of a square. The wire and storage encoding is
/// `0 = empty, 1 = dark, 2 = light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum Disc {
    #[default]
    Empty = 0,
    Dark = 1,
    Light = 2,
}

impl Disc {
    /// The colour that moves after `self` was placed.
    pub fn next(self) -> Disc {
        match self {
            Disc::Dark => Disc::Light,
            _ => Disc::Dark,
        }
    }
}

impl TryFrom<i32> for Disc {
    type Error = BoardError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Disc::Empty),
            1 => Ok(Disc::Dark),
            2 => Ok(Disc::Light),
            other => Err(BoardError::InvalidDisc(other)),
        }
    }
}

impl From<Disc> for i32 {
    fn from(disc: Disc) -> Self {
        disc as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: usize,
    y: usize,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Result<Self, BoardError> {
        let in_range = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if !in_range(x) || !in_range(y) {
            return Err(BoardError::OutOfRange { x, y });
        }
        Ok(Point {
            x: x as usize,
            y: y as usize,
        })
    }

    pub fn x(&self) -> i32 {
        self.x as i32
    }

    pub fn y(&self) -> i32 {
        self.y as i32
    }
}

/// An 8x8 grid indexed `cells[y][x]`, serialized as nested arrays of
/// encoded discs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Disc; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[Disc::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position: dark on the (3,3)/(4,4) diagonal,
    /// light on the other.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.cells[3][3] = Disc::Dark;
        board.cells[3][4] = Disc::Light;
        board.cells[4][3] = Disc::Light;
        board.cells[4][4] = Disc::Dark;
        board
    }

    /// Rebuilds a board from a persisted snapshot. Every square must be
    /// present exactly once.
    pub fn from_squares<I>(squares: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Point, Disc)>,
    {
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        let mut count = 0;
        for (point, disc) in squares {
            let cell = &mut cells[point.y][point.x];
            if cell.is_some() {
                return Err(BoardError::DuplicateSquare {
                    x: point.x(),
                    y: point.y(),
                });
            }
            *cell = Some(disc);
            count += 1;
        }
        if count != SQUARE_COUNT {
            return Err(BoardError::IncompleteSnapshot(count));
        }

        let mut board = Board::empty();
        for (y, row) in cells.iter().enumerate() {
            for (x, disc) in row.iter().enumerate() {
                board.cells[y][x] = disc.unwrap_or_default();
            }
        }
        Ok(board)
    }

    /// Writes `disc` at `point` as submitted. The target may already be
    /// occupied; no neighbouring discs are flipped.
    pub fn place(&mut self, point: Point, disc: Disc) {
        self.cells[point.y][point.x] = disc;
    }

    /// All 64 squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Point, Disc)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, disc)| (Point { x, y }, *disc))
        })
    }
}
