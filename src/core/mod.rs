pub mod board;
pub mod games;
pub mod turns;
