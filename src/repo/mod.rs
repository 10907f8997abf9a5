pub mod connection;
pub mod error;
pub mod games;
pub mod moves;
pub mod squares;
pub mod turns;
