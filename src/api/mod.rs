pub mod app;
pub mod assets;
pub mod error;
pub mod extractor;
pub mod handler;
