//! HTTP/JSON trivia service: categories, paginated questions, substring
//! search and randomized quiz play over a SQLite store.

pub mod db;
pub mod server;
pub mod settings;
pub mod telemetry;
