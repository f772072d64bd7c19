pub mod app;
pub mod error;
pub mod pagination;

mod extract;
mod routes;
