pub mod app;
pub mod cli;
pub mod error;
pub mod routes;
pub mod schema;
