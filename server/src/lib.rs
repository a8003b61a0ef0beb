pub mod config;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod utils;
