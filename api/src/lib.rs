pub mod ai;
pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod seed;
pub mod states;

pub use routes::router;
pub use states::AppState;
