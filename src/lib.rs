pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod usage;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: AppConfig,
}
