pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::services::chat_service::ChatService;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub chat_service: ChatService,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let chat_service = ChatService::new(pool.clone());

        Self {
            pool,
            chat_service,
            jwt_secret: Arc::from(config.jwt_secret.as_str()),
        }
    }
}
