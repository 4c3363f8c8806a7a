// Configuration for:
// - Database connection string and pool size
// - Server listening address/port
// - Listing page size and max reachable page

use dotenv::dotenv;
use std::env;

use crate::service::pagination::{Paging, DEFAULT_PAGE_SIZE, MAX_PAGE};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub db_max_connections: u32,
    pub page_size: u32,
    pub max_page: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:explorer.db".to_string());
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().unwrap_or(5))
            .unwrap_or(5);
        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let max_page = env::var("MAX_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|max| *max > 0)
            .unwrap_or(MAX_PAGE);

        Self {
            database_url,
            server_host,
            server_port,
            db_max_connections,
            page_size,
            max_page,
        }
    }

    pub fn paging(&self) -> Paging {
        Paging::new(self.page_size, self.max_page)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            db_max_connections: 5,
            page_size: DEFAULT_PAGE_SIZE,
            max_page: MAX_PAGE,
        }
    }
}
