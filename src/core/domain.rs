use std::env;

use serde::{Deserialize, Serialize};
use tracing::log::warn;

// Configuration abstracts runtime options for the book catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub env: String,
    pub db_path: String,
    pub http_host: String,
    pub http_port: u16,
}

impl Configuration {
    pub fn new(env_name: &str) -> Self {
        let db_path = env::var("BOOKS_DB_PATH").unwrap_or_else(|_| "books.db".to_string());
        let http_host = env::var("BOOKS_HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_port = env::var("BOOKS_HTTP_PORT")
            .ok()
            .and_then(|port| match port.parse::<u16>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    warn!("ignoring unparseable BOOKS_HTTP_PORT {:?}", port);
                    None
                }
            })
            .unwrap_or(8080);
        Configuration {
            env: env_name.to_string(),
            db_path,
            http_host,
            http_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.env.as_str());
        assert_eq!("books.db", config.db_path.as_str());
        assert_eq!("0.0.0.0", config.http_host.as_str());
        assert_eq!(8080, config.http_port);
    }

    #[tokio::test]
    async fn test_should_fall_back_on_unparseable_http_port() {
        env::set_var("BOOKS_HTTP_PORT", "not-a-port");
        let config = Configuration::new("test");
        env::remove_var("BOOKS_HTTP_PORT");
        assert_eq!(8080, config.http_port);
    }
}
