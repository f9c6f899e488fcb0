use axum::http::HeaderValue;
use std::env;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => 8000,
        };

        let cors_origin = match env::var("CORS_ORIGIN") {
            Ok(raw) => raw
                .parse::<HeaderValue>()
                .map_err(|_| format!("CORS_ORIGIN is not a valid header value: '{}'", raw))?,
            Err(_) => HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        };

        Ok(Self {
            host,
            port,
            cors_origin,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, String> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| format!("PORT must be a valid port number, got '{}': {}", raw, e))
}
