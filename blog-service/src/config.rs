use serde::Deserialize;

/// Service configuration, read once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: String,
}

/// Bounds for the list endpoint. Requested limits above `max_limit`
/// are clamped, never rejected.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationConfig {
    pub default_limit: i64,
    pub max_limit: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET environment variable not set".to_string())?;

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BLOG_SERVICE_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3001),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL").map_err(|_| {
                    "DATABASE_URL environment variable not set".to_string()
                })?,
            },
            auth: AuthConfig { jwt_secret },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
            pagination: PaginationConfig {
                default_limit: std::env::var("PAGINATION_DEFAULT_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
                max_limit: std::env::var("PAGINATION_MAX_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(50),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_required_env() {
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::set_var("DATABASE_URL", "postgres://localhost/blog_platform");
    }

    #[test]
    #[serial_test::serial]
    fn test_config_defaults() {
        set_required_env();
        std::env::remove_var("BLOG_SERVICE_PORT");
        std::env::remove_var("PAGINATION_DEFAULT_LIMIT");
        std::env::remove_var("PAGINATION_MAX_LIMIT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.port, 3001);
        assert_eq!(config.pagination.default_limit, 10);
        assert_eq!(config.pagination.max_limit, 50);
    }

    #[test]
    #[serial_test::serial]
    fn test_config_pagination_override() {
        set_required_env();
        std::env::set_var("PAGINATION_MAX_LIMIT", "100");

        let config = Config::from_env().unwrap();
        assert_eq!(config.pagination.max_limit, 100);

        std::env::remove_var("PAGINATION_MAX_LIMIT");
    }

    #[test]
    #[serial_test::serial]
    fn test_config_requires_database_url() {
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::remove_var("DATABASE_URL");

        assert!(Config::from_env().is_err());
    }
}
