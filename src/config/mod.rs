use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Path prefix the people resource is mounted under, e.g. `/people`
    pub resource_path: String,
    pub max_request_size_bytes: usize,
    /// Include panic detail in 500 bodies instead of a generic message
    pub expose_internal_errors: bool,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub cors_allow_methods: String,
    pub cors_allow_headers: String,
    pub cors_max_age_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PEOPLE_API_HOST") {
            self.server.host = v;
        }
        if let Some(port) = env::var("PEOPLE_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|v| v.parse().ok())
        {
            self.server.port = port;
        }

        // API overrides
        if let Ok(v) = env::var("PEOPLE_API_RESOURCE_PATH") {
            self.api.resource_path = normalize_resource_path(&v);
        }
        if let Ok(v) = env::var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }
        if let Ok(v) = env::var("API_EXPOSE_INTERNAL_ERRORS") {
            self.api.expose_internal_errors = v.parse().unwrap_or(self.api.expose_internal_errors);
        }
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // CORS overrides
        if let Ok(v) = env::var("CORS_ALLOW_METHODS") {
            self.security.cors_allow_methods = v;
        }
        if let Ok(v) = env::var("CORS_ALLOW_HEADERS") {
            self.security.cors_allow_headers = v;
        }
        if let Ok(v) = env::var("CORS_MAX_AGE_SECS") {
            self.security.cors_max_age_secs = v.parse().unwrap_or(self.security.cors_max_age_secs);
        }

        if let Ok(v) = env::var("LOG_LEVEL") {
            self.logging.level = v;
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            api: ApiConfig {
                resource_path: "/people".to_string(),
                max_request_size_bytes: 1024 * 1024, // 1MB
                expose_internal_errors: true,
                enable_request_logging: true,
            },
            security: SecurityConfig::default(),
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            api: ApiConfig {
                resource_path: "/people".to_string(),
                max_request_size_bytes: 64 * 1024, // 64KB
                expose_internal_errors: false,
                enable_request_logging: true,
            },
            security: SecurityConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_allow_methods: "GET, POST, PUT, DELETE, OPTIONS".to_string(),
            cors_allow_headers: "Content-Type, Accept".to_string(),
            cors_max_age_secs: 600,
        }
    }
}

/// Force a leading slash and strip trailing ones; an empty path becomes `/people`.
pub fn normalize_resource_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return "/people".to_string();
    }
    format!("/{}", trimmed)
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
