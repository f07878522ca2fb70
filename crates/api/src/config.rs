use crate::auth::jwt::JwtConfig;

/// Deployment profile selected by `APP_ENV`.
///
/// The profile only changes configuration defaults (CORS origins,
/// security headers); request handling is identical in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse `APP_ENV`. Unset defaults to development; anything other
    /// than the two known values is a startup error.
    fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Err(_) | Ok("development") => Environment::Development,
            Ok("production") => Environment::Production,
            Ok(other) => panic!("APP_ENV must be 'development' or 'production', got '{other}'"),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Deployment profile from `APP_ENV` (default: development).
    pub environment: Environment,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether to attach strict security headers to every response.
    /// On by default in production, off in development.
    pub security_headers: bool,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default (development)      | Default (production) |
    /// |------------------------|----------------------------|----------------------|
    /// | `HOST`                 | `0.0.0.0`                  | same                 |
    /// | `PORT`                 | `3000`                     | same                 |
    /// | `APP_ENV`              | `development`              | --                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    | **required**         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       | same                 |
    /// | `SECURITY_HEADERS`     | `false`                    | `true`               |
    ///
    /// # Panics
    ///
    /// Panics on malformed values, and in production when `CORS_ORIGINS`
    /// is unset -- misconfiguration should fail at startup, not at the
    /// first cross-origin request.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_raw = match (std::env::var("CORS_ORIGINS"), environment) {
            (Ok(raw), _) => raw,
            (Err(_), Environment::Development) => "http://localhost:5173".into(),
            (Err(_), Environment::Production) => {
                panic!("CORS_ORIGINS must be set when APP_ENV=production")
            }
        };
        let cors_origins: Vec<String> = cors_raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let security_headers: bool = std::env::var("SECURITY_HEADERS")
            .map(|v| v.parse().expect("SECURITY_HEADERS must be true or false"))
            .unwrap_or(environment == Environment::Production);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            environment,
            cors_origins,
            request_timeout_secs,
            security_headers,
            jwt,
        }
    }
}
