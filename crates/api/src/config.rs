use std::path::PathBuf;

use crate::service::rooms::UpdateGuard;

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
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory under which `uploads/picture-room/images` is created
    /// (default: the working directory).
    pub upload_root: PathBuf,
    /// Existence policy applied to the target id on room updates.
    pub update_guard: UpdateGuard,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_ROOT`          | `.`                        |
    /// | `UPDATE_GUARD`         | `strict`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_root =
            PathBuf::from(std::env::var("UPLOAD_ROOT").unwrap_or_else(|_| ".".into()));

        let update_guard = UpdateGuard::from_env_value(
            &std::env::var("UPDATE_GUARD").unwrap_or_else(|_| "strict".into()),
        )
        .expect("UPDATE_GUARD must be 'strict' or 'legacy'");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_root,
            update_guard,
        }
    }
}
