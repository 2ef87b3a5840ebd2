//! Client configuration
//!
//! Read once at startup from the process environment. A `.env.local` or
//! `.env` at the workspace root is loaded first so local overrides work
//! without exporting variables.

use std::time::Duration;

use url::Url;

/// Default endpoint of the contractor save call
pub const DEFAULT_SUBMIT_URL: &str = "https://localhost:60001/Contractor/Save";

/// Default request timeout in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub const SUBMIT_URL_ENV: &str = "CONTRACTOR_SUBMIT_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "CONTRACTOR_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub submit_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            submit_url: DEFAULT_SUBMIT_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Build from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let submit_url = match lookup(SUBMIT_URL_ENV).map(|s| s.trim().to_string()) {
            Some(raw) if !raw.is_empty() => match Url::parse(&raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => url.to_string(),
                Ok(url) => {
                    tracing::warn!(
                        scheme = url.scheme(),
                        "{} must be http(s); using default",
                        SUBMIT_URL_ENV
                    );
                    DEFAULT_SUBMIT_URL.to_string()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid {}; using default", SUBMIT_URL_ENV);
                    DEFAULT_SUBMIT_URL.to_string()
                }
            },
            _ => DEFAULT_SUBMIT_URL.to_string(),
        };

        let timeout_ms = lookup(REQUEST_TIMEOUT_ENV)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Self {
            submit_url,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
