//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for legally-server.
///
/// Server-owned knobs use the `LEGALLY_` prefix; credentials for hosted
/// services keep their conventional names (`HF_TOKEN`, `FIREBASE_*`, …) so
/// existing deployment environments carry over unchanged.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:8000"`).
    pub bind_address: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Serve Swagger UI at `/swagger-ui` (default: on).
    pub enable_swagger: bool,

    /// Comma-separated allowed CORS origins; `None` means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Admin login pair for the panel.
    pub admin_email: String,
    pub admin_password: String,

    /// Hosted-inference API token; the advice endpoint reports 503 without it.
    pub hf_token: Option<String>,

    /// Primary model, called with the completion convention.
    pub primary_model: String,

    /// Fallback model, called with the chat convention.
    pub fallback_model: String,

    /// Realtime-database base URL; admin data endpoints report 503 without it.
    pub firebase_database_url: Option<String>,

    /// Legacy database-secret credential, appended as `?auth=`.
    pub firebase_database_secret: Option<String>,

    /// Externally minted OAuth bearer token for the auth provider.
    pub firebase_auth_token: Option<String>,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("LEGALLY_BIND", "0.0.0.0:8000"),
            log_level: env_or("LEGALLY_LOG", "info"),
            log_json: env_flag("LEGALLY_LOG_JSON", false),
            enable_swagger: env_flag("LEGALLY_ENABLE_SWAGGER", true),
            cors_allowed_origins: env_opt("CORS_ORIGINS"),
            admin_email: env_or("ADMIN_EMAIL", "admin@legally.com"),
            admin_password: env_or("ADMIN_PASSWORD", "Admin@123"),
            hf_token: env_opt("HF_TOKEN"),
            primary_model: env_or("HF_MODEL_ID", "AdaptLLM/law-LLM"),
            fallback_model: env_or(
                "HF_FALLBACK_MODEL_ID",
                "meta-llama/Meta-Llama-3-8B-Instruct",
            ),
            firebase_database_url: env_opt("FIREBASE_DATABASE_URL"),
            firebase_database_secret: env_opt("FIREBASE_DATABASE_SECRET"),
            firebase_auth_token: env_opt("FIREBASE_AUTH_TOKEN"),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
