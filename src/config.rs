use std::env;
use std::path::{Path, PathBuf};

/// Where the client talks to and where it keeps its token between runs.
///
/// Resolved from the environment with local-development defaults, so a bare
/// `ClientConfig::from_env()` works against a backend on localhost.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    token_file: PathBuf,
}

impl ClientConfig {
    /// Reads `UASLINK_BASE_URL` and `UASLINK_TOKEN_FILE`, falling back to
    /// `http://localhost:8000` and `uaslink_token.json`.
    pub fn from_env() -> Self {
        let base_url_var = env::var("UASLINK_BASE_URL");
        let base_url = base_url_var.as_deref().map_or("http://localhost:8000", |v| v).to_string();
        let token_file =
            env::var("UASLINK_TOKEN_FILE").map_or_else(|_| PathBuf::from("uaslink_token.json"), PathBuf::from);
        Self { base_url, token_file }
    }

    pub fn new(base_url: &str, token_file: impl Into<PathBuf>) -> Self {
        Self { base_url: base_url.to_string(), token_file: token_file.into() }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    pub fn token_file(&self) -> &Path { &self.token_file }
}
