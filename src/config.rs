/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::config
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    In-code configuration for the Syn-Cask transport clients.
    Syn-Cask-Core is embedded as a library; the host shell owns
    any persistence, so no configuration file is read here.

  Security / Safety Notes:
    All endpoints are public read-only HTTPS APIs; no tokens or
    credentials are configured or transmitted.

  Dependencies:
    None beyond std.

  Operational Scope:
    Consumed by the brew and github client constructors.

  Revision History:
    2025-06-12 COD  Introduced client configuration structure.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit defaults over hidden global state
    - Bounded retries and timeouts by construction
============================================================*/

/// Default Homebrew cask JSON index endpoint.
pub const DEFAULT_INDEX_URL: &str = "https://formulae.brew.sh/api/cask.json";

/// Default GitHub code-search endpoint for the cask repository.
pub const DEFAULT_SEARCH_URL: &str = "https://api.github.com/search/code";

/// Repository qualifier appended to every code-search query.
pub const DEFAULT_SEARCH_REPO: &str = "Homebrew/homebrew-cask";

/// Tunables for the HTTP transport clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the one-shot cask JSON index.
    pub index_url: String,
    /// Base URL of the code-search API.
    pub search_url: String,
    /// `owner/name` repository qualifier for code search.
    pub search_repo: String,
    /// Per-request timeout in seconds.
    pub timeout: u64,
    /// User agent presented to upstream APIs.
    pub user_agent: String,
    /// Maximum attempts per request before giving up.
    pub max_retries: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            search_repo: DEFAULT_SEARCH_REPO.to_string(),
            timeout: 30,
            user_agent: "Syn-Cask-Core/0.4 (macos)".to_string(),
            max_retries: 3,
        }
    }
}
