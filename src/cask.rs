/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::cask
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Shared structures describing cask metadata retrieved from
    the Homebrew JSON index and the code-search flow, plus the
    resolved download handed back to the host shell.

  Security / Safety Notes:
    Pure data containers; no I/O performed in this module.

  Dependencies:
    serde for wire decoding, reqwest for the Url type.

  Operational Scope:
    Used across the transport, search, and resolver modules to
    pass cask metadata and resolution outcomes.

  Revision History:
    2025-06-12 COD  Introduced shared cask record types.
    2025-07-03 COD  Added resolved download structure.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Clear data contracts between modules
    - Deserializable structures matching upstream wire formats
============================================================*/

use reqwest::Url;
use serde::Deserialize;

/// One entry of the Homebrew cask JSON index.
///
/// Field names follow the upstream wire format; `name` holds the
/// display-name variants, `token` the canonical identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct CaskRecord {
    pub token: String,
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sha256: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl CaskRecord {
    /// Preferred display name: first name variant, token otherwise.
    pub fn display_name(&self) -> &str {
        self.name.first().map(String::as_str).unwrap_or(&self.token)
    }
}

/// Location of one descriptor file found via code search.
#[derive(Debug, Clone)]
pub struct CaskLocation {
    /// Descriptor file name without the `.rb` suffix.
    pub name: String,
    /// API URL of the descriptor blob.
    pub url: Url,
}

/// One row of a search response handed to the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub url: Option<String>,
    pub sha256: Option<String>,
}

/// Outcome of a successful URL resolution.
#[derive(Debug, Clone)]
pub struct ResolvedDownload {
    /// Fully expanded, validated download URL.
    pub url: Url,
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
}
