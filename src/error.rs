/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::error
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Centralise Syn-Cask-Core error types to provide consistent
    diagnostics and exit semantics.

  Security / Safety Notes:
    Error contexts carry descriptor URLs and expanded download
    strings for diagnosability; no credentials are involved.

  Dependencies:
    thiserror for ergonomic error definitions.

  Operational Scope:
    Used across modules to propagate recoverable failures and
    consolidate exit codes for embedding shells.

  Revision History:
    2025-06-12 COD  Established shared error definitions.
    2025-07-03 COD  Added resolution-specific variants.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit error taxonomy with actionable context
    - No silent failure paths
    - Stable exit codes for operational tooling
============================================================*/

use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Result alias for Syn-Cask-Core operations.
pub type Result<T> = std::result::Result<T, SyncaskError>;

/// Enumerates high-level error domains surfaced by Syn-Cask-Core.
#[derive(Debug, Error)]
pub enum SyncaskError {
    #[error("Search index unavailable: {0}")]
    IndexUnavailable(String),
    #[error("Descriptor has no recognizable url field")]
    MissingUrlTemplate,
    #[error(
        "Template `{template}` expanded to `{expanded}` for version `{version}`, \
         which is not a valid URL"
    )]
    InvalidResolvedUrl {
        template: String,
        expanded: String,
        version: String,
    },
    #[error("Network: {0}")]
    Network(String),
    #[error("Serialization: {0}")]
    Serialization(String),
    #[error("Runtime: {0}")]
    Runtime(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SyncaskError {
    /// Map error category to a deterministic exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SyncaskError::IndexUnavailable(_) => ExitCode::from(20),
            SyncaskError::MissingUrlTemplate => ExitCode::from(21),
            SyncaskError::InvalidResolvedUrl { .. } => ExitCode::from(22),
            SyncaskError::Network(_) => ExitCode::from(30),
            SyncaskError::Serialization(_) => ExitCode::from(31),
            SyncaskError::Runtime(_) => ExitCode::from(50),
            SyncaskError::Io(_) => ExitCode::from(41),
        }
    }
}
