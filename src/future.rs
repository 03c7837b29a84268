/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::future
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Provide scaffolding for Syn-Cask-Core roadmap features such
    as payload checksum verification and streamed download
    delivery.

  Security / Safety Notes:
    No operational code is executed; this module documents
    planned extension points to guide safe implementations.

  Dependencies:
    None at runtime; placeholder traits only.

  Operational Scope:
    Referenced by developers when implementing Syn-Cask v1+.

  Revision History:
    2025-07-03 COD  Added future expansion scaffolding.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit documentation of deferred capabilities
    - Clearly fenced placeholders to avoid accidental use
============================================================*/

#![allow(dead_code)]

use crate::cask::ResolvedDownload;

/// Planned hook for verifying fetched payloads against the sha256
/// field descriptors already carry (extracted today, unused).
pub trait ChecksumVerifier {
    /// Compare a payload digest against the descriptor checksum.
    fn verify(&self, payload: &[u8], expected_sha256: &str) -> bool;
}

/// Planned hook for delivering resolved downloads to disk instead of
/// handing the URL back to the host shell.
pub trait DownloadSink {
    /// Stream the resolved download to its destination.
    fn deliver(&self, download: &ResolvedDownload) -> std::io::Result<()>;
}

/// Sink registration entry point. Currently a stub.
pub fn register_sink<T>(_sink: T)
where
    T: ChecksumVerifier + DownloadSink + Send + Sync + 'static,
{
    // Placeholder: in-core download delivery lands in Syn-Cask v1.
}
