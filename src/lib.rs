/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Library core for Syn-Cask: search a cask metadata index,
    extract descriptor fields, and expand version placeholder
    templates into concrete download URLs for the host shell.

  Security / Safety Notes:
    The core performs no I/O of its own; the transport clients
    issue read-only HTTPS requests to public APIs only.

  Dependencies:
    reqwest/tokio for transport, serde for wire decoding,
    thiserror for the error taxonomy.

  Operational Scope:
    Embedded by UI or automation shells; exposes synchronous
    parse/resolve functions and asynchronous transport clients.

  Revision History:
    2025-06-12 COD  Authored Syn-Cask-Core crate root.
    2025-07-03 COD  Wired transport clients and re-exports.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Result-first error handling, no escaping panics
    - Pure core, effectful edges
    - Stable re-exported surface for embedding shells
============================================================*/

pub mod brew;
pub mod cask;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod future;
pub mod github;
pub mod logger;
pub mod resolver;
pub mod search;
pub mod version;

pub use brew::BrewIndexClient;
pub use cask::{CaskLocation, CaskRecord, ResolvedDownload, SearchResult};
pub use config::ClientConfig;
pub use descriptor::{extract, DescriptorFields};
pub use error::{Result, SyncaskError};
pub use github::CodeSearchClient;
pub use logger::Logger;
pub use resolver::{resolve, resolve_fields, resolve_record};
pub use search::search;
pub use version::{expand, VersionComponents};
