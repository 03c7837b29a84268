/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::search
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Match a query against the cask index and order the results
    for the presentation shell.

  Security / Safety Notes:
    Pure in-memory filtering; query text is never forwarded to
    any network endpoint from this module.

  Dependencies:
    None beyond std.

  Operational Scope:
    Serves the index-mode search surface over a fetched index.

  Revision History:
    2025-07-03 COD  Authored index matching and ordering.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Deterministic ordering for reproducible result lists
    - Case-insensitive matching, case-sensitive ordering
============================================================*/

use crate::cask::{CaskRecord, SearchResult};

/// Search the index for casks matching `query`.
///
/// Matching is a case-insensitive substring test against every name
/// variant and the description. Ordering is ascending by display
/// name under case-sensitive lexical comparison, so uppercase names
/// sort before lowercase ones; that artifact of plain byte ordering
/// is kept as the shipped behavior.
pub fn search(index: &[CaskRecord], query: &str) -> Vec<SearchResult> {
    let needle = query.to_lowercase();

    let mut results: Vec<SearchResult> = index
        .iter()
        .filter(|record| matches(record, &needle))
        .map(|record| SearchResult {
            name: record.display_name().to_string(),
            description: record.desc.clone(),
            homepage: record.homepage.clone(),
            url: record.url.clone(),
            sha256: record.sha256.clone(),
        })
        .collect();

    results.sort_by(|a, b| a.name.cmp(&b.name));
    results
}

fn matches(record: &CaskRecord, needle: &str) -> bool {
    let name_hit = record
        .name
        .iter()
        .any(|variant| variant.to_lowercase().contains(needle));
    let desc_hit = record
        .desc
        .as_deref()
        .map(|desc| desc.to_lowercase().contains(needle))
        .unwrap_or(false);
    name_hit || desc_hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(token: &str, names: &[&str], desc: Option<&str>) -> CaskRecord {
        CaskRecord {
            token: token.to_string(),
            name: names.iter().map(|n| n.to_string()).collect(),
            desc: desc.map(str::to_string),
            homepage: None,
            url: None,
            sha256: None,
            version: None,
        }
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let index = vec![
            record("zed", &["Zed"], Some("editor")),
            record("atom", &["Atom"], Some("editor")),
            record("bash", &["bash"], Some("editor")),
        ];
        let names: Vec<String> = search(&index, "editor")
            .into_iter()
            .map(|result| result.name)
            .collect();
        assert_eq!(names, vec!["Atom", "Zed", "bash"]);
    }

    #[test]
    fn matches_are_case_insensitive_against_names_and_description() {
        let index = vec![
            record("firefox", &["Firefox", "Mozilla Firefox"], Some("Web browser")),
            record("gimp", &["GIMP"], Some("Image editor")),
        ];

        assert_eq!(search(&index, "FIREFOX").len(), 1);
        assert_eq!(search(&index, "mozilla").len(), 1);
        assert_eq!(search(&index, "browser").len(), 1);
        assert_eq!(search(&index, "Image EDITOR").len(), 1);
        assert!(search(&index, "thunderbird").is_empty());
    }

    #[test]
    fn records_without_description_still_match_on_name() {
        let index = vec![record("mpv", &["mpv"], None)];
        assert_eq!(search(&index, "mpv").len(), 1);
        assert!(search(&index, "player").is_empty());
    }

    #[test]
    fn display_name_falls_back_to_token() {
        let index = vec![record("wezterm", &[], Some("Terminal emulator"))];
        let results = search(&index, "terminal");
        assert_eq!(results[0].name, "wezterm");
    }
}
