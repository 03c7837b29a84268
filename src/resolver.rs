/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::resolver
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Compose field extraction and template expansion into the
    descriptor-to-download-URL resolution pipeline.

  Security / Safety Notes:
    Resolution validates the expanded string as a URL before
    handing it to the host shell; nothing is fetched here.

  Dependencies:
    reqwest for the Url type.

  Operational Scope:
    Entry point for both descriptor-text and index-record
    resolution requests.

  Revision History:
    2025-07-03 COD  Authored resolution pipeline.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Tagged failures instead of escaping exceptions
    - Diagnostic context carried on every failure path
    - Pure composition over the parser and expander
============================================================*/

use reqwest::Url;

use crate::cask::{CaskRecord, ResolvedDownload};
use crate::descriptor::{self, DescriptorFields};
use crate::error::{Result, SyncaskError};
use crate::version;

/// Resolve raw descriptor text into a concrete download.
///
/// Extraction degradation is per-field and silent; only a missing
/// url template or an expansion that fails URL validation is a
/// terminal failure for the descriptor.
pub fn resolve(descriptor_text: &str) -> Result<ResolvedDownload> {
    resolve_fields(&descriptor::extract(descriptor_text))
}

/// Resolve an already-extracted field set.
pub fn resolve_fields(fields: &DescriptorFields) -> Result<ResolvedDownload> {
    let template = fields
        .url_template
        .as_deref()
        .ok_or(SyncaskError::MissingUrlTemplate)?;

    // An absent version expands placeholders to empty segments; that
    // is still a resolution attempt, not an error.
    let expanded = version::expand(template, &fields.version);

    let url = Url::parse(&expanded).map_err(|_| SyncaskError::InvalidResolvedUrl {
        template: template.to_string(),
        expanded: expanded.clone(),
        version: fields.version.clone(),
    })?;

    Ok(ResolvedDownload {
        url,
        name: fields.name.clone(),
        description: fields.description.clone(),
        homepage: fields.homepage.clone(),
    })
}

/// Resolve one entry of the JSON cask index. The record already
/// carries structured fields, so the text extraction step is skipped
/// and the record feeds the shared expansion path directly.
pub fn resolve_record(record: &CaskRecord) -> Result<ResolvedDownload> {
    let fields = DescriptorFields {
        name: record.display_name().to_string(),
        version: record.version.clone().unwrap_or_default(),
        sha256: record.sha256.clone().unwrap_or_default(),
        description: record.desc.clone(),
        homepage: record.homepage.clone(),
        url_template: record.url.clone(),
    };
    resolve_fields(&fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_descriptor_with_versioned_template() {
        let text = "  version \"7.2.5\"\n  url \"https://example.com/v#{version.major_minor}/app-#{version.no_dots}.dmg\"\n  name \"App\"\n";
        let resolved = resolve(text).unwrap();
        assert_eq!(
            resolved.url.as_str(),
            "https://example.com/v7.2/app-725.dmg"
        );
        assert_eq!(resolved.name, "App");
    }

    #[test]
    fn descriptor_without_url_fails_with_missing_template() {
        let text = "  version \"1.0.0\"\n  sha256 \"feed\"\n";
        let err = resolve(text).unwrap_err();
        assert!(matches!(err, SyncaskError::MissingUrlTemplate));
    }

    #[test]
    fn invalid_expansion_carries_diagnostics() {
        let fields = DescriptorFields {
            version: "2.0".to_string(),
            url_template: Some("not a url #{version}".to_string()),
            ..DescriptorFields::default()
        };
        let err = resolve_fields(&fields).unwrap_err();
        match err {
            SyncaskError::InvalidResolvedUrl {
                template,
                expanded,
                version,
            } => {
                assert_eq!(template, "not a url #{version}");
                assert_eq!(expanded, "not a url 2.0");
                assert_eq!(version, "2.0");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn absent_version_resolves_with_empty_segments() {
        let fields = DescriptorFields {
            url_template: Some("https://example.com/#{version}/app.zip".to_string()),
            ..DescriptorFields::default()
        };
        let resolved = resolve_fields(&fields).unwrap();
        assert_eq!(resolved.url.as_str(), "https://example.com//app.zip");
    }

    #[test]
    fn index_record_resolves_through_same_path() {
        let record = CaskRecord {
            token: "zed".to_string(),
            name: vec!["Zed".to_string()],
            desc: Some("Multiplayer code editor".to_string()),
            homepage: Some("https://zed.dev/".to_string()),
            url: Some("https://zed.dev/api/releases/stable/#{version}/Zed.dmg".to_string()),
            sha256: Some("00".repeat(32)),
            version: Some("0.120.4".to_string()),
        };
        let resolved = resolve_record(&record).unwrap();
        assert_eq!(
            resolved.url.as_str(),
            "https://zed.dev/api/releases/stable/0.120.4/Zed.dmg"
        );
        assert_eq!(resolved.name, "Zed");
        assert_eq!(
            resolved.description.as_deref(),
            Some("Multiplayer code editor")
        );
    }

    #[test]
    fn record_without_url_fails_with_missing_template() {
        let record = CaskRecord {
            token: "bare".to_string(),
            name: vec![],
            desc: None,
            homepage: None,
            url: None,
            sha256: None,
            version: Some("1.0".to_string()),
        };
        assert!(matches!(
            resolve_record(&record).unwrap_err(),
            SyncaskError::MissingUrlTemplate
        ));
    }
}
