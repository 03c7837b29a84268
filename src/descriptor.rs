/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::descriptor
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Extract the recognised metadata fields from raw cask
    descriptor text using line-oriented heuristics.

  Security / Safety Notes:
    Pure string processing; descriptor text is never executed
    or evaluated, only scanned for known field tokens.

  Dependencies:
    None beyond std.

  Operational Scope:
    Feeds the resolver with the field set of one descriptor.

  Revision History:
    2025-06-12 COD  Authored table-driven field extractor.
    2025-07-03 COD  Split strict and free-text extraction modes.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Extraction rules declared as data, not conditionals
    - Per-field degradation instead of whole-parse failure
    - Deterministic first-match-wins line selection
============================================================*/

/// Field set extracted from one cask descriptor.
///
/// `name`, `version`, and `sha256` degrade to the empty string when
/// absent; the remaining fields make absence explicit. `sha256` is
/// extracted but not consumed downstream; it is retained so host
/// shells can verify payloads (see `future::ChecksumVerifier`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorFields {
    pub name: String,
    pub version: String,
    pub sha256: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub url_template: Option<String>,
}

/// How a field's value is carved out of its matched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtractionMode {
    /// The line must split into exactly two space-separated tokens;
    /// the second is the value. Any other token count means the
    /// field is absent for that line, with no retry elsewhere.
    StrictTwoToken,
    /// The token is removed from the line wherever it occurs and the
    /// remainder is the value, tolerating multi-word content.
    FreeText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    Version,
    Sha256,
    Url,
    Name,
    Desc,
    Homepage,
}

struct FieldRule {
    key: FieldKey,
    token: &'static str,
    mode: ExtractionMode,
}

/// One rule per recognised field. Single-value fields use the strict
/// mode with a quote-anchored token; prose fields use free-text mode
/// with the bare keyword.
const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        key: FieldKey::Version,
        token: "version \"",
        mode: ExtractionMode::StrictTwoToken,
    },
    FieldRule {
        key: FieldKey::Sha256,
        token: "sha256 \"",
        mode: ExtractionMode::StrictTwoToken,
    },
    FieldRule {
        key: FieldKey::Url,
        token: "url \"",
        mode: ExtractionMode::StrictTwoToken,
    },
    FieldRule {
        key: FieldKey::Name,
        token: "name",
        mode: ExtractionMode::FreeText,
    },
    FieldRule {
        key: FieldKey::Desc,
        token: "desc",
        mode: ExtractionMode::FreeText,
    },
    FieldRule {
        key: FieldKey::Homepage,
        token: "homepage",
        mode: ExtractionMode::FreeText,
    },
];

/// Scan descriptor text and extract every recognised field.
///
/// Extraction never fails: each field independently degrades to
/// absent when no line qualifies. The first line containing a rule's
/// token wins; later declarations of the same field are ignored. A
/// token appearing inside an unrelated line (a comment mentioning
/// `version`, a URL containing `name`) is matched as-is; that
/// heuristic limitation is accepted and pinned by tests.
pub fn extract(text: &str) -> DescriptorFields {
    let mut fields = DescriptorFields::default();

    for rule in FIELD_RULES {
        let Some(value) = apply_rule(rule, text) else {
            continue;
        };
        match rule.key {
            FieldKey::Version => fields.version = value,
            FieldKey::Sha256 => fields.sha256 = value,
            FieldKey::Url => fields.url_template = Some(value),
            FieldKey::Name => fields.name = value,
            FieldKey::Desc => fields.description = Some(value),
            FieldKey::Homepage => fields.homepage = Some(value),
        }
    }

    fields
}

fn apply_rule(rule: &FieldRule, text: &str) -> Option<String> {
    let line = text.lines().find(|line| line.contains(rule.token))?;
    // Normalise spacing around comma-separated list literals so the
    // strict split sees list tails as part of the value token.
    let line = line.replace(", '", ",'");

    match rule.mode {
        ExtractionMode::StrictTwoToken => {
            let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
            if tokens.len() == 2 {
                Some(trim_value(tokens[1]))
            } else {
                None
            }
        }
        ExtractionMode::FreeText => {
            let remainder = line.replace(rule.token, "");
            let value = trim_value(&remainder);
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        }
    }
}

/// Strip the descriptor quoting characters from both ends of a value.
fn trim_value(raw: &str) -> String {
    raw.trim_matches(|c| matches!(c, ' ' | ',' | '"' | '\'' | '\n'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"cask "inkscape" do
  version "1.3.2"
  sha256 "ab12cd34ef56ab12cd34ef56ab12cd34ef56ab12cd34ef56ab12cd34ef56ab12"

  url "https://inkscape.org/gallery/item/44615/Inkscape-#{version}.dmg"
  name "Inkscape"
  desc "Vector graphics editor"
  homepage "https://inkscape.org/"
end
"#;

    #[test]
    fn extracts_all_fields_from_well_formed_descriptor() {
        let fields = extract(DESCRIPTOR);
        assert_eq!(fields.version, "1.3.2");
        assert_eq!(
            fields.sha256,
            "ab12cd34ef56ab12cd34ef56ab12cd34ef56ab12cd34ef56ab12cd34ef56ab12"
        );
        assert_eq!(
            fields.url_template.as_deref(),
            Some("https://inkscape.org/gallery/item/44615/Inkscape-#{version}.dmg")
        );
        assert_eq!(fields.name, "Inkscape");
        assert_eq!(fields.description.as_deref(), Some("Vector graphics editor"));
        assert_eq!(fields.homepage.as_deref(), Some("https://inkscape.org/"));
    }

    #[test]
    fn strict_mode_extracts_two_token_line() {
        let fields = extract("  version \"4.0.1\"\n");
        assert_eq!(fields.version, "4.0.1");
    }

    #[test]
    fn strict_mode_rejects_extra_tokens_without_retry() {
        // Interpolated list after the value breaks the two-token rule;
        // the later clean line is not consulted.
        let text = "  version \"1.0\" if extra\n  version \"2.0\"\n";
        let fields = extract(text);
        assert_eq!(fields.version, "");
    }

    #[test]
    fn strict_mode_normalises_list_spacing() {
        let fields = extract("  version \"5.1\", 'arm'\n");
        assert_eq!(fields.version, "5.1\",'arm");
    }

    #[test]
    fn free_text_mode_keeps_multi_word_values() {
        let fields = extract("  name \"Some App\", \"SomeApp\"\n");
        // Outer quotes trimmed only; inner comma structure preserved.
        assert_eq!(fields.name, "Some App\", \"SomeApp");
    }

    #[test]
    fn missing_fields_degrade_to_absent() {
        let fields = extract("cask \"empty\" do\nend\n");
        assert_eq!(fields, DescriptorFields::default());
        assert!(fields.url_template.is_none());
        assert!(fields.description.is_none());
        assert!(fields.homepage.is_none());
    }

    #[test]
    fn first_matching_line_wins() {
        let text = "  version \"1.0.0\"\n  version \"2.0.0\"\n";
        let fields = extract(text);
        assert_eq!(fields.version, "1.0.0");
    }

    #[test]
    fn token_inside_unrelated_line_is_matched() {
        // Known heuristic limitation: the first line containing the
        // token wins even when the token is part of unrelated prose.
        let text = "  # upstream ships one version \"channel\" only\n  version \"3.1.4\"\n";
        let fields = extract(text);
        assert_eq!(fields.version, "");

        // Same limitation for free-text tokens: a URL containing
        // `name` shadows the real name line, and token removal eats
        // the embedded occurrence too (`rename` becomes `re`).
        let text = "  url \"https://example.com/rename.dmg\"\n  name \"Real Name\"\n";
        let fields = extract(text);
        assert_eq!(fields.name, "url \"https://example.com/re.dmg");
    }

    #[test]
    fn version_without_quotes_is_absent() {
        let fields = extract("  version :latest\n");
        assert_eq!(fields.version, "");
    }
}
