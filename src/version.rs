/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::version
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Decompose cask version strings into their sub-components
    and expand the placeholder tokens embedded in download URL
    templates.

  Security / Safety Notes:
    Pure string substitution; placeholders are matched as
    literals and never evaluated as expressions.

  Dependencies:
    None beyond std.

  Operational Scope:
    Invoked by the resolver once per descriptor to produce the
    concrete download URL.

  Revision History:
    2025-06-12 COD  Authored component split and expansion fold.
    2025-07-03 COD  Pinned substitution order, incl. rule 7 quirk.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Ordered substitution list; ordering is load-bearing
    - Total functions with no failure mode
    - Fresh component derivation per call, no caching
============================================================*/

/// Sub-components derived from one version string.
///
/// Every split operates on the original version string, not on
/// partially decomposed intermediates, so a comma tail stays part of
/// the `patch` component. Components are recomputed for each
/// expansion and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionComponents {
    pub full: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    /// `patch` with any trailing `-suffix` removed.
    pub patch_only: String,
    pub before_comma: String,
    pub after_comma: String,
    pub after_comma_before_colon: String,
    pub after_colon: String,
}

impl VersionComponents {
    /// Split a raw version string into its recognised components.
    /// Absent components are the empty string, never an error.
    pub fn split(version: &str) -> Self {
        let mut components = VersionComponents {
            full: version.to_string(),
            ..VersionComponents::default()
        };

        let dots = segments(version, '.');
        if let Some(major) = dots.first() {
            components.major = (*major).to_string();
        }
        if let Some(minor) = dots.get(1) {
            components.minor = (*minor).to_string();
        }
        if let Some(patch) = dots.get(2) {
            components.patch = (*patch).to_string();
        }

        if let Some(patch_only) = segments(&components.patch, '-').first() {
            components.patch_only = (*patch_only).to_string();
        }

        let commas = segments(version, ',');
        if commas.len() > 1 {
            components.before_comma = commas[0].to_string();
            components.after_comma = commas[1].to_string();

            let colons = segments(&components.after_comma, ':');
            if colons.len() > 1 {
                components.after_comma_before_colon = colons[0].to_string();
            }
        }

        let colons = segments(version, ':');
        if colons.len() > 1 {
            components.after_colon = colons[1].to_string();
        }

        components
    }
}

/// Delimiter split discarding empty segments, mirroring the upstream
/// descriptor conventions where doubled delimiters carry no meaning.
fn segments(source: &str, delimiter: char) -> Vec<&str> {
    source
        .split(delimiter)
        .filter(|segment| !segment.is_empty())
        .collect()
}

type Render = fn(&VersionComponents) -> String;

/// The substitution table. Order is significant and preserved exactly:
/// later rules operate on the output of earlier ones. The second
/// `#{version.major_minor}` entry intentionally narrows any residual
/// match to just the major component; it is an upstream quirk kept
/// as-is. The final two rows are escape hatches for two known
/// descriptor authors (Thunderbird's language token, VirtualBox's
/// inline `sub` call) and match only those literal strings.
const SUBSTITUTIONS: &[(&str, Render)] = &[
    ("#{version}", |c| c.full.clone()),
    ("#{version.major}", |c| c.major.clone()),
    ("#{version.minor}", |c| c.minor.clone()),
    ("#{version.major_minor}", |c| {
        format!("{}.{}", c.major, c.minor)
    }),
    ("#{version.major_minor.no_dots}", |c| {
        format!("{}{}", c.major, c.minor)
    }),
    ("#{version.major_minor_patch}", |c| {
        format!("{}.{}.{}", c.major, c.minor, c.patch_only)
    }),
    ("#{version.major_minor}", |c| c.major.clone()),
    ("#{version.dots_to_underscores}", |c| {
        format!("{}_{}_{}", c.major, c.minor, c.patch)
    }),
    ("#{version.no_dots}", |c| {
        format!("{}{}{}", c.major, c.minor, c.patch)
    }),
    ("#{version.patch}", |c| c.patch.clone()),
    ("#{version.dots_to_hyphens}", |c| {
        format!("{}-{}-{}", c.major, c.minor, c.patch)
    }),
    ("#{version.before_comma}", |c| c.before_comma.clone()),
    ("#{version.after_comma}", |c| c.after_comma.clone()),
    ("#{version.after_comma.before_colon}", |c| {
        c.after_comma_before_colon.clone()
    }),
    ("#{version.after_colon}", |c| c.after_colon.clone()),
    ("#{language}", |_| "en-US".to_string()),
    ("#{version.sub(%r{-.*},'')}", |c| {
        format!("{}.{}.{}", c.major, c.minor, c.patch_only)
    }),
];

/// Expand every recognised placeholder in `template` using components
/// derived from `version`.
///
/// Pure and total: identical inputs always yield identical output,
/// unrecognised placeholders pass through untouched, and no error
/// path exists.
pub fn expand(template: &str, version: &str) -> String {
    let components = VersionComponents::split(version);

    SUBSTITUTIONS
        .iter()
        .fold(template.to_string(), |expanded, &(placeholder, render)| {
            if expanded.contains(placeholder) {
                expanded.replace(placeholder, &render(&components))
            } else {
                expanded
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_compound_version_into_components() {
        let c = VersionComponents::split("12.3.1-beta,us:en");
        assert_eq!(c.major, "12");
        assert_eq!(c.minor, "3");
        // The dot split runs over the whole version, so the comma
        // tail stays inside patch; patch_only still cuts at the
        // first hyphen.
        assert_eq!(c.patch, "1-beta,us:en");
        assert_eq!(c.patch_only, "1");
        assert_eq!(c.before_comma, "12.3.1-beta");
        assert_eq!(c.after_comma, "us:en");
        assert_eq!(c.after_comma_before_colon, "us");
        // after_colon comes from splitting the whole version, not
        // the after-comma part.
        assert_eq!(c.after_colon, "en");
    }

    #[test]
    fn splits_short_versions_with_empty_tail_components() {
        let c = VersionComponents::split("7");
        assert_eq!(c.major, "7");
        assert_eq!(c.minor, "");
        assert_eq!(c.patch, "");
        assert_eq!(c.patch_only, "");
        assert_eq!(c.before_comma, "");
        assert_eq!(c.after_colon, "");
    }

    #[test]
    fn empty_version_yields_empty_components() {
        assert_eq!(
            VersionComponents::split(""),
            VersionComponents::default()
        );
    }

    #[test]
    fn expands_every_placeholder_once() {
        let template = "#{version}/#{version.major}/#{version.minor}/\
                        #{version.major_minor}/#{version.major_minor.no_dots}/\
                        #{version.major_minor_patch}/#{version.dots_to_underscores}/\
                        #{version.no_dots}/#{version.patch}/#{version.dots_to_hyphens}/\
                        #{version.before_comma}/#{version.after_comma}/\
                        #{version.after_comma.before_colon}/#{version.after_colon}/\
                        #{language}/#{version.sub(%r{-.*},'')}";
        let expanded = expand(template, "12.3.1-beta,us:en");
        assert_eq!(
            expanded,
            "12.3.1-beta,us:en/12/3/12.3/123/12.3.1/12_3_1-beta,us:en/\
             1231-beta,us:en/1-beta,us:en/12-3-1-beta,us:en/12.3.1-beta/\
             us:en/us/en/en-US/12.3.1"
        );
    }

    #[test]
    fn expands_documented_dmg_example() {
        let expanded = expand(
            "https://example.com/v#{version.major_minor}/app-#{version.no_dots}.dmg",
            "7.2.5",
        );
        assert_eq!(expanded, "https://example.com/v7.2/app-725.dmg");
    }

    #[test]
    fn duplicate_major_minor_rule_consumes_residual_matches() {
        // The first major_minor rule rewrites the placeholder to
        // `major.minor`; the duplicate second pass narrows anything
        // that rewrite reintroduces to just major. A version whose
        // own text spells the placeholder exercises the residual
        // path: after the first pass the string reads
        // `#{version.major_minor},x`, which the second pass then
        // collapses to the major component.
        let expanded = expand("#{version.major_minor}", "#{version.major_minor},x");
        assert_eq!(expanded, "#{version,x");
        assert!(!expanded.contains("#{version.major_minor}"));
    }

    #[test]
    fn expansion_is_idempotent_once_placeholders_are_consumed() {
        let template = "https://dl.example.org/#{version.major_minor}/pkg-#{version}.zip";
        let version = "4.11.2";
        let once = expand(template, version);
        assert_eq!(expand(&once, version), once);
    }

    #[test]
    fn unrecognised_placeholders_pass_through() {
        let expanded = expand("https://example.com/#{version.csv}/x", "1.2.3");
        assert_eq!(expanded, "https://example.com/#{version.csv}/x");
    }

    #[test]
    fn empty_version_expands_to_empty_segments() {
        let expanded = expand("https://example.com/#{version}/app.dmg", "");
        assert_eq!(expanded, "https://example.com//app.dmg");
    }

    #[test]
    fn language_token_is_fixed_literal() {
        assert_eq!(expand("#{language}/tb.dmg", "102.0"), "en-US/tb.dmg");
    }

    #[test]
    fn virtualbox_sub_token_maps_to_clean_triple() {
        assert_eq!(
            expand("VirtualBox-#{version.sub(%r{-.*},'')}.dmg", "7.0.14-beta2"),
            "VirtualBox-7.0.14.dmg"
        );
    }
}
