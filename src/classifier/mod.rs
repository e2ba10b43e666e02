//! Technology Classifier
//!
//! Maps a fetched-file set to a ranked detection list using the rule
//! catalog. Pure and synchronous: no I/O, no shared mutable state, so any
//! number of classifications can run in parallel.
//!
//! Per rule, every signal is evaluated independently against the full file
//! set; the rule's confidence is the **maximum** matched signal confidence
//! (signals are never summed or averaged). Rules clearing the acceptance
//! threshold become detections, sorted by confidence descending with ties
//! kept in catalog order.

mod manifest;
mod summary;

pub use manifest::{DependencyIndex, MANIFEST_FILE, MANIFEST_SOURCE, normalize_version};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, SignalKind, TechCategory, TechnologyRule};
use crate::constants::detection::CONFIDENCE_THRESHOLD;
use crate::types::{FetchedFile, LensError, Result};

// =============================================================================
// Output Types
// =============================================================================

/// One classified technology in the final ranked output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub key: String,
    pub display_name: String,
    pub category: TechCategory,
    /// Normalized version from the first matching manifest entry, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Maximum confidence over all matched signals of the rule
    pub confidence: f64,
    /// Deduplicated file/origin labels that produced matches
    pub sources: Vec<String>,
}

/// Terminal output of the pipeline; owned by the caller once returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Descending confidence; ties retain catalog iteration order
    pub detections: Vec<Detection>,
    /// Category-grouped human-readable summary
    pub summary: String,
}

// =============================================================================
// Classification
// =============================================================================

/// Classify a fetched-file set against a rule catalog.
///
/// Fails with [`LensError::NoTechnologiesDetected`] when nothing clears the
/// threshold - callers must distinguish "ran and found nothing" from
/// "could not run".
pub fn classify(files: &[FetchedFile], catalog: &Catalog) -> Result<AnalysisResult> {
    let deps = DependencyIndex::build(files);
    debug!(
        "classifying {} files against {} rules ({} declared dependencies)",
        files.len(),
        catalog.len(),
        deps.len()
    );

    let mut detections: Vec<Detection> = catalog
        .rules()
        .iter()
        .filter_map(|rule| evaluate_rule(rule, files, &deps))
        .collect();

    // Stable sort: equal confidences keep catalog order
    detections.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    if detections.is_empty() {
        return Err(LensError::NoTechnologiesDetected);
    }

    let summary = summary::summarize(&detections);

    Ok(AnalysisResult {
        detections,
        summary,
    })
}

/// Evaluate every signal of one rule against the full file set.
///
/// Returns a detection when the running maximum confidence clears the
/// acceptance threshold.
fn evaluate_rule(
    rule: &TechnologyRule,
    files: &[FetchedFile],
    deps: &DependencyIndex,
) -> Option<Detection> {
    let mut max_confidence: f64 = 0.0;
    let mut sources: Vec<String> = Vec::new();
    let mut version: Option<String> = None;

    for signal in &rule.signals {
        match signal.kind {
            SignalKind::Package => {
                for (dep_name, dep_version) in deps.iter() {
                    if signal.matcher.matches_name(dep_name) {
                        max_confidence = max_confidence.max(signal.confidence);
                        push_source(&mut sources, MANIFEST_SOURCE);
                        if version.is_none() {
                            version = Some(normalize_version(dep_version));
                        }
                    }
                }
            }
            SignalKind::Filename => {
                for file in files {
                    if signal.matcher.matches_exactly(file.file_name()) {
                        max_confidence = max_confidence.max(signal.confidence);
                        push_source(&mut sources, file.file_name());
                    }
                }
            }
            SignalKind::Content => {
                for file in files {
                    // Non-UTF-8 content is skipped; the file stays
                    // eligible for filename signals
                    let Some(text) = file.text() else { continue };
                    if signal.matcher.matches_text(text) {
                        max_confidence = max_confidence.max(signal.confidence);
                        push_source(&mut sources, file.file_name());
                    }
                }
            }
        }
    }

    (max_confidence >= CONFIDENCE_THRESHOLD).then(|| Detection {
        key: rule.key.to_string(),
        display_name: rule.display_name.to_string(),
        category: rule.category,
        version,
        confidence: max_confidence,
        sources,
    })
}

fn push_source(sources: &mut Vec<String>, label: &str) {
    if !sources.iter().any(|s| s == label) {
        sources.push(label.to_string());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Signal;
    use proptest::prelude::*;

    fn file(path: &str, content: &str) -> FetchedFile {
        FetchedFile::new(path, content, format!("mock://{}", path))
    }

    fn find<'a>(result: &'a AnalysisResult, key: &str) -> Option<&'a Detection> {
        result.detections.iter().find(|d| d.key == key)
    }

    // -------------------------------------------------------------------------
    // End-to-end scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_react_via_manifest_with_version() {
        let files = [file(
            "package.json",
            r#"{"dependencies":{"react":"^18.2.0"}}"#,
        )];

        let result = classify(&files, Catalog::builtin()).unwrap();
        let react = find(&result, "react").expect("react detected");

        assert_eq!(react.confidence, 0.95);
        assert_eq!(react.version.as_deref(), Some("18.2.0"));
        assert_eq!(react.sources, vec!["package.json"]);
    }

    #[test]
    fn test_typescript_via_filename_alone() {
        let files = [file("tsconfig.json", "{}")];

        let result = classify(&files, Catalog::builtin()).unwrap();
        let ts = find(&result, "typescript").expect("typescript detected");

        assert_eq!(ts.confidence, 0.95);
        assert_eq!(ts.version, None);
        assert_eq!(ts.sources, vec!["tsconfig.json"]);
    }

    #[test]
    fn test_empty_file_set_detects_nothing() {
        let err = classify(&[], Catalog::builtin()).unwrap_err();
        assert!(matches!(err, LensError::NoTechnologiesDetected));
    }

    #[test]
    fn test_unmatched_files_detect_nothing() {
        let files = [file("mystery.xyz", "nothing recognizable here")];
        let catalog = Catalog::new(vec![TechnologyRule {
            key: "react",
            display_name: "React",
            category: TechCategory::Framework,
            signals: vec![Signal::package("react", 0.95)],
        }]);

        assert!(matches!(
            classify(&files, &catalog).unwrap_err(),
            LensError::NoTechnologiesDetected
        ));
    }

    // -------------------------------------------------------------------------
    // Threshold & aggregation semantics
    // -------------------------------------------------------------------------

    #[test]
    fn test_threshold_boundary_inclusive() {
        let catalog = Catalog::new(vec![
            TechnologyRule {
                key: "at-threshold",
                display_name: "At Threshold",
                category: TechCategory::Tool,
                signals: vec![Signal::file("marker.txt", 0.7)],
            },
            TechnologyRule {
                key: "below-threshold",
                display_name: "Below Threshold",
                category: TechCategory::Tool,
                signals: vec![Signal::file("marker.txt", 0.69)],
            },
        ]);
        let files = [file("marker.txt", "x")];

        let result = classify(&files, &catalog).unwrap();
        assert!(find(&result, "at-threshold").is_some());
        assert!(find(&result, "below-threshold").is_none());
    }

    #[test]
    fn test_confidence_is_maximum_not_sum() {
        let catalog = Catalog::new(vec![TechnologyRule {
            key: "multi",
            display_name: "Multi",
            category: TechCategory::Tool,
            signals: vec![
                Signal::file("a.txt", 0.71),
                Signal::file("b.txt", 0.9),
                Signal::content("weak", 0.75),
            ],
        }]);
        let files = [file("a.txt", "weak"), file("b.txt", "weak")];

        let result = classify(&files, &catalog).unwrap();
        assert_eq!(find(&result, "multi").unwrap().confidence, 0.9);
    }

    #[test]
    fn test_additional_matches_never_lower_confidence() {
        let catalog = Catalog::new(vec![TechnologyRule {
            key: "mono",
            display_name: "Mono",
            category: TechCategory::Tool,
            signals: vec![Signal::file("strong.txt", 0.9), Signal::content("hint", 0.7)],
        }]);

        let base = [file("strong.txt", "")];
        let with_extra = [file("strong.txt", ""), file("notes.md", "hint")];

        let before = classify(&base, &catalog).unwrap();
        let after = classify(&with_extra, &catalog).unwrap();

        let confidence_before = find(&before, "mono").unwrap().confidence;
        let confidence_after = find(&after, "mono").unwrap().confidence;
        assert!(confidence_after >= confidence_before);
        assert!(find(&after, "mono").is_some());
    }

    #[test]
    fn test_sources_deduplicated_across_signals() {
        let catalog = Catalog::new(vec![TechnologyRule {
            key: "both",
            display_name: "Both",
            category: TechCategory::Tool,
            signals: vec![
                Signal::file("setup.cfg", 0.8),
                Signal::content("[metadata]", 0.75),
            ],
        }]);
        // Same file matches the filename signal and the content signal
        let files = [file("setup.cfg", "[metadata]\nname = demo")];

        let result = classify(&files, &catalog).unwrap();
        assert_eq!(find(&result, "both").unwrap().sources, vec!["setup.cfg"]);
    }

    #[test]
    fn test_version_from_first_package_match_only() {
        let catalog = Catalog::new(vec![TechnologyRule {
            key: "redux",
            display_name: "Redux",
            category: TechCategory::Tool,
            signals: vec![
                Signal::package("@reduxjs/toolkit", 0.95),
                Signal::package("redux", 0.95),
            ],
        }]);
        let files = [file(
            "package.json",
            r#"{"dependencies":{"@reduxjs/toolkit":"^2.0.0","redux":"^5.0.1"}}"#,
        )];

        let result = classify(&files, &catalog).unwrap();
        // First signal, first (lexicographic) dependency match wins
        assert_eq!(
            find(&result, "redux").unwrap().version.as_deref(),
            Some("2.0.0")
        );
    }

    #[test]
    fn test_package_literal_matches_substring_names() {
        let files = [file(
            "package.json",
            r#"{"dependencies":{"@types/react":"^18.2.0"}}"#,
        )];

        let result = classify(&files, Catalog::builtin()).unwrap();
        assert!(find(&result, "react").is_some());
    }

    #[test]
    fn test_detection_without_any_manifest() {
        // Filename/content matches alone are legitimate detections
        let files = [file("Dockerfile", "FROM rust:1.92")];

        let result = classify(&files, Catalog::builtin()).unwrap();
        let docker = find(&result, "docker").expect("docker detected");
        assert_eq!(docker.version, None);
        assert_eq!(docker.sources, vec!["Dockerfile"]);
    }

    #[test]
    fn test_malformed_manifest_does_not_abort() {
        let files = [
            file("package.json", "{ definitely not json"),
            file("tsconfig.json", "{}"),
        ];

        let result = classify(&files, Catalog::builtin()).unwrap();
        assert!(find(&result, "typescript").is_some());
    }

    #[test]
    fn test_non_utf8_skipped_for_content_but_not_filename() {
        let catalog = Catalog::new(vec![
            TechnologyRule {
                key: "by-name",
                display_name: "ByName",
                category: TechCategory::Tool,
                signals: vec![Signal::file("blob.bin", 0.9)],
            },
            TechnologyRule {
                key: "by-content",
                display_name: "ByContent",
                category: TechCategory::Tool,
                signals: vec![Signal::content("anything", 0.9)],
            },
        ]);
        let files = [FetchedFile::from_bytes(
            "blob.bin",
            vec![0xff, 0xfe, 0x61, 0x6e],
            "mock://blob.bin",
        )];

        let result = classify(&files, &catalog).unwrap();
        assert!(find(&result, "by-name").is_some());
        assert!(find(&result, "by-content").is_none());
    }

    // -------------------------------------------------------------------------
    // Ordering & determinism
    // -------------------------------------------------------------------------

    #[test]
    fn test_sorted_by_confidence_descending() {
        let catalog = Catalog::new(vec![
            TechnologyRule {
                key: "weaker",
                display_name: "Weaker",
                category: TechCategory::Tool,
                signals: vec![Signal::file("x.txt", 0.8)],
            },
            TechnologyRule {
                key: "stronger",
                display_name: "Stronger",
                category: TechCategory::Tool,
                signals: vec![Signal::file("x.txt", 0.95)],
            },
        ]);
        let files = [file("x.txt", "")];

        let result = classify(&files, &catalog).unwrap();
        assert_eq!(result.detections[0].key, "stronger");
        assert_eq!(result.detections[1].key, "weaker");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            TechnologyRule {
                key: "first",
                display_name: "First",
                category: TechCategory::Tool,
                signals: vec![Signal::file("x.txt", 0.9)],
            },
            TechnologyRule {
                key: "second",
                display_name: "Second",
                category: TechCategory::Tool,
                signals: vec![Signal::file("x.txt", 0.9)],
            },
        ]);
        let files = [file("x.txt", "")];

        let result = classify(&files, &catalog).unwrap();
        assert_eq!(result.detections[0].key, "first");
        assert_eq!(result.detections[1].key, "second");
    }

    #[test]
    fn test_same_file_may_satisfy_multiple_rules() {
        let files = [file(
            "package.json",
            r#"{"dependencies":{"react":"^18.2.0"}}"#,
        )];

        let result = classify(&files, Catalog::builtin()).unwrap();
        // package.json simultaneously satisfies a language rule and the
        // package-manager rule - expected, not deduplicated across rules
        assert!(find(&result, "javascript").is_some());
        assert!(find(&result, "npm").is_some());
        assert!(find(&result, "react").is_some());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let files = [
            file(
                "package.json",
                r#"{"dependencies":{"react":"^18.2.0","next":"14.0.0"},"devDependencies":{"typescript":"^5.2.0"}}"#,
            ),
            file("tsconfig.json", "{}"),
            file("Dockerfile", "FROM node:20"),
        ];

        let first = classify(&files, Catalog::builtin()).unwrap();
        for _ in 0..5 {
            let again = classify(&files, Catalog::builtin()).unwrap();
            assert_eq!(first, again);
        }
    }

    proptest! {
        /// Determinism holds for arbitrary manifest dependency maps
        #[test]
        fn prop_classify_deterministic(
            deps in proptest::collection::btree_map("[a-z@/-]{1,12}", "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", 0..8)
        ) {
            let body = serde_json::json!({ "dependencies": deps }).to_string();
            let files = [FetchedFile::new("package.json", body, "mock://package.json")];

            let first = classify(&files, Catalog::builtin());
            let second = classify(&files, Catalog::builtin());
            match (first, second) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "determinism violated across calls"),
            }
        }
    }

    // -------------------------------------------------------------------------
    // Summary integration
    // -------------------------------------------------------------------------

    #[test]
    fn test_summary_reflects_detected_groups() {
        let files = [file(
            "package.json",
            r#"{"dependencies":{"react":"^18.2.0","pg":"^8.11.0"}}"#,
        )];

        let result = classify(&files, Catalog::builtin()).unwrap();
        assert!(result.summary.contains("React"));
        assert!(result.summary.contains("DB: "));
        assert!(result.summary.contains("PostgreSQL"));
    }
}
