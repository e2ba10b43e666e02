//! Technology Rule Catalog
//!
//! **Single source of truth** for technology signatures. The catalog is a
//! declarative table mapping technology keys to rules; each rule carries an
//! ordered list of signals (dependency-name, filename, or content tests)
//! with hand-tuned confidences.
//!
//! The catalog is plain data over a fixed schema: growing it means adding
//! entries in [`rules`], never touching the matching engine. It is
//! constructed explicitly and passed into the classifier rather than read
//! as ambient global state.

mod rules;

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Technology Category
// =============================================================================

/// Category a detected technology is grouped under in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Language,
    Framework,
    Auth,
    #[serde(rename = "db")]
    Database,
    Infra,
    Tool,
}

impl TechCategory {
    /// Fixed ordering used when grouping detections into the summary
    pub const ALL: &[TechCategory] = &[
        TechCategory::Language,
        TechCategory::Framework,
        TechCategory::Auth,
        TechCategory::Database,
        TechCategory::Infra,
        TechCategory::Tool,
    ];
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TechCategory::Language => write!(f, "language"),
            TechCategory::Framework => write!(f, "framework"),
            TechCategory::Auth => write!(f, "auth"),
            TechCategory::Database => write!(f, "db"),
            TechCategory::Infra => write!(f, "infra"),
            TechCategory::Tool => write!(f, "tool"),
        }
    }
}

// =============================================================================
// Matcher
// =============================================================================

/// One atomic test: a literal string or a compiled pattern.
///
/// Matching semantics depend on the signal kind; see the `matches_*`
/// methods for the exact rules each kind uses.
#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(&'static str),
    Pattern(Regex),
}

impl Matcher {
    /// Exact-equality matching (filename signals): literals must equal the
    /// candidate, patterns use a regex match
    pub fn matches_exactly(&self, candidate: &str) -> bool {
        match self {
            Matcher::Literal(lit) => candidate == *lit,
            Matcher::Pattern(re) => re.is_match(candidate),
        }
    }

    /// Name matching (package signals): literals match by exact-name or
    /// substring-name equality, patterns use a regex match
    pub fn matches_name(&self, candidate: &str) -> bool {
        match self {
            Matcher::Literal(lit) => candidate == *lit || candidate.contains(lit),
            Matcher::Pattern(re) => re.is_match(candidate),
        }
    }

    /// Free-text matching (content signals): literals match by substring,
    /// patterns use a regex match
    pub fn matches_text(&self, text: &str) -> bool {
        match self {
            Matcher::Literal(lit) => text.contains(lit),
            Matcher::Pattern(re) => re.is_match(text),
        }
    }
}

// =============================================================================
// Signal
// =============================================================================

/// Where a signal looks for its match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Declared dependency names in parsed manifests
    Package,
    /// Final path segment of every fetched file
    Filename,
    /// Full text content of every fetched file
    Content,
}

/// One weighted test contributing to a technology's confidence
#[derive(Debug, Clone)]
pub struct Signal {
    pub kind: SignalKind,
    pub matcher: Matcher,
    /// Static confidence in (0, 1]; per-rule aggregation takes the maximum
    pub confidence: f64,
}

impl Signal {
    pub fn package(name: &'static str, confidence: f64) -> Self {
        Self {
            kind: SignalKind::Package,
            matcher: Matcher::Literal(name),
            confidence,
        }
    }

    pub fn file(name: &'static str, confidence: f64) -> Self {
        Self {
            kind: SignalKind::Filename,
            matcher: Matcher::Literal(name),
            confidence,
        }
    }

    pub fn file_pattern(pattern: &str, confidence: f64) -> Self {
        Self {
            kind: SignalKind::Filename,
            matcher: Matcher::Pattern(compile(pattern)),
            confidence,
        }
    }

    pub fn content(needle: &'static str, confidence: f64) -> Self {
        Self {
            kind: SignalKind::Content,
            matcher: Matcher::Literal(needle),
            confidence,
        }
    }

    pub fn content_pattern(pattern: &str, confidence: f64) -> Self {
        Self {
            kind: SignalKind::Content,
            matcher: Matcher::Pattern(compile(pattern)),
            confidence,
        }
    }
}

/// All catalog patterns are static literals validated by the catalog tests
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("catalog pattern is valid")
}

// =============================================================================
// Technology Rule
// =============================================================================

/// One technology signature: unique key, display name, category, and the
/// ordered signals evaluated against the fetched file set
#[derive(Debug, Clone)]
pub struct TechnologyRule {
    pub key: &'static str,
    pub display_name: &'static str,
    pub category: TechCategory,
    pub signals: Vec<Signal>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, immutable collection of technology rules.
///
/// Iteration order is part of the contract: classification ties are broken
/// by catalog order, so results stay deterministic.
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<TechnologyRule>,
}

impl Catalog {
    /// Build a catalog from explicit rules. Keys must be unique.
    pub fn new(rules: Vec<TechnologyRule>) -> Self {
        debug_assert!(
            {
                let mut seen = HashSet::new();
                rules.iter().all(|r| seen.insert(r.key))
            },
            "catalog keys must be unique"
        );
        Self { rules }
    }

    /// The full built-in rule table, built once and shared
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(rules::builtin_rules()))
    }

    pub fn rules(&self) -> &[TechnologyRule] {
        &self.rules
    }

    pub fn get(&self, key: &str) -> Option<&TechnologyRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_unique() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for rule in catalog.rules() {
            assert!(seen.insert(rule.key), "duplicate catalog key: {}", rule.key);
        }
    }

    #[test]
    fn test_builtin_confidences_in_range() {
        for rule in Catalog::builtin().rules() {
            assert!(!rule.signals.is_empty(), "rule {} has no signals", rule.key);
            for signal in &rule.signals {
                assert!(
                    signal.confidence > 0.0 && signal.confidence <= 1.0,
                    "rule {} has out-of-range confidence {}",
                    rule.key,
                    signal.confidence
                );
            }
        }
    }

    #[test]
    fn test_builtin_display_names_nonempty() {
        for rule in Catalog::builtin().rules() {
            assert!(!rule.display_name.is_empty(), "rule {} unnamed", rule.key);
        }
    }

    #[test]
    fn test_builtin_covers_core_stacks() {
        let catalog = Catalog::builtin();
        for key in [
            "typescript",
            "react",
            "nextjs",
            "postgres",
            "docker",
            "jest",
            "kubernetes",
        ] {
            assert!(catalog.get(key).is_some(), "missing builtin rule: {}", key);
        }
    }

    #[test]
    fn test_matcher_exact_vs_name_vs_text() {
        let lit = Matcher::Literal("react");
        assert!(lit.matches_exactly("react"));
        assert!(!lit.matches_exactly("react-dom"));
        assert!(lit.matches_name("react-dom"));
        assert!(lit.matches_text("imports react somewhere"));

        let pat = Matcher::Pattern(Regex::new(r"vite\.config\.(js|ts|mjs)$").unwrap());
        assert!(pat.matches_exactly("vite.config.ts"));
        assert!(!pat.matches_exactly("vite.config.rb"));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TechCategory::Database.to_string(), "db");
        assert_eq!(TechCategory::Language.to_string(), "language");
    }

    #[test]
    fn test_category_serde_roundtrip() {
        let json = serde_json::to_string(&TechCategory::Database).unwrap();
        assert_eq!(json, "\"db\"");
        let parsed: TechCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TechCategory::Database);
    }
}
