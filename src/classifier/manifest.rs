//! Dependency Manifest Extraction
//!
//! Builds the declared-dependency index package signals match against.
//! Manifests are loosely-typed key/value data (arbitrary dependency names),
//! so parsing goes through `serde_json::Value`, never a fixed struct.
//! A malformed manifest must never abort classification: parse failure is
//! logged and the file contributes nothing.

use std::collections::BTreeMap;

use tracing::warn;

use crate::types::FetchedFile;

/// Filename suffix identifying a dependency manifest
pub const MANIFEST_FILE: &str = "package.json";

/// Source label recorded for every package-signal match
pub const MANIFEST_SOURCE: &str = "package.json";

/// Union of declared dependencies across every parsed manifest.
///
/// Backed by a `BTreeMap` so iteration order (and therefore which
/// dependency is the "first match" for version extraction) is
/// deterministic across runs.
#[derive(Debug, Default)]
pub struct DependencyIndex {
    deps: BTreeMap<String, String>,
}

impl DependencyIndex {
    /// Parse every `package.json` in the file set.
    ///
    /// Within one manifest, direct dependencies win over dev and peer
    /// entries on name conflict. Across manifests, the earlier file (in
    /// candidate order) wins.
    pub fn build(files: &[FetchedFile]) -> Self {
        let mut deps: BTreeMap<String, String> = BTreeMap::new();

        for file in files.iter().filter(|f| f.path.ends_with(MANIFEST_FILE)) {
            let Some(text) = file.text() else {
                warn!("manifest {} is not valid UTF-8, skipping", file.path);
                continue;
            };

            let value: serde_json::Value = match serde_json::from_str(text) {
                Ok(value) => value,
                Err(e) => {
                    warn!("failed to parse manifest {}: {}", file.path, e);
                    continue;
                }
            };

            // Insertion order encodes precedence: direct last, so it
            // overwrites dev/peer entries of the same name.
            let mut local: BTreeMap<String, String> = BTreeMap::new();
            for section in ["peerDependencies", "devDependencies", "dependencies"] {
                let Some(entries) = value.get(section).and_then(|v| v.as_object()) else {
                    continue;
                };
                for (dep_name, dep_version) in entries {
                    if let Some(version) = dep_version.as_str() {
                        local.insert(dep_name.clone(), version.to_string());
                    }
                }
            }

            for (dep_name, version) in local {
                deps.entry(dep_name).or_insert(version);
            }
        }

        Self { deps }
    }

    /// Deterministic (lexicographic) iteration over `(name, version)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.deps.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.deps.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }
}

/// Normalize a manifest version string: strip a leading `^`/`~` range
/// prefix and surrounding whitespace.
pub fn normalize_version(version: &str) -> String {
    let stripped = version
        .strip_prefix(['^', '~'])
        .unwrap_or(version);
    stripped.trim().to_string()
}

// =============================================================================
// Tests
// =============================================================================
