//! Summary Formatting
//!
//! Renders the detection list as one human-readable line, grouped by
//! category in a fixed order. Languages read as a plain list, frameworks
//! as a `+`-joined stack, and the remaining categories get a short label.

use super::Detection;
use crate::catalog::TechCategory;

/// Build the category-grouped summary string.
///
/// Detections are expected in their final (confidence-sorted) order; group
/// members keep that order.
pub(super) fn summarize(detections: &[Detection]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for category in TechCategory::ALL {
        let names: Vec<&str> = detections
            .iter()
            .filter(|d| d.category == *category)
            .map(|d| d.display_name.as_str())
            .collect();

        if names.is_empty() {
            continue;
        }

        let part = match category {
            TechCategory::Language => names.join(", "),
            TechCategory::Framework => names.join(" + "),
            TechCategory::Auth => format!("Auth: {}", names.join(", ")),
            TechCategory::Database => format!("DB: {}", names.join(", ")),
            TechCategory::Infra => format!("Infra: {}", names.join(", ")),
            TechCategory::Tool => format!("Observability: {}", names.join(", ")),
        };
        parts.push(part);
    }

    parts.join("; ")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(key: &str, name: &str, category: TechCategory) -> Detection {
        Detection {
            key: key.to_string(),
            display_name: name.to_string(),
            category,
            version: None,
            confidence: 0.95,
            sources: vec![],
        }
    }

    #[test]
    fn test_summarize_joins_groups() {
        let detections = vec![
            detection("typescript", "TypeScript", TechCategory::Language),
            detection("javascript", "JavaScript", TechCategory::Language),
            detection("react", "React", TechCategory::Framework),
            detection("nextjs", "Next.js", TechCategory::Framework),
            detection("clerk", "Clerk", TechCategory::Auth),
            detection("postgres", "PostgreSQL", TechCategory::Database),
            detection("docker", "Docker", TechCategory::Infra),
            detection("sentry", "Sentry", TechCategory::Tool),
        ];

        assert_eq!(
            summarize(&detections),
            "TypeScript, JavaScript; React + Next.js; Auth: Clerk; \
             DB: PostgreSQL; Infra: Docker; Observability: Sentry"
        );
    }

    #[test]
    fn test_summarize_skips_empty_groups() {
        let detections = vec![
            detection("react", "React", TechCategory::Framework),
            detection("prisma", "Prisma", TechCategory::Database),
        ];

        assert_eq!(summarize(&detections), "React; DB: Prisma");
    }

    #[test]
    fn test_summarize_single_group() {
        let detections = vec![detection("typescript", "TypeScript", TechCategory::Language)];
        assert_eq!(summarize(&detections), "TypeScript");
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), "");
    }
}
