//! Product features advertised on the landing page.

use serde::Serialize;

/// A product feature card.
///
/// `icon` is a Bootstrap Icons class name (e.g. `bi-puzzle`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Feature {
    /// The four features shown on the landing page, in display order.
    pub fn catalog() -> [Feature; 4] {
        [
            Feature {
                title: "Intuitive builder",
                description: "Build striking dashboards without writing a single line of code.",
                icon: "bi-puzzle",
            },
            Feature {
                title: "Support for many databases",
                description: "Connect to any data source: PostgreSQL, MySQL, MongoDB and more.",
                icon: "bi-hdd-stack",
            },
            Feature {
                title: "Rich visualization library",
                description: "More than 50 chart types, from simple bars to complex geo maps.",
                icon: "bi-bar-chart-line",
            },
            Feature {
                title: "Enterprise-grade security",
                description: "Fine-grained access control and a full audit trail of user actions.",
                icon: "bi-shield-check",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_complete_entries() {
        let features = Feature::catalog();

        assert_eq!(features.len(), 4);
        for feature in &features {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
            assert!(feature.icon.starts_with("bi-"));
        }
    }

    #[test]
    fn test_catalog_order() {
        let icons: Vec<_> = Feature::catalog().iter().map(|f| f.icon).collect();
        assert_eq!(
            icons,
            ["bi-puzzle", "bi-hdd-stack", "bi-bar-chart-line", "bi-shield-check"]
        );
    }
}
