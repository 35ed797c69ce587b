//! Curatorial departments and the selectable catalog built from them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sentinel option meaning "no department filter".
///
/// Always the first selectable entry; maps to `None`.
pub const ALL_DEPARTMENTS: &str = "All Departments";

/// A curatorial department as returned by the remote catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Remote identifier, the department's identity
    pub department_id: u32,
    /// Human-readable name
    pub display_name: String,
}

impl Department {
    /// Unique selectable label, `"<displayName> (<departmentId>)"`.
    ///
    /// Labels are generated, so they are unique within one catalog
    /// fetch (ids are unique remotely).
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.department_id)
    }
}

/// The label -> department-id lookup offered to the user.
///
/// Entry 0 is always [`ALL_DEPARTMENTS`], mapping to `None`. The
/// remaining options keep the remote catalog's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCatalog {
    options: Vec<String>,
    mapping: HashMap<String, Option<u32>>,
}

impl DepartmentCatalog {
    /// The one-entry catalog used when the remote list is unavailable.
    #[must_use]
    pub fn fallback() -> Self {
        let mut mapping = HashMap::new();
        mapping.insert(ALL_DEPARTMENTS.to_string(), None);
        Self {
            options: vec![ALL_DEPARTMENTS.to_string()],
            mapping,
        }
    }

    /// Build a catalog from a fetched department list, sentinel first.
    #[must_use]
    pub fn from_departments(departments: &[Department]) -> Self {
        let mut catalog = Self::fallback();
        for department in departments {
            let label = department.label();
            catalog.options.push(label.clone());
            catalog.mapping.insert(label, Some(department.department_id));
        }
        catalog
    }

    /// Selectable labels in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Resolve a label to its filter value.
    ///
    /// Returns `Some(None)` for the sentinel, `Some(Some(id))` for a
    /// department label, and `None` for an unknown label.
    #[must_use]
    pub fn resolve(&self, label: &str) -> Option<Option<u32>> {
        self.mapping.get(label).copied()
    }

    /// Whether this is the degraded sentinel-only catalog.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.options.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_departments() -> Vec<Department> {
        vec![
            Department {
                department_id: 1,
                display_name: "American Decorative Arts".to_string(),
            },
            Department {
                department_id: 6,
                display_name: "Asian Art".to_string(),
            },
        ]
    }

    #[test]
    fn test_label_format() {
        let department = Department {
            department_id: 11,
            display_name: "European Paintings".to_string(),
        };
        assert_eq!(department.label(), "European Paintings (11)");
    }

    #[test]
    fn test_catalog_sentinel_first_and_order_preserved() {
        let catalog = DepartmentCatalog::from_departments(&sample_departments());
        assert_eq!(
            catalog.options(),
            &[
                "All Departments".to_string(),
                "American Decorative Arts (1)".to_string(),
                "Asian Art (6)".to_string(),
            ]
        );
        assert!(!catalog.is_fallback());
    }

    #[test]
    fn test_catalog_resolution() {
        let catalog = DepartmentCatalog::from_departments(&sample_departments());
        assert_eq!(catalog.resolve(ALL_DEPARTMENTS), Some(None));
        assert_eq!(catalog.resolve("Asian Art (6)"), Some(Some(6)));
        assert_eq!(catalog.resolve("No Such Department"), None);
    }

    #[test]
    fn test_fallback_catalog() {
        let catalog = DepartmentCatalog::fallback();
        assert!(catalog.is_fallback());
        assert_eq!(catalog.options(), &[ALL_DEPARTMENTS.to_string()]);
        assert_eq!(catalog.resolve(ALL_DEPARTMENTS), Some(None));
    }
}
