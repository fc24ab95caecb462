use serde::{Deserialize, Serialize};
use std::fmt;

/// The classification assigned to a takeoff item: account description,
/// account code and unit of measure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub description: String,
    pub code: String,
    pub unit: String,
}

impl Category {
    pub fn new(description: &str, code: &str, unit: &str) -> Self {
        Category {
            description: description.to_string(),
            code: code.to_string(),
            unit: unit.to_string(),
        }
    }

    /// The `("", "", "")` result used when nothing matched.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.code.is_empty() && self.unit.is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] ({})", self.description, self.code, self.unit)
    }
}

/// A category plus the free-text keywords that select it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub description: String,
    pub code: String,
    pub unit: String,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(description: &str, code: &str, unit: &str, keywords: &[&str]) -> Self {
        KeywordRule {
            description: description.to_string(),
            code: code.to_string(),
            unit: unit.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn category(&self) -> Category {
        Category::new(&self.description, &self.code, &self.unit)
    }
}

/// The built-in keyword table in registration order.
pub fn default_keyword_rules() -> Vec<KeywordRule> {
    crate::tables::DEFAULT_KEYWORD_RULES
        .iter()
        .map(|(description, code, unit, keywords)| {
            KeywordRule::new(description, code, unit, keywords)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_category_is_three_blanks() {
        let c = Category::empty();
        assert!(c.is_empty());
        assert_eq!(c, Category::new("", "", ""));
    }

    #[test]
    fn default_rules_keep_table_order() {
        let rules = default_keyword_rules();
        assert_eq!(
            rules[0].description,
            "Building HVAC - Grills and Diffuser Installation"
        );
        assert!(rules.iter().all(|r| !r.keywords.is_empty()));
    }

    #[test]
    fn default_rules_have_unique_categories() {
        let rules = default_keyword_rules();
        let mut seen = std::collections::HashSet::new();
        for r in &rules {
            assert!(seen.insert(r.category()), "{} listed twice", r.category());
        }
    }

    #[test]
    fn display_includes_code_and_unit() {
        let c = Category::new("Anchor Bolts", "61.30.02", "Ea");
        assert_eq!(c.to_string(), "Anchor Bolts [61.30.02] (Ea)");
    }
}
