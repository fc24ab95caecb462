use std::collections::HashSet;

use takeoff_core::{Category, KeywordRule};

use crate::util::normalize;

/// A normalized keyword paired with the category it selects.
struct IndexedKeyword {
    keyword: String,
    category: Category,
}

/// Inverted index from normalized keyword to category, built once from a
/// rule table.
///
/// Matching is a plain substring test on normalized text. When several
/// keywords occur in the text, the longest normalized keyword wins. Keywords
/// of equal length are tried in registration order (rule order, then keyword
/// order within a rule), so the earliest registered one wins a tie.
pub struct KeywordMatcher {
    // Longest first; the sort is stable so ties keep registration order.
    keywords: Vec<IndexedKeyword>,
}

impl KeywordMatcher {
    pub fn new(rules: &[KeywordRule]) -> Self {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        for rule in rules {
            let category = rule.category();
            for keyword in &rule.keywords {
                let keyword = normalize(keyword);
                // The first rule to register a keyword keeps it.
                if keyword.is_empty() || !seen.insert(keyword.clone()) {
                    continue;
                }
                keywords.push(IndexedKeyword {
                    keyword,
                    category: category.clone(),
                });
            }
        }
        keywords.sort_by_key(|k| std::cmp::Reverse(k.keyword.chars().count()));
        Self { keywords }
    }

    /// Returns the category of the most specific keyword found in `text`, or
    /// the empty category when `text` is absent, blank or matches nothing.
    pub fn classify(&self, text: Option<&str>) -> Category {
        self.find(text).cloned().unwrap_or_default()
    }

    pub fn find(&self, text: Option<&str>) -> Option<&Category> {
        let text = normalize(text?);
        if text.is_empty() {
            return None;
        }
        self.keywords
            .iter()
            .find(|k| text.contains(&k.keyword))
            .map(|k| &k.category)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use takeoff_core::default_keyword_rules;

    fn make_rule(description: &str, code: &str, keywords: &[&str]) -> KeywordRule {
        KeywordRule::new(description, code, "EA", keywords)
    }

    #[test]
    fn whitespace_and_case_are_ignored() {
        let m = KeywordMatcher::new(&[make_rule("Anchor Bolts", "61.30.02", &["Anchor Bolt"])]);
        assert_eq!(m.classify(Some("Anchor   Bolt")).code, "61.30.02");
        assert_eq!(m.classify(Some("ANCHOR\tBOLT M20")).code, "61.30.02");
    }

    #[test]
    fn longest_keyword_wins_regardless_of_rule_order() {
        let m = KeywordMatcher::new(&[
            make_rule("Curtain Wall", "95.83.08.006.04", &["Curtain Wall"]),
            make_rule("Building Openings", "95.83.08", &["Curtain Wall Mullions"]),
        ]);
        let c = m.classify(Some("Curtain Wall Mullions Type A"));
        assert_eq!(c.description, "Building Openings");
        assert_eq!(m.classify(Some("Curtain Wall Type A")).description, "Curtain Wall");
    }

    #[test]
    fn empty_or_absent_text_is_empty_category() {
        let m = KeywordMatcher::new(&default_keyword_rules());
        assert_eq!(m.classify(Some("")), Category::empty());
        assert_eq!(m.classify(Some("   ")), Category::empty());
        assert_eq!(m.classify(None), Category::empty());
    }

    #[test]
    fn no_match_is_empty_category() {
        let m = KeywordMatcher::new(&[make_rule("Stairs", "62.18.04", &["Stair"])]);
        assert!(m.classify(Some("Roof Drain")).is_empty());
    }

    #[test]
    fn first_registration_of_duplicate_keyword_is_kept() {
        let m = KeywordMatcher::new(&[
            make_rule("First", "1", &["Grout"]),
            make_rule("Second", "2", &["grout"]),
        ]);
        assert_eq!(m.len(), 1);
        assert_eq!(m.classify(Some("Plate Grout")).code, "1");
    }

    #[test]
    fn equal_length_tie_goes_to_earliest_registration() {
        let m = KeywordMatcher::new(&[
            make_rule("Doors", "83.08.02", &["Doors"]),
            make_rule("Grate", "62.18.14", &["Grate"]),
        ]);
        assert_eq!(m.classify(Some("Grate Doors")).code, "83.08.02");
    }

    #[test]
    fn length_is_counted_in_characters() {
        // "ØØ" is four bytes but two characters, so "abc" is the longer keyword.
        let m = KeywordMatcher::new(&[
            make_rule("Diameter", "1", &["ØØ"]),
            make_rule("Letters", "2", &["abc"]),
        ]);
        assert_eq!(m.classify(Some("ØØ abc")).code, "2");
    }

    #[test]
    fn duplicate_table_entries_keep_the_later_keywords() {
        let m = KeywordMatcher::new(&default_keyword_rules());
        assert!(m.classify(Some("VAV Box 12")).is_empty());
        assert!(m.classify(Some("K-Roc panel")).is_empty());
        assert_eq!(m.classify(Some("AHU-01")).code, "83.23.42");
        assert_eq!(m.classify(Some("Curtain Wall Type A")).code, "95.83.08.006.04");
    }

    #[test]
    fn blank_keywords_are_not_indexed() {
        let m = KeywordMatcher::new(&[make_rule("Blank", "0", &["", "  "])]);
        assert!(m.is_empty());
        assert!(m.classify(Some("anything")).is_empty());
    }

    #[test]
    fn default_table_prefers_specific_entries() {
        let m = KeywordMatcher::new(&default_keyword_rules());
        assert_eq!(
            m.classify(Some("Curtain Wall Mullions: Rectangular")).code,
            "95.83.08"
        );
        assert_eq!(m.classify(Some("Anchor Bolt")).description, "Anchor Bolts");
        assert_eq!(m.classify(Some("Fan coil unit")).code, "83.23.24");
    }

    #[test]
    fn classify_is_repeatable() {
        let m = KeywordMatcher::new(&default_keyword_rules());
        let a = m.classify(Some("Structural Framing: W12x26"));
        let b = m.classify(Some("Structural Framing: W12x26"));
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }
}
