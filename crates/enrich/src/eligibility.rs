use std::fmt;

use takeoff_core::{IdentifierRule, Profile, Row};

use crate::util::normalize;

/// Why a row was left out of enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The header has none of the identifier columns.
    MissingIdentifierColumn,
    /// No identifier value is present.
    BlankIdentifier,
    /// Both identifiers of an exclusive pair are filled in.
    AmbiguousIdentifier,
    /// The item type contains an excluded substring.
    ExcludedItemType(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingIdentifierColumn => write!(f, "no identifier column"),
            SkipReason::BlankIdentifier => write!(f, "blank identifier"),
            SkipReason::AmbiguousIdentifier => write!(f, "both identifiers set"),
            SkipReason::ExcludedItemType(s) => write!(f, "item type matches '{s}'"),
        }
    }
}

/// Decides whether a row takes part in enrichment.
pub struct Eligibility {
    rule: IdentifierRule,
    item_type_column: String,
    skip_list: Vec<String>,
}

impl Eligibility {
    pub fn new(profile: &Profile) -> Self {
        Self {
            rule: profile.identifiers.clone(),
            item_type_column: profile.columns.item_type.clone(),
            skip_list: profile
                .skip_list
                .iter()
                .map(|s| normalize(s))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn should_skip<S: AsRef<str>>(&self, row: &Row, fieldnames: &[S]) -> bool {
        self.skip_reason(row, fieldnames).is_some()
    }

    /// `fieldnames` is the header of the table the row came from; a column
    /// missing from the header counts as absent even if the row carries it.
    pub fn skip_reason<S: AsRef<str>>(&self, row: &Row, fieldnames: &[S]) -> Option<SkipReason> {
        let has_column = |name: &str| fieldnames.iter().any(|f| f.as_ref() == name);
        let filled = |name: &str| has_column(name) && row.get_non_blank(name).is_some();

        match &self.rule {
            IdentifierRule::Single { column } => {
                if !has_column(column) {
                    return Some(SkipReason::MissingIdentifierColumn);
                }
                if !filled(column) {
                    return Some(SkipReason::BlankIdentifier);
                }
            }
            IdentifierRule::Exclusive { primary, secondary } => {
                if !has_column(primary) && !has_column(secondary) {
                    return Some(SkipReason::MissingIdentifierColumn);
                }
                match (filled(primary), filled(secondary)) {
                    (false, false) => return Some(SkipReason::BlankIdentifier),
                    (true, true) => return Some(SkipReason::AmbiguousIdentifier),
                    _ => {}
                }
            }
        }

        let item_type = normalize(row.get(&self.item_type_column).unwrap_or_default());
        if item_type.is_empty() {
            return None;
        }
        self.skip_list
            .iter()
            .find(|s| item_type.contains(s.as_str()))
            .map(|s| SkipReason::ExcludedItemType(s.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    fn headers(row: &Row) -> Vec<String> {
        row.iter().map(|(k, _)| k.to_string()).collect()
    }

    fn columns_filter() -> Eligibility {
        Eligibility::new(&Profile::columns())
    }

    fn pipes_filter() -> Eligibility {
        Eligibility::new(&Profile::pipes())
    }

    // ── single identifier ─────────────────────────────────────────────────────

    #[test]
    fn single_missing_column_is_skipped() {
        let row = make_row(&[("ItemType", "Pipe")]);
        assert_eq!(
            pipes_filter().skip_reason(&row, &headers(&row)),
            Some(SkipReason::MissingIdentifierColumn)
        );
    }

    #[test]
    fn single_blank_value_is_skipped() {
        let row = make_row(&[("EntityHandle", "  "), ("ItemType", "Pipe")]);
        assert_eq!(
            pipes_filter().skip_reason(&row, &headers(&row)),
            Some(SkipReason::BlankIdentifier)
        );
    }

    #[test]
    fn single_present_value_is_kept() {
        let row = make_row(&[("EntityHandle", "1A2F"), ("ItemType", "Pipe")]);
        assert!(!pipes_filter().should_skip(&row, &headers(&row)));
    }

    // ── exclusive identifiers ─────────────────────────────────────────────────

    #[test]
    fn exclusive_requires_one_column() {
        let row = make_row(&[("ItemType", "Doors")]);
        assert_eq!(
            columns_filter().skip_reason(&row, &headers(&row)),
            Some(SkipReason::MissingIdentifierColumn)
        );
    }

    #[test]
    fn exclusive_both_blank_is_skipped() {
        let row = make_row(&[("EntityHandle", ""), ("ElementIDValue", " "), ("ItemType", "Doors")]);
        assert_eq!(
            columns_filter().skip_reason(&row, &headers(&row)),
            Some(SkipReason::BlankIdentifier)
        );
    }

    #[test]
    fn exclusive_both_set_is_skipped() {
        let row = make_row(&[
            ("EntityHandle", "1A"),
            ("ElementIDValue", "42"),
            ("ItemType", "Doors"),
        ]);
        assert_eq!(
            columns_filter().skip_reason(&row, &headers(&row)),
            Some(SkipReason::AmbiguousIdentifier)
        );
    }

    #[test]
    fn exclusive_exactly_one_is_kept() {
        let row = make_row(&[("ElementIDValue", "42"), ("ItemType", "Doors")]);
        assert!(!columns_filter().should_skip(&row, &headers(&row)));
        let row = make_row(&[("EntityHandle", "1A"), ("ElementIDValue", ""), ("ItemType", "Doors")]);
        assert!(!columns_filter().should_skip(&row, &headers(&row)));
    }

    // ── skip list ─────────────────────────────────────────────────────────────

    #[test]
    fn skip_list_matches_normalized_item_type() {
        let row = make_row(&[("ElementIDValue", "42"), ("ItemType", "Grids : Grid 1")]);
        assert_eq!(
            columns_filter().skip_reason(&row, &headers(&row)),
            Some(SkipReason::ExcludedItemType("grids:grid".to_string()))
        );
        let row = make_row(&[("ElementIDValue", "42"), ("ItemType", "North Arrow")]);
        assert!(columns_filter().should_skip(&row, &headers(&row)));
    }

    #[test]
    fn blank_item_type_is_not_excluded() {
        let row = make_row(&[("ElementIDValue", "42"), ("ItemType", "")]);
        assert!(!columns_filter().should_skip(&row, &headers(&row)));
    }

    #[test]
    fn skip_list_applies_to_single_convention_too() {
        let mut profile = Profile::pipes();
        profile.skip_list = vec!["Pipe Fittings:".to_string()];
        let filter = Eligibility::new(&profile);
        let row = make_row(&[("EntityHandle", "1A"), ("ItemType", "Pipe Fittings: Elbow")]);
        assert!(filter.should_skip(&row, &headers(&row)));
    }

    #[test]
    fn header_decides_column_presence() {
        let row = make_row(&[("EntityHandle", "1A"), ("ItemType", "Pipe")]);
        let header = vec!["ItemType".to_string()];
        assert_eq!(
            pipes_filter().skip_reason(&row, &header),
            Some(SkipReason::MissingIdentifierColumn)
        );
    }
}
