use std::collections::HashMap;

/// Project area code from a source file name: the third hyphen-separated
/// token, trimmed. Names with fewer than three tokens have no code.
///
/// `"ABC-123-R31-xyz"` yields `"R31"`.
pub fn mpl_code(source_file: Option<&str>) -> String {
    source_file
        .and_then(|name| name.split('-').nth(2))
        .map(|code| code.trim().to_string())
        .unwrap_or_default()
}

/// Code to description lookup for project areas.
pub struct MplResolver {
    descriptions: HashMap<String, String>,
}

impl MplResolver {
    pub fn new(descriptions: HashMap<String, String>) -> Self {
        Self { descriptions }
    }

    /// Description for `code`, empty when the code is unknown.
    pub fn describe(&self, code: &str) -> String {
        self.descriptions.get(code).cloned().unwrap_or_default()
    }

    /// Code and description for a source file name.
    pub fn resolve(&self, source_file: Option<&str>) -> (String, String) {
        let code = mpl_code(source_file);
        let description = self.describe(&code);
        (code, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use takeoff_core::Tables;

    #[test]
    fn third_token_is_the_code() {
        assert_eq!(mpl_code(Some("ABC-123-R31-xyz")), "R31");
        assert_eq!(mpl_code(Some("P1-M-U71 -model.dwg")), "U71");
    }

    #[test]
    fn short_names_have_no_code() {
        assert_eq!(mpl_code(Some("no-hyphens")), "");
        assert_eq!(mpl_code(Some("nohyphens")), "");
        assert_eq!(mpl_code(Some("")), "");
        assert_eq!(mpl_code(None), "");
    }

    #[test]
    fn exactly_three_tokens() {
        assert_eq!(mpl_code(Some("A-B-C")), "C");
        assert_eq!(mpl_code(Some("A-B-")), "");
    }

    #[test]
    fn resolve_known_and_unknown_codes() {
        let r = MplResolver::new(Tables::default().mpl);
        assert_eq!(
            r.resolve(Some("PRJ-01-R31-0001")),
            ("R31".to_string(), "Cable and Raceway System".to_string())
        );
        assert_eq!(r.resolve(Some("PRJ-01-ZZZ-0001")), ("ZZZ".to_string(), String::new()));
        assert_eq!(r.resolve(None), (String::new(), String::new()));
    }

    #[test]
    fn resolve_is_repeatable() {
        let r = MplResolver::new(Tables::default().mpl);
        let first = r.resolve(Some("PRJ-01-U71-0001.dwg"));
        assert_eq!(r.resolve(Some("PRJ-01-U71-0001.dwg")), first);
        assert_eq!(first.0, "U71");
    }
}
