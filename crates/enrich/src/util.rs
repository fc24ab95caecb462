/// Lowercases `s` and removes every whitespace character, including interior
/// ones, so that "Anchor   Bolt" and "anchorbolt" compare equal.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Trimmed, uppercased form used for case-insensitive table keys.
pub fn fold_key(s: &str) -> String {
    s.trim().to_uppercase()
}
