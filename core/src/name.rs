//! Case-insensitive field name comparison.

/// Compare two field names ignoring case.
///
/// Uses full Unicode lower-case mapping, so `"Name"`, `"NAME"` and `"nAmE"` all
/// match `"name"`. Word separators are significant: `first_name` does not match
/// `FirstName`.
pub fn names_match(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
