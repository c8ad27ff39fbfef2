/// Canonical form of a keyword: lowercased and trimmed.
///
/// Every keyword must pass through here before being used as a map key.
#[inline]
pub fn normalize_keyword(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}
