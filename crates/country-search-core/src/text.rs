// crates/country-search-core/src/text.rs

/// Fold a string into the form used for name matching.
///
/// This is plain Unicode lower-casing. There is deliberately no trimming,
/// no transliteration and no accent stripping: `"Åland"` only matches
/// queries containing `"å"`.
///
/// # Examples
///
/// ```rust
/// use country_search_core::text::fold_case;
///
/// assert_eq!(fold_case("FRANCE"), "france");
/// assert_eq!(fold_case("Åland Islands"), "åland islands");
/// assert_eq!(fold_case(" fra "), " fra ");
/// ```
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Returns `true` if `haystack` contains an already folded `needle`.
///
/// Callers fold the query once and reuse it across a whole record set.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold_case(haystack).contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_everything() {
        assert!(contains_folded("", ""));
        assert!(contains_folded("Peru", ""));
    }

    #[test]
    fn no_accent_folding() {
        assert!(!contains_folded("Curaçao", "curacao"));
        assert!(contains_folded("Curaçao", "çao"));
    }

    #[test]
    fn whitespace_is_significant() {
        assert!(!contains_folded("France", " fra"));
        assert!(contains_folded("South Africa", "h a"));
    }
}
