// Keyword matcher — plain substring containment, first hit wins.
//
// Matching is deliberately not word-boundary aware: "cut" hits inside
// "biscuit" and "lock" inside "locksmith". Queries are expected to be
// normalized with `normalize_query` first; the matcher itself never
// transforms its input.

use tracing::debug;

use super::table::{Category, CategoryTable};

/// Which table row and keyword produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    pub category: Category,
    pub keyword: &'a str,
}

/// Lowercase a raw query. No trimming and no punctuation stripping, since
/// substring matching is sensitive to both.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// Find the first keyword of the first category (in table order) that occurs
/// anywhere in `query`.
pub fn find_match<'a>(query: &str, table: &CategoryTable<'a>) -> Option<KeywordMatch<'a>> {
    if query.is_empty() {
        return None;
    }

    for (category, keywords) in table.entries() {
        if let Some(&keyword) = keywords.iter().find(|kw| query.contains(**kw)) {
            debug!(category = %category, keyword, "keyword match");
            return Some(KeywordMatch {
                category: *category,
                keyword,
            });
        }
    }

    None
}

/// Category routed to by the first matching keyword, if any.
pub fn match_category(query: &str, table: &CategoryTable<'_>) -> Option<Category> {
    find_match(query, table).map(|m| m.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::table::SERVICE_TABLE;

    #[test]
    fn test_normalize_only_lowercases() {
        assert_eq!(normalize_query("  My FAN!  "), "  my fan!  ");
        assert_eq!(normalize_query(""), "");
    }

    #[test]
    fn test_empty_query_never_matches() {
        assert_eq!(match_category("", &SERVICE_TABLE), None);
    }

    #[test]
    fn test_reports_triggering_keyword() {
        let m = find_match("the ceiling fan hums", &SERVICE_TABLE).unwrap();
        assert_eq!(m.category, Category::Electrician);
        assert_eq!(m.keyword, "fan");
    }

    #[test]
    fn test_keyword_list_order_within_category() {
        // "paint" is listed before "wall", so it wins even though "wall"
        // comes first in the text.
        let m = find_match("wall painter", &SERVICE_TABLE).unwrap();
        assert_eq!(m.category, Category::Painter);
        assert_eq!(m.keyword, "paint");
    }

    #[test]
    fn test_uppercase_keyword_text_needs_normalization() {
        assert_eq!(match_category("FAN", &SERVICE_TABLE), None);
        assert_eq!(
            match_category(&normalize_query("FAN"), &SERVICE_TABLE),
            Some(Category::Electrician)
        );
    }
}
