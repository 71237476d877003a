//! Two-phase recipe search.
//!
//! Phase one runs in the store as a `LIKE` match on case-folded columns.
//! Phase two re-scans every recipe with a Unicode-aware, case-insensitive
//! literal matcher whenever phase one yields fewer than [`FALLBACK_THRESHOLD`]
//! hits, and the two result sets are merged by `recipe_id`. The fallback covers
//! stores whose pattern operator folds case incompletely (SQLite's built-in
//! `lower()` and `LIKE` only fold ASCII).

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::error::SearchError;

/// Phase one result count below which the full fallback scan runs.
pub const FALLBACK_THRESHOLD: usize = 5;

/// Escape character used in phase one `LIKE ... ESCAPE` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// A record that can take part in recipe search.
pub trait Searchable {
    fn recipe_id(&self) -> i32;
    fn dish_name(&self) -> &str;
    fn description(&self) -> Option<&str>;
}

pub fn normalize_query(raw: &str) -> &str {
    raw.trim()
}

/// Lower-cases `text` one character at a time and folds final sigma `ς` to `σ`.
///
/// `str::to_lowercase` picks `ς` or `σ` for `Σ` depending on the next
/// character, so a folded query could miss inside folded text where the
/// fallback regex still matches. The store applies this same function to both
/// columns in phase one.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

/// Builds the phase one `LIKE` pattern: case-folded with [`fold_case`],
/// wildcards escaped, wrapped in `%` so the query matches as a contiguous
/// substring.
///
/// An empty query yields `%%`, which matches every non-null value.
pub fn like_pattern(query: &str) -> String {
    let folded = fold_case(query);
    let mut pattern = String::with_capacity(folded.len() + 2);
    pattern.push('%');
    for c in folded.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive literal substring matcher used by the fallback scan.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    regex: Regex,
}

impl LiteralMatcher {
    pub fn new(query: &str) -> Result<Self, SearchError> {
        let regex = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Matches against the dish name or the description. A missing
    /// description counts as empty text.
    pub fn matches<T: Searchable + ?Sized>(&self, recipe: &T) -> bool {
        self.is_match(recipe.dish_name()) || self.is_match(recipe.description().unwrap_or(""))
    }
}

/// Concatenates both result lists and keeps the first entry seen for each
/// `recipe_id`.
pub fn merge_unique<T: Searchable>(primary: Vec<T>, extra: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(primary.len() + extra.len());
    primary
        .into_iter()
        .chain(extra)
        .filter(|recipe| seen.insert(recipe.recipe_id()))
        .collect()
}

/// Where the two search phases read recipes from.
pub trait RecipeSource {
    type Recipe: Searchable;
    type Error: From<SearchError>;

    /// Phase one: store-level `LIKE` match of `like_pattern` against the
    /// case-folded dish name or description.
    fn find_by_pattern(&mut self, like_pattern: &str) -> Result<Vec<Self::Recipe>, Self::Error>;

    /// Every stored recipe, for the fallback scan.
    fn load_all(&mut self) -> Result<Vec<Self::Recipe>, Self::Error>;
}

/// Runs both search phases against `source`.
///
/// The full scan only happens when phase one returns fewer than
/// [`FALLBACK_THRESHOLD`] recipes.
pub fn hybrid_search<S: RecipeSource>(
    source: &mut S,
    raw_query: &str,
) -> Result<Vec<S::Recipe>, S::Error> {
    let query = normalize_query(raw_query);
    let direct = source.find_by_pattern(&like_pattern(query))?;

    let mut fallback = Vec::new();
    if direct.len() < FALLBACK_THRESHOLD {
        let matcher = LiteralMatcher::new(query)?;
        fallback = source
            .load_all()?
            .into_iter()
            .filter(|recipe| matcher.matches(recipe))
            .collect();
    }

    Ok(merge_unique(direct, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i32,
        name: &'static str,
        description: Option<&'static str>,
    }

    impl Searchable for Row {
        fn recipe_id(&self) -> i32 {
            self.id
        }

        fn dish_name(&self) -> &str {
            self.name
        }

        fn description(&self) -> Option<&str> {
            self.description
        }
    }

    fn row(id: i32, name: &'static str, description: Option<&'static str>) -> Row {
        Row {
            id,
            name,
            description,
        }
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_query("  чапу \t"), "чапу");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_like_pattern_lowercases() {
        assert_eq!(like_pattern("ЧаПу"), "%чапу%");
    }

    #[test]
    fn test_fold_case_ignores_final_sigma_context() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("οδος"), "οδοσ");
        assert_eq!(fold_case("ΣΟΥΠΑ"), "σουπα");
        assert_eq!(like_pattern("ΟΔΟΣ"), "%οδοσ%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn test_like_pattern_empty() {
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_matcher_is_case_insensitive_for_cyrillic() {
        let matcher = LiteralMatcher::new("ХАЧАПУРИ").unwrap();
        assert!(matcher.is_match("хачапури по-аджарски"));
    }

    #[test]
    fn test_matcher_treats_metacharacters_literally() {
        let matcher = LiteralMatcher::new("a.c(").unwrap();
        assert!(matcher.is_match("xa.c(y"));
        assert!(!matcher.is_match("abc("));
    }

    #[test]
    fn test_matcher_missing_description() {
        let matcher = LiteralMatcher::new("соус").unwrap();
        assert!(!matcher.matches(&row(1, "Хинкали", None)));
        assert!(matcher.matches(&row(2, "Сациви", Some("Курица в ореховом соусе."))));
    }

    #[test]
    fn test_empty_matcher_matches_everything() {
        let matcher = LiteralMatcher::new("").unwrap();
        assert!(matcher.matches(&row(1, "Хинкали", None)));
    }

    #[test]
    fn test_merge_unique_keeps_first_occurrence() {
        let merged = merge_unique(
            vec![row(2, "b", None), row(1, "a", None)],
            vec![row(1, "a", None), row(3, "c", None), row(2, "b", None)],
        );
        let ids: Vec<i32> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    /// Returns canned phase one results and records what it was asked.
    struct Canned {
        direct: Vec<Row>,
        all: Vec<Row>,
        patterns: Vec<String>,
        full_scans: usize,
        fail: bool,
    }

    impl Canned {
        fn new(direct: Vec<Row>, all: Vec<Row>) -> Self {
            Self {
                direct,
                all,
                patterns: Vec::new(),
                full_scans: 0,
                fail: false,
            }
        }
    }

    impl RecipeSource for Canned {
        type Recipe = Row;
        type Error = String;

        fn find_by_pattern(&mut self, like_pattern: &str) -> Result<Vec<Row>, String> {
            if self.fail {
                return Err("store unavailable".to_string());
            }
            self.patterns.push(like_pattern.to_string());
            Ok(self.direct.clone())
        }

        fn load_all(&mut self) -> Result<Vec<Row>, String> {
            self.full_scans += 1;
            Ok(self.all.clone())
        }
    }

    impl From<SearchError> for String {
        fn from(err: SearchError) -> Self {
            err.to_string()
        }
    }

    #[test]
    fn test_fallback_skipped_at_threshold() {
        let direct: Vec<Row> = (1..=FALLBACK_THRESHOLD as i32)
            .map(|id| row(id, "суп", None))
            .collect();
        let mut source = Canned::new(direct.clone(), direct.clone());

        let result = hybrid_search(&mut source, "суп").unwrap();

        assert_eq!(result, direct);
        assert_eq!(source.full_scans, 0);
    }

    #[test]
    fn test_fallback_runs_below_threshold() {
        let all = vec![
            row(1, "Хачапури по-аджарски", None),
            row(2, "Лобио", Some("Густая фасолевая похлебка")),
        ];
        let mut source = Canned::new(Vec::new(), all.clone());

        let result = hybrid_search(&mut source, "  ХАЧА ").unwrap();

        assert_eq!(source.patterns, vec!["%хача%".to_string()]);
        assert_eq!(source.full_scans, 1);
        assert_eq!(result, vec![all[0].clone()]);
    }

    #[test]
    fn test_fallback_duplicates_are_dropped() {
        let hit = row(1, "Хачапури по-аджарски", None);
        let mut source = Canned::new(vec![hit.clone()], vec![hit.clone()]);

        let result = hybrid_search(&mut source, "чапу").unwrap();

        assert_eq!(result, vec![hit]);
    }

    #[test]
    fn test_store_error_short_circuits() {
        let mut source = Canned::new(Vec::new(), Vec::new());
        source.fail = true;

        let err = hybrid_search(&mut source, "x").unwrap_err();

        assert_eq!(err, "store unavailable");
        assert_eq!(source.full_scans, 0);
    }
}
