use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Tokenize text into lowercase word runs, keeping order and duplicates.
///
/// A word is a maximal run of Unicode alphanumerics or `_`. Everything else is a
/// separator. No stopword removal and no stemming.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase();
    WORD.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}

/// Distinct tokens of `text`. Order is irrelevant in this mode.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Cat, dog... CAT_2!");
        assert_eq!(t, vec!["cat", "dog", "cat_2"]);
    }

    #[test]
    fn set_mode_drops_duplicates() {
        let s = token_set("dog Dog DOG bird");
        assert_eq!(s.len(), 2);
        assert!(s.contains("dog"));
    }
}
