// src/languages/tally.rs
// =============================================================================
// Running byte totals per language across a whole account.
//
// Languages keep the order in which they were first seen. Adding is
// commutative, so the totals themselves do not depend on the order the
// repositories were processed in; only the listing order does.
// =============================================================================

use std::collections::HashMap;

use serde::Serialize;

use crate::github::LanguageMap;

/// One bar/slice of the language chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageShare {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageTally {
    shares: Vec<LanguageShare>,
    // language name -> position in `shares`
    index: HashMap<String, usize>,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sums every map into a fresh tally.
    pub fn from_maps<'a, I>(maps: I) -> Self
    where
        I: IntoIterator<Item = &'a LanguageMap>,
    {
        let mut tally = Self::new();
        for map in maps {
            tally.add_map(map);
        }
        tally
    }

    /// Adds `bytes` to `language`, creating it at zero if needed.
    ///
    /// Names are case-sensitive, exactly as GitHub reports them.
    pub fn add(&mut self, language: &str, bytes: u64) {
        match self.index.get(language) {
            Some(&position) => {
                let share = &mut self.shares[position];
                share.value = share.value.saturating_add(bytes);
            }
            None => {
                self.index.insert(language.to_string(), self.shares.len());
                self.shares.push(LanguageShare {
                    name: language.to_string(),
                    value: bytes,
                });
            }
        }
    }

    /// Applies one repository's contribution.
    pub fn add_map(&mut self, map: &LanguageMap) {
        for (language, bytes) in map {
            self.add(language, *bytes);
        }
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Total bytes over every language
    pub fn total(&self) -> u64 {
        self.shares
            .iter()
            .fold(0u64, |sum, share| sum.saturating_add(share.value))
    }

    /// Records in first-appearance order
    pub fn shares(&self) -> &[LanguageShare] {
        &self.shares
    }

    /// Records sorted by bytes, largest first (ties keep first-appearance order)
    pub fn ranked(&self) -> Vec<LanguageShare> {
        let mut ranked = self.shares.clone();
        ranked.sort_by(|a, b| b.value.cmp(&a.value));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, u64)]) -> LanguageMap {
        pairs.iter().map(|(l, b)| (l.to_string(), *b)).collect()
    }

    impl LanguageTally {
        pub(crate) fn get(&self, language: &str) -> Option<u64> {
            self.index
                .get(language)
                .map(|&position| self.shares[position].value)
        }
    }

    #[test]
    fn test_sums_across_repositories() {
        let a = map(&[("JavaScript", 100), ("HTML", 50)]);
        let b = map(&[("JavaScript", 200)]);
        let tally = LanguageTally::from_maps([&a, &b]);

        assert_eq!(
            tally.shares(),
            &[
                LanguageShare { name: "JavaScript".to_string(), value: 300 },
                LanguageShare { name: "HTML".to_string(), value: 50 },
            ]
        );
        assert_eq!(tally.total(), 350);
    }

    #[test]
    fn test_totals_do_not_depend_on_order() {
        let maps = vec![
            map(&[("Rust", 10), ("Shell", 3)]),
            map(&[("Python", 7), ("Rust", 1)]),
            map(&[("Shell", 4), ("CSS", 9), ("Python", 2)]),
        ];
        let forward = LanguageTally::from_maps(maps.iter());
        let backward = LanguageTally::from_maps(maps.iter().rev());

        for language in ["Rust", "Shell", "Python", "CSS"] {
            assert_eq!(forward.get(language), backward.get(language), "{}", language);
        }
        assert_eq!(forward.get("Rust"), Some(11));
        assert_eq!(forward.get("Shell"), Some(7));
        assert_eq!(forward.get("Python"), Some(9));
        assert_eq!(forward.get("CSS"), Some(9));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let tally = LanguageTally::from_maps([&map(&[("Shell", 1), ("shell", 2)])]);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_ranked_is_descending_and_stable() {
        let tally = LanguageTally::from_maps([&map(&[("C", 5), ("Go", 20), ("Lua", 5)])]);
        let names: Vec<_> = tally.ranked().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Go", "C", "Lua"]);
    }

    #[test]
    fn test_empty_tally() {
        let tally = LanguageTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.get("Rust"), None);
    }
}
