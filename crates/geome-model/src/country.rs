//! GEOME country vocabulary.

use std::collections::{BTreeMap, BTreeSet};

/// Sentinel GEOME accepts when a country cannot be resolved.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Accepted GEOME country names plus known VertNet spelling variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryVocabulary {
    accepted: BTreeSet<String>,
    aliases: BTreeMap<String, String>,
}

/// Outcome of resolving one raw country value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryMatch {
    Accepted,
    Alias,
    Unknown,
}

impl CountryVocabulary {
    pub fn new<A, S>(accepted: A, aliases: BTreeMap<String, String>) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: accepted.into_iter().map(Into::into).collect(),
            aliases,
        }
    }

    pub fn is_accepted(&self, country: &str) -> bool {
        self.accepted.contains(country)
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Resolve a raw country value. Matching is exact and case-sensitive.
    pub fn resolve<'a>(&'a self, raw: Option<&'a str>) -> (&'a str, CountryMatch) {
        let Some(country) = raw else {
            return (UNKNOWN_COUNTRY, CountryMatch::Unknown);
        };
        if self.accepted.contains(country) {
            return (country, CountryMatch::Accepted);
        }
        match self.aliases.get(country) {
            Some(target) => (target.as_str(), CountryMatch::Alias),
            None => (UNKNOWN_COUNTRY, CountryMatch::Unknown),
        }
    }

    pub fn normalize(&self, raw: Option<&str>) -> String {
        self.resolve(raw).0.to_string()
    }
}
