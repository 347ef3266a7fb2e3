//! Bridge countries for unrealistic direct hops.

use std::collections::HashMap;

/// Built-in bridges, keyed by ordered (from, to) country pair.
const BRIDGES: &[((&str, &str), &[&str])] = &[
    (("Spain", "Italy"), &["France"]),
    (("Portugal", "Italy"), &["Spain", "France"]),
    (("United Kingdom", "Italy"), &["France"]),
    (("United Kingdom", "Greece"), &["Italy"]),
    (("Germany", "Greece"), &["Austria", "Italy"]),
    (("France", "Greece"), &["Italy"]),
    // Collapses an India → US trip onto US cities.
    (("India", "United States"), &["United States"]),
];

/// Intermediate countries to pass through between two countries.
///
/// Pairs are stored in one direction only. A lookup that misses the
/// `(from, to)` order retries with `(to, from)` and returns that list
/// as stored, without reversing it.
#[derive(Debug, Clone, Default)]
pub struct BridgeTable {
    bridges: HashMap<(String, String), Vec<String>>,
}

impl BridgeTable {
    /// An empty table: no pair is bridged.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in bridge table.
    pub fn builtin() -> Self {
        BRIDGES
            .iter()
            .fold(Self::new(), |table, ((from, to), via)| {
                table.with_bridge(*from, *to, via.iter().copied())
            })
    }

    /// Add a bridge for an ordered country pair.
    pub fn with_bridge<I, S>(mut self, from: &str, to: &str, via: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bridges.insert(
            (from.to_string(), to.to_string()),
            via.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Bridge countries for `from → to`, falling back to the reversed pair.
    pub fn lookup(&self, from: &str, to: &str) -> &[String] {
        let forward = self.get(from, to);
        if !forward.is_empty() {
            return forward;
        }
        self.get(to, from)
    }

    fn get(&self, from: &str, to: &str) -> &[String] {
        self.bridges
            .get(&(from.to_string(), to.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_lookup() {
        let table = BridgeTable::builtin();
        assert_eq!(table.lookup("Spain", "Italy"), ["France"]);
        assert_eq!(table.lookup("Germany", "Greece"), ["Austria", "Italy"]);
    }

    #[test]
    fn reversed_lookup_keeps_stored_order() {
        let table = BridgeTable::builtin();
        assert_eq!(table.lookup("Italy", "Spain"), ["France"]);
        assert_eq!(table.lookup("Italy", "Portugal"), ["Spain", "France"]);
    }

    #[test]
    fn unknown_pair_has_no_bridge() {
        let table = BridgeTable::builtin();
        assert!(table.lookup("Germany", "Austria").is_empty());
        assert!(table.lookup("France", "France").is_empty());
    }

    #[test]
    fn lookup_is_exact_match() {
        let table = BridgeTable::builtin();
        assert!(table.lookup("spain", "italy").is_empty());
    }
}
