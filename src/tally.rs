/// Insertion-ordered counter keyed by case-insensitive names
/// Backs component requirements as well as the per-product and per-component statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::same_name;

/// Serialized as a list of `[name, count]` pairs so order survives a round trip.
/// Older data files store a plain `{name: count}` object, which is accepted too.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<(String, u32)>", from = "TallyRepr")]
pub struct Tally {
    entries: Vec<(String, u32)>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TallyRepr {
    Pairs(Vec<(String, u32)>),
    Map(BTreeMap<String, u32>),
}

impl From<TallyRepr> for Tally {
    fn from(repr: TallyRepr) -> Self {
        let mut tally = Tally::new();
        let entries: Vec<(String, u32)> = match repr {
            TallyRepr::Pairs(pairs) => pairs,
            TallyRepr::Map(map) => map.into_iter().collect(),
        };
        for (name, count) in entries {
            tally.add(&name, count);
        }
        tally
    }
}

impl From<Tally> for Vec<(String, u32)> {
    fn from(tally: Tally) -> Self {
        tally.entries
    }
}

impl Tally {
    pub fn new() -> Self {
        Tally::default()
    }

    /// Add `count` to `name`, keeping the first spelling seen for the key
    pub fn add(&mut self, name: &str, count: u32) {
        match self.entries.iter_mut().find(|(key, _)| same_name(key, name)) {
            Some((_, total)) => *total += count,
            None => self.entries.push((name.to_string(), count)),
        }
    }

    pub fn bump(&mut self, name: &str) {
        self.add(name, 1);
    }

    pub fn get(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .find(|(key, _)| same_name(key, name))
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest non-zero entry; ties go to the earliest inserted key
    pub fn leader(&self) -> Option<(&str, u32)> {
        let mut best: Option<(&str, u32)> = None;
        for (key, count) in self.iter() {
            if count > 0 && best.map_or(true, |(_, top)| count > top) {
                best = Some((key, count));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_case_insensitive_keys() {
        let mut tally = Tally::new();
        tally.bump("Ketchup");
        tally.add("ketchup", 2);
        tally.bump("Pan");

        assert_eq!(tally.len(), 2);
        assert_eq!(tally.get("KETCHUP"), 3);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.iter().next(), Some(("Ketchup", 3)));
    }

    #[test]
    fn test_leader_prefers_first_inserted_on_tie() {
        let mut tally = Tally::new();
        tally.add("Clasico", 0);
        tally.add("Alemana", 2);
        tally.add("Polaca", 2);
        assert_eq!(tally.leader(), Some(("Alemana", 2)));
    }

    #[test]
    fn test_deserializes_pairs_and_legacy_objects() {
        let mut tally = Tally::new();
        tally.add("Polaca", 3);
        tally.add("Alemana", 1);
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"[["Polaca",3],["Alemana",1]]"#);
        assert_eq!(serde_json::from_str::<Tally>(&json).unwrap(), tally);

        let legacy: Tally = serde_json::from_str(r#"{"Clasico": 4, "Aleman": 2}"#).unwrap();
        assert_eq!(legacy.get("clasico"), 4);
        assert_eq!(legacy.total(), 6);
    }

    #[test]
    fn test_leader_ignores_zero_counts() {
        let mut tally = Tally::new();
        tally.add("Clasico", 0);
        assert_eq!(tally.leader(), None);
        assert_eq!(Tally::new().leader(), None);
    }
}
