use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key/value settings of a single profile.
pub type Profile = BTreeMap<String, String>;

/// The parsed contents of one config or credentials file.
///
/// Maps profile name to its settings. Serializes as a plain JSON object
/// (`{"default": {"region": "us-east-1"}}`), sorted by profile name and
/// then by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileTable {
    profiles: BTreeMap<String, Profile>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a profile, discarding anything it held before.
    pub fn start_profile(&mut self, name: &str) {
        self.profiles.insert(name.to_string(), Profile::new());
    }

    /// Set `key` in `profile`, creating the profile if needed.
    /// A repeated key keeps the last value.
    pub fn insert(&mut self, profile: &str, key: &str, value: &str) {
        self.profiles
            .entry(profile.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns the value of `key` in `profile`, if present.
    #[cfg(test)]
    pub fn get(&self, profile: &str, key: &str) -> Option<&str> {
        self.profiles
            .get(profile)
            .and_then(|p| p.get(key))
            .map(String::as_str)
    }

    #[cfg(test)]
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Profile names in sorted order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut table = ProfileTable::new();
        table.start_profile("default");
        table.insert("default", "region", "us-east-1");

        assert_eq!(table.get("default", "region"), Some("us-east-1"));
        assert_eq!(table.get("default", "output"), None);
        assert_eq!(table.get("other", "region"), None);
    }

    #[test]
    fn duplicate_key_last_value_wins() {
        let mut table = ProfileTable::new();
        table.insert("dev", "region", "eu-west-1");
        table.insert("dev", "region", "eu-central-1");

        assert_eq!(table.get("dev", "region"), Some("eu-central-1"));
        assert_eq!(table.profile("dev").map(|p| p.len()), Some(1));
    }

    #[test]
    fn restarting_profile_clears_it() {
        let mut table = ProfileTable::new();
        table.start_profile("x");
        table.insert("x", "a", "1");
        table.start_profile("x");

        assert_eq!(table.len(), 1);
        assert!(table.profile("x").is_some_and(|p| p.is_empty()));
    }

    #[test]
    fn serializes_as_nested_object_sorted() {
        let mut table = ProfileTable::new();
        table.insert("zeta", "k", "v");
        table.insert("alpha", "b", "2");
        table.insert("alpha", "a", "1");

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"alpha":{"a":"1","b":"2"},"zeta":{"k":"v"}}"#);
        assert_eq!(table.profile_names(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn empty_table() {
        let table = ProfileTable::new();
        assert!(table.is_empty());
        assert_eq!(serde_json::to_string(&table).unwrap(), "{}");
    }
}
