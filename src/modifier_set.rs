//! Ordered modifier storage
//!
//! Output order is part of the URL and therefore of the signature.
//! Replacing a modifier keeps its original position; removing and
//! re-adding it moves it to the end.

/// One named modifier and its serialized path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierToken {
    pub name: String,
    pub value: String,
}

/// Insertion-ordered mapping from modifier name to serialized token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet {
    entries: Vec<ModifierToken>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a modifier, or replace its value in place if already present
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.value = value,
            None => self.entries.push(ModifierToken { name, value }),
        }
    }

    /// Remove a modifier; absent names are ignored
    pub fn unset(&mut self, name: &str) {
        self.entries.retain(|entry| entry.name != name);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Serialized tokens in output order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.value.as_str())
    }

    /// Modifier names in output order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
