//! Caller-supplied variable binding tables.

use std::collections::HashMap;

/// Mapping from single-character identifier to integer value.
///
/// Assembled by the caller before evaluation; the interpreter only ever
/// reads it and never retains it past a call.
///
/// # Example
/// ```
/// use tally_core::api::Bindings;
///
/// let bindings = Bindings::from([('a', 5), ('b', 3)]);
/// assert_eq!(bindings.get('a'), Some(5));
/// assert!(!bindings.contains('z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: HashMap<char, i64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable, returning the previously bound value if any.
    pub fn insert(&mut self, name: char, value: i64) -> Option<i64> {
        self.entries.insert(name, value)
    }

    pub fn get(&self, name: char) -> Option<i64> {
        self.entries.get(&name).copied()
    }

    pub fn contains(&self, name: char) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, i64)> + '_ {
        self.entries.iter().map(|(&name, &value)| (name, value))
    }
}

impl FromIterator<(char, i64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (char, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(char, i64); N]> for Bindings {
    fn from(entries: [(char, i64); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_and_reports_the_old_value() {
        let mut bindings = Bindings::new();
        assert_eq!(bindings.insert('x', 1), None);
        assert_eq!(bindings.insert('x', 2), Some(1));
        assert_eq!(bindings.get('x'), Some(2));
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let bindings: Bindings = [('a', 1), ('b', 2)].into_iter().collect();
        assert_eq!(bindings.len(), 2);
        assert!(bindings.contains('a'));
        assert!(bindings.contains('b'));
        assert!(!bindings.is_empty());
    }
}
