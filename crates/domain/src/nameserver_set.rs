use crate::zone::normalize_name;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Candidate nameserver names, deduplicated and ordered by their
/// normalized form so output is reproducible between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameserverSet {
    names: Vec<Arc<str>>,
}

impl NameserverSet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_key: BTreeMap<String, Arc<str>> = BTreeMap::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            by_key
                .entry(normalize_name(name))
                .or_insert_with(|| Arc::from(name));
        }

        Self {
            names: by_key.into_values().collect(),
        }
    }

    /// Published NS set merged with the operator's additional names.
    pub fn merged(published: &[String], additional: &[String]) -> Self {
        Self::from_names(additional.iter().chain(published.iter()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<str>> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl IntoIterator for NameserverSet {
    type Item = Arc<str>;
    type IntoIter = std::vec::IntoIter<Arc<str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}
