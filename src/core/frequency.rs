use std::collections::HashMap;
use std::hash::Hash;

/// Key -> count table that iterates in first-occurrence order.
#[derive(Debug, Clone)]
pub struct OrderedCounter<K> {
    keys: Vec<K>,
    counts: Vec<usize>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> OrderedCounter<K> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.counts[slot] += 1,
            None => {
                self.index.insert(key.clone(), self.keys.len());
                self.keys.push(key);
                self.counts.push(1);
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&slot| self.counts[slot])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Keys reaching the highest count, in first-occurrence order.
    pub fn most_common(&self) -> Vec<&K> {
        let max = self.max_count();
        self.iter()
            .filter(|(_, count)| *count == max)
            .map(|(key, _)| key)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.keys.iter().zip(self.counts.iter().copied())
    }
}

impl<K: Eq + Hash + Clone> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for OrderedCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
