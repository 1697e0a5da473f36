use std::collections::BTreeMap;

use crate::domain::ingredient_check::normalizer::normalize;

#[derive(Debug, Clone)]
struct TrieNode<T> {
    children: BTreeMap<char, TrieNode<T>>,
    payload: Option<T>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            payload: None,
        }
    }
}

/// Character trie keyed by normalized ingredient names.
///
/// Keys go through the same normalization as the classifier, so "Gelatin" and
/// "GELATIN  " address the same entry. Children are ordered by character, which makes
/// prefix results come back sorted by their full key.
///
/// Mutation needs `&mut self`; sharing one index between readers and a writer is up to
/// the owner (an `RwLock` or a rebuilt snapshot).
#[derive(Debug, Clone)]
pub struct IngredientTrie<T> {
    root: TrieNode<T>,
    len: usize,
}

impl<T> Default for IngredientTrie<T> {
    fn default() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
        }
    }
}

impl<T> IngredientTrie<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from `(name, payload)` pairs; later duplicates overwrite earlier ones.
    pub fn from_entries<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: AsRef<str>,
    {
        entries.into_iter().collect()
    }

    /// Inserts `payload` under the normalized `name`, returning the payload it replaced.
    pub fn insert(&mut self, name: &str, payload: T) -> Option<T> {
        let key = normalize(name);
        let mut node = &mut self.root;

        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }

        let previous = node.payload.replace(payload);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Exact lookup on the normalized name.
    pub fn search(&self, name: &str) -> Option<&T> {
        self.find_node(&normalize(name))
            .and_then(|node| node.payload.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.search(name).is_some()
    }

    /// Payloads of every entry whose normalized key starts with the normalized `prefix`,
    /// ordered by key.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<&T> {
        self.search_by_prefix_with_keys(prefix)
            .into_iter()
            .map(|(_, payload)| payload)
            .collect()
    }

    /// Same as [`search_by_prefix`](Self::search_by_prefix) but also returns each full key.
    pub fn search_by_prefix_with_keys(&self, prefix: &str) -> Vec<(String, &T)> {
        let mut key = normalize(prefix);
        let mut results = Vec::new();

        if let Some(node) = self.find_node(&key) {
            Self::collect(node, &mut key, &mut results);
        }

        results
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Normalized substring check, independent of the stored entries.
    pub fn contains_substring(haystack: &str, needle: &str) -> bool {
        normalize(haystack).contains(normalize(needle).as_str())
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode<T>> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn collect<'a>(node: &'a TrieNode<T>, key: &mut String, results: &mut Vec<(String, &'a T)>) {
        if let Some(payload) = &node.payload {
            results.push((key.clone(), payload));
        }

        for (ch, child) in &node.children {
            key.push(*ch);
            Self::collect(child, key, results);
            key.pop();
        }
    }
}

impl<N, T> FromIterator<(N, T)> for IngredientTrie<T>
where
    N: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut trie = IngredientTrie::new();
        for (name, payload) in iter {
            trie.insert(name.as_ref(), payload);
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        name: &'static str,
        unsafe_for_alpha_gal: bool,
    }

    fn entry(name: &'static str, unsafe_for_alpha_gal: bool) -> Entry {
        Entry {
            name,
            unsafe_for_alpha_gal,
        }
    }

    #[test]
    fn test_search_is_normalized() {
        let mut trie = IngredientTrie::new();
        trie.insert("Gelatin", entry("gelatin", true));

        assert_eq!(trie.search("gelatin"), Some(&entry("gelatin", true)));
        assert_eq!(trie.search("GELATIN  "), Some(&entry("gelatin", true)));
        assert!(trie.contains("gelatin"));
    }

    #[test]
    fn test_search_requires_full_key() {
        let mut trie = IngredientTrie::new();
        trie.insert("gelatin", 1);

        assert_eq!(trie.search("gel"), None);
        assert_eq!(trie.search("gelatins"), None);
        assert_eq!(trie.search("pectin"), None);
    }

    #[test]
    fn test_reinsert_overwrites_payload() {
        let mut trie = IngredientTrie::new();
        assert_eq!(trie.insert("Milk", 1), None);
        assert_eq!(trie.insert("milk", 2), Some(1));

        assert_eq!(trie.search("MILK"), Some(&2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_search_by_prefix_returns_only_matching_keys() {
        let trie = IngredientTrie::from_entries([
            ("milk", "milk"),
            ("Milk Powder", "milk powder"),
            ("milk solids", "milk solids"),
            ("buttermilk", "buttermilk"),
            ("mil", "mil"),
            ("cream", "cream"),
        ]);

        let results = trie.search_by_prefix("milk");
        assert_eq!(results, vec![&"milk", &"milk powder", &"milk solids"]);
    }

    #[test]
    fn test_search_by_prefix_is_ordered_by_key() {
        let trie = IngredientTrie::from_entries([("whey", 3), ("wheat", 1), ("wheat flour", 2)]);

        let keys: Vec<String> = trie
            .search_by_prefix_with_keys("WHE")
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["wheat", "wheat flour", "whey"]);
    }

    #[test]
    fn test_search_by_prefix_without_match() {
        let trie = IngredientTrie::from_entries([("milk", 1)]);
        assert!(trie.search_by_prefix("soy").is_empty());
    }

    #[test]
    fn test_empty_prefix_returns_everything() {
        let trie = IngredientTrie::from_entries([("b", 2), ("a", 1)]);
        assert_eq!(trie.search_by_prefix(""), vec![&1, &2]);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_contains_substring() {
        assert!(IngredientTrie::<()>::contains_substring(
            "Whey Protein Concentrate (MILK)",
            "milk"
        ));
        assert!(IngredientTrie::<()>::contains_substring("goats milk", "OATS"));
        assert!(!IngredientTrie::<()>::contains_substring("water", "milk"));
    }

    #[test]
    fn test_new_is_empty() {
        let trie: IngredientTrie<u8> = IngredientTrie::new();
        assert!(trie.is_empty());
        assert!(trie.search_by_prefix("a").is_empty());
    }
}
