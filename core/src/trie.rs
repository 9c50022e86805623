/// Prefix trie over the known-word vocabulary.
use std::collections::BTreeMap;

/// A character trie holding every known word.
///
/// Used by the n-gram model to enumerate completion candidates for a prefix
/// without scanning the whole vocabulary. Children are kept in a `BTreeMap`
/// so enumeration yields words in ascending lexicographic order.
///
/// # Example
/// ```
/// use typeahead_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("cat");
/// trie.insert("can");
/// trie.insert("dog");
///
/// assert_eq!(trie.words_with_prefix("ca"), vec!["can", "cat"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: BTreeMap<char, Box<TrieNode>>,
    /// Full word text when a word ends at this node
    word: Option<String>,
}

impl TrieNode {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            word: None,
        }
    }

    /// Insert a word into the trie. Inserting the same word twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = self;
        for ch in word.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.word = Some(word.to_string());
    }

    /// Walk down to the node reached by `prefix`, if any.
    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = self;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Collect every word starting with `prefix`, in ascending order.
    ///
    /// An empty prefix returns the whole vocabulary. A prefix that leaves the
    /// trie returns an empty vector.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            node.collect_words(&mut out);
        }
        out
    }

    fn collect_words<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(w) = &self.word {
            out.push(w.as_str());
        }
        for child in self.children.values() {
            child.collect_words(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_are_not_words() {
        let mut trie = TrieNode::new();
        trie.insert("sleep");
        trie.insert("sleepy");
        trie.insert("well");

        assert_eq!(trie.words_with_prefix("s"), vec!["sleep", "sleepy"]);
        assert_eq!(trie.words_with_prefix("sleep"), vec!["sleep", "sleepy"]);
        assert_eq!(trie.words_with_prefix("sleepy"), vec!["sleepy"]);
        assert!(trie.words_with_prefix("wellness").is_empty());
    }

    #[test]
    fn test_words_with_prefix_sorted() {
        let mut trie = TrieNode::new();
        for w in ["cap", "cat", "can", "dog", "c"] {
            trie.insert(w);
        }

        assert_eq!(trie.words_with_prefix("ca"), vec!["can", "cap", "cat"]);
        assert_eq!(trie.words_with_prefix("c"), vec!["c", "can", "cap", "cat"]);
        assert_eq!(trie.words_with_prefix("cat"), vec!["cat"]);
    }

    #[test]
    fn test_empty_prefix_returns_everything() {
        let mut trie = TrieNode::new();
        trie.insert("b");
        trie.insert("a");

        assert_eq!(trie.words_with_prefix(""), vec!["a", "b"]);
    }

    #[test]
    fn test_no_match() {
        let mut trie = TrieNode::new();
        trie.insert("sleep");

        assert!(trie.words_with_prefix("x").is_empty());
        assert!(trie.words_with_prefix("sleeps").is_empty());
    }

    #[test]
    fn test_duplicate_insert() {
        let mut trie = TrieNode::new();
        trie.insert("well");
        trie.insert("well");

        assert_eq!(trie.words_with_prefix("w"), vec!["well"]);
    }
}
