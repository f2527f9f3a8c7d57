//! Character-level prefix trie over contact keys.
//!
//! Every insertion threads the contact through each node on the key's path,
//! so a prefix lookup lands on a node that already holds the full result
//! list. Lookup cost is proportional to the query length, independent of
//! how many contacts are stored.

use crate::contact::Contact;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single trie node: child edges keyed by one character, plus every
/// contact whose key passes through this node.
///
/// Nodes are exclusively owned by their parent; the trie is a strict
/// ownership tree with no sharing and no cycles. The serialized form is the
/// structural dump `{contacts, children}` used by the on-disk document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrieNode {
    pub contacts: Vec<Contact>,
    pub children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Prefix tree mapping string keys to the contacts indexed under them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixTrie {
    root: TrieNode,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `contact` under `key`.
    ///
    /// A clone of the contact is appended to the contact list of every node
    /// the key walks through, one node per prefix length. An empty key
    /// touches no nodes. Repeated insertions are kept as-is, so result
    /// lists can carry duplicates.
    pub fn insert(&mut self, key: &str, contact: &Contact) {
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
            node.contacts.push(contact.clone());
        }
    }

    /// Return the contacts indexed under `prefix`, in insertion order.
    ///
    /// A prefix with no matching path yields an empty slice, never an
    /// error.
    pub fn lookup(&self, prefix: &str) -> &[Contact] {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.contacts
    }

    /// Root node, for structural walks (statistics, serialization checks).
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
