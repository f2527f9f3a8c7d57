//! Index statistics.

use crate::index::book::AddressBook;
use crate::index::trie::TrieNode;
use anyhow::Result;
use std::path::Path;

/// Aggregate shape of one trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Nodes in the tree, root excluded.
    pub nodes: usize,
    /// Contact entries summed over all nodes. One inserted key of length
    /// `n` contributes `n` entries, so this tracks total indexed
    /// characters, not contact count.
    pub contact_entries: usize,
    /// Length of the longest indexed key.
    pub max_depth: usize,
}

/// Walk a trie and collect its shape.
pub fn trie_stats(root: &TrieNode) -> TrieStats {
    let mut stats = TrieStats::default();
    walk(root, 0, &mut stats);
    stats
}

fn walk(node: &TrieNode, depth: usize, stats: &mut TrieStats) {
    stats.max_depth = stats.max_depth.max(depth);
    if depth > 0 {
        stats.nodes += 1;
        stats.contact_entries += node.contacts.len();
    }
    for child in node.children.values() {
        walk(child, depth + 1, stats);
    }
}

/// Display statistics for the index stored at `path`.
pub fn show_stats(index_path: &Path) -> Result<()> {
    let mut book = AddressBook::new();
    book.load(index_path)?;

    let names = trie_stats(book.name_index.root());
    let phones = trie_stats(book.phone_index.root());

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Index location:   {}", index_path.display());
    if let Ok(meta) = std::fs::metadata(index_path) {
        println!("Index size:       {}", format_size(meta.len()));
    }

    println!();
    println!("Name trie:");
    print_trie_stats(&names);
    println!();
    println!("Phone trie:");
    print_trie_stats(&phones);

    Ok(())
}

fn print_trie_stats(stats: &TrieStats) {
    println!("  Nodes:           {}", stats.nodes);
    println!("  Contact entries: {}", stats.contact_entries);
    println!("  Longest key:     {}", stats.max_depth);
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
