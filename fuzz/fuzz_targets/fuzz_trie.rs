#![no_main]

use libfuzzer_sys::fuzz_target;
use rolo::contact::Contact;
use rolo::index::PrefixTrie;

fuzz_target!(|input: (String, String)| {
    // Fuzz insertion and lookup with arbitrary keys and queries
    // This should not panic for any character content
    let (key, query) = input;
    let contact = Contact::new("Fuzz", "Case", "", key.as_str());

    let mut trie = PrefixTrie::new();
    trie.insert(&key, &contact);
    let _ = trie.lookup(&query);

    // Every prefix of an inserted key resolves to the contact
    let prefix: String = key.chars().take(3).collect();
    if !key.is_empty() {
        assert!(!trie.lookup(&prefix).is_empty());
    }
});
