//! The address book: two independent prefix tries over one set of contacts.
//!
//! Names and phone numbers live in separate key spaces. Both name fields of
//! a contact are indexed as independent lower-cased keys; the phone number
//! is indexed verbatim, separators included.

use crate::contact::Contact;
use crate::index::trie::PrefixTrie;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Contact index over two key spaces, searchable by prefix.
///
/// The serialized form is the on-disk document: two top-level keys, one
/// structural trie dump each (see [`crate::index::store`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    pub(crate) name_index: PrefixTrie,
    pub(crate) phone_index: PrefixTrie,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a contact under both of its name fields and its phone number.
    ///
    /// Name keys are lower-cased; the phone key is used verbatim. Empty
    /// fields are legal keys and index nothing. Never fails.
    pub fn add_contact(&mut self, contact: &Contact) {
        self.name_index
            .insert(&contact.first_name.to_lowercase(), contact);
        self.name_index
            .insert(&contact.last_name.to_lowercase(), contact);
        self.phone_index.insert(&contact.phone_number, contact);
    }

    /// Contacts whose first or last name starts with `query`,
    /// case-insensitively, in insertion order.
    pub fn search_by_name(&self, query: &str) -> &[Contact] {
        self.name_index.lookup(&query.to_lowercase())
    }

    /// Contacts whose phone number starts with `query`, matched verbatim.
    pub fn search_by_phone_number(&self, query: &str) -> &[Contact] {
        self.phone_index.lookup(query)
    }

    /// Feed a batch of records into the index and return how many landed.
    ///
    /// The sequence is consumed lazily; the first failed record aborts the
    /// whole import and surfaces its error. Contacts added before the
    /// failure stay indexed.
    pub fn import_records<I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<Contact>>,
    {
        let mut count = 0;
        for record in records {
            self.add_contact(&record?);
            count += 1;
        }
        Ok(count)
    }
}
