use serde::{Deserialize, Serialize};

/// A single address book entry.
///
/// Contacts are plain values: the index stores one copy at every trie node
/// a key passes through, and equality is field-by-field. There is no
/// identity beyond the field contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
        }
    }
}
