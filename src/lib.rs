//! # Rolo - Prefix-Indexed Contact Book
//!
//! Rolo is a terminal-first contact book that answers name-fragment and
//! phone-prefix searches in time proportional to the query length,
//! independent of how many contacts are stored.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - The dual-trie engine: trie core, address book, persistence, statistics
//! - [`contact`] - The contact record
//! - [`import`] - CSV import
//! - [`output`] - Result formatting
//!
//! ## Quick Start
//!
//! ```
//! use rolo::contact::Contact;
//! use rolo::index::AddressBook;
//!
//! let mut book = AddressBook::new();
//! book.add_contact(&Contact::new("Ann", "Lee", "1 Main St", "555-1111"));
//!
//! assert_eq!(book.search_by_name("an").len(), 1);
//! assert_eq!(book.search_by_name("lee").len(), 1);
//! assert_eq!(book.search_by_phone_number("555-1").len(), 1);
//! ```
//!
//! ## How it works
//!
//! Each contact is threaded into two prefix tries: one over its lower-cased
//! first and last name, one over its verbatim phone number. Insertion
//! appends the contact at every node along a key's path, so any prefix of
//! an indexed key resolves to a ready-made result list. The whole index
//! round-trips through a single JSON document as a structural dump of both
//! trees.

pub mod contact;
pub mod import;
pub mod index;
pub mod output;
