//! CSV import.
//!
//! Rows carry four named columns: `FirstName`, `LastName`, `Address`,
//! `PhoneNumber`. Contacts are yielded lazily, one per row, so the caller
//! sees the first malformed row as an error item and can abort the batch.

use crate::contact::Contact;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One CSV row, keyed by the column headers the import format mandates.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRow {
    first_name: String,
    last_name: String,
    address: String,
    phone_number: String,
}

impl From<CsvRow> for Contact {
    fn from(row: CsvRow) -> Self {
        Contact {
            first_name: row.first_name,
            last_name: row.last_name,
            address: row.address,
            phone_number: row.phone_number,
        }
    }
}

/// Open `path` and yield one contact per CSV row.
pub fn read_contacts(path: &Path) -> Result<impl Iterator<Item = Result<Contact>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;
    let reader = csv::Reader::from_reader(file);

    Ok(reader
        .into_deserialize::<CsvRow>()
        .map(|row| row.map(Contact::from).context("Failed to parse CSV row")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_reads_one_contact_per_row() {
        let (_dir, path) = write_csv(
            "FirstName,LastName,Address,PhoneNumber\n\
             Ann,Lee,1 Main St,555-1111\n\
             Bob,Ray,\"2 Oak Ave, Apt 3\",555-2222\n",
        );

        let contacts: Vec<Contact> = read_contacts(&path)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0], Contact::new("Ann", "Lee", "1 Main St", "555-1111"));
        // Quoted commas stay inside the field.
        assert_eq!(contacts[1].address, "2 Oak Ave, Apt 3");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_contacts(&dir.path().join("absent.csv")).is_err());
    }

    #[test]
    fn test_short_row_yields_an_error_item() {
        let (_dir, path) = write_csv(
            "FirstName,LastName,Address,PhoneNumber\n\
             Ann,Lee,1 Main St,555-1111\n\
             Bob,Ray\n",
        );

        let rows: Vec<Result<Contact>> = read_contacts(&path).unwrap().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_ok());
        assert!(rows[1].is_err());
    }

    #[test]
    fn test_empty_fields_are_legal() {
        let (_dir, path) = write_csv(
            "FirstName,LastName,Address,PhoneNumber\n\
             ,,,\n",
        );

        let contacts: Vec<Contact> = read_contacts(&path)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(contacts, vec![Contact::new("", "", "", "")]);
    }
}
