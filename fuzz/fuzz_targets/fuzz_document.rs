#![no_main]

use libfuzzer_sys::fuzz_target;
use rolo::index::AddressBook;

fuzz_target!(|data: &[u8]| {
    // Fuzz the persisted-document parser with arbitrary bytes
    // Malformed documents must error, never panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<AddressBook>(text);
    }
});
