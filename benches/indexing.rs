//! Index construction and lookup benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{Criterion, criterion_group, criterion_main};
use rolo::contact::Contact;
use rolo::index::AddressBook;
use std::hint::black_box;

fn synthetic_contacts(count: usize) -> Vec<Contact> {
    (0..count)
        .map(|i| {
            Contact::new(
                format!("First{:04}", i),
                format!("Last{:04}", i),
                format!("{} Main St", i),
                format!("555-{:04}", i),
            )
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let contacts = synthetic_contacts(1000);

    c.bench_function("insert_1k_contacts", |b| {
        b.iter(|| {
            let mut book = AddressBook::new();
            for contact in &contacts {
                book.add_contact(black_box(contact));
            }
            book
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let mut book = AddressBook::new();
    for contact in synthetic_contacts(1000) {
        book.add_contact(&contact);
    }

    c.bench_function("lookup_name_prefix", |b| {
        b.iter(|| black_box(book.search_by_name(black_box("first00"))).len())
    });

    c.bench_function("lookup_phone_prefix", |b| {
        b.iter(|| black_box(book.search_by_phone_number(black_box("555-0"))).len())
    });
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut book = AddressBook::new();
    for contact in synthetic_contacts(1000) {
        book.add_contact(&contact);
    }
    let json = serde_json::to_string(&book).unwrap();

    c.bench_function("deserialize_1k_index", |b| {
        b.iter(|| serde_json::from_str::<AddressBook>(black_box(&json)).unwrap())
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_roundtrip);
criterion_main!(benches);
