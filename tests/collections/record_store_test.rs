//! Tests for the record store
//!
//! Append and positional removal behaviour over several categories.

use crate::utils::{biosample, disease, phenotype};
use phenopacket_entry::{Category, CategoryCollection, RecordStore, Row};

fn snapshot(store: &RecordStore, category: Category) -> Vec<Row> {
    store
        .rows(category)
        .iter()
        .map(|stored| stored.row.clone())
        .collect()
}

#[test]
fn test_append_extends_sequence_at_the_end() {
    let mut store = RecordStore::new();
    let rows = [
        disease("D1", "Asthma", "Ongoing"),
        disease("D2", "Eczema", "Resolved"),
        disease("D3", "Asthma", "Ongoing"),
    ];

    for row in rows {
        let before = snapshot(&store, Category::Disease);
        store.append(Category::Disease, row.clone()).unwrap();

        let after = snapshot(&store, Category::Disease);
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&row));
    }
}

#[test]
fn test_remove_every_valid_index() {
    let rows = vec![
        phenotype("HP:0001250", "Seizure"),
        phenotype("HP:0001263", "Global developmental delay"),
        phenotype("HP:0000252", "Microcephaly"),
        phenotype("HP:0001250", "Seizure"),
    ];

    for index in 0..rows.len() {
        let mut store = RecordStore::from_rows(rows.clone()).unwrap();
        let removed = store.remove(Category::PhenotypicFeature, index).unwrap();
        assert_eq!(removed, rows[index]);

        let mut expected = rows.clone();
        expected.remove(index);
        assert_eq!(snapshot(&store, Category::PhenotypicFeature), expected);
    }
}

#[test]
fn test_remove_outside_range_leaves_sequence_unchanged() {
    let mut store = RecordStore::from_rows(vec![
        biosample("S1", "Blood"),
        biosample("S2", "Skin"),
    ])
    .unwrap();
    let before = snapshot(&store, Category::Biosample);

    for index in [2, 3, 100, usize::MAX] {
        assert!(store.remove(Category::Biosample, index).is_none());
        assert_eq!(snapshot(&store, Category::Biosample), before);
    }
}

#[test]
fn test_removal_only_touches_its_category() {
    let mut store = RecordStore::from_rows(vec![
        disease("D1", "Asthma", "Ongoing"),
        biosample("S1", "Blood"),
    ])
    .unwrap();

    store.remove(Category::Disease, 0).unwrap();
    assert_eq!(store.len(Category::Disease), 0);
    assert_eq!(store.len(Category::Biosample), 1);
    assert_eq!(store.non_empty_categories(), vec![Category::Biosample]);
}

#[test]
fn test_disease_example() {
    let mut store = RecordStore::new();
    store.append(Category::Disease, disease("D1", "Asthma", "Ongoing")).unwrap();
    assert_eq!(store.len(Category::Disease), 1);

    store.remove(Category::Disease, 0).unwrap();
    assert_eq!(store.len(Category::Disease), 0);
}
