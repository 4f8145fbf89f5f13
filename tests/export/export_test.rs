//! Tests for CSV and workbook export

use std::io::Cursor;

use calamine::{Reader, Xlsx, open_workbook_from_rs};
use chrono::NaiveDate;
use tempfile::TempDir;

use crate::utils::{biosample, disease, phenotype};
use phenopacket_entry::export::table::{SECTION_COLUMN, combined_batch, sheet_batches};
use phenopacket_entry::{
    Category, CategoryCollection, ExportFormat, ExportOutcome, Exporter, RecordStore,
};

fn exporter() -> Exporter {
    Exporter::new("phenopacket").with_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn sample_store() -> RecordStore {
    RecordStore::from_rows(vec![
        biosample("S1", "Blood"),
        disease("D1", "Asthma", "Ongoing"),
        phenotype("HP:0001250", "Seizure"),
        disease("D2", "Eczema", "Resolved"),
    ])
    .unwrap()
}

#[test]
fn test_empty_store_exports_nothing() {
    let store = RecordStore::new();
    for format in [ExportFormat::Csv, ExportFormat::Xlsx] {
        let outcome = exporter().export(&store, format).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(outcome.artifact().is_none());
    }
}

#[test]
fn test_emptied_store_exports_nothing() {
    let mut store = RecordStore::new();
    store
        .append(Category::Disease, disease("D1", "Asthma", "Ongoing"))
        .unwrap();
    store.remove(Category::Disease, 0).unwrap();

    let outcome = exporter().export(&store, ExportFormat::Csv).unwrap();
    assert_eq!(outcome, ExportOutcome::NothingToExport);
}

#[test]
fn test_single_table_row_count_and_sections() {
    let store = sample_store();
    let batch = combined_batch(&store).unwrap().unwrap();
    assert_eq!(batch.num_rows(), store.total_rows());

    let schema = batch.schema();
    let sections = batch
        .column(schema.index_of(SECTION_COLUMN).unwrap())
        .as_any()
        .downcast_ref::<arrow::array::StringArray>()
        .unwrap();
    let tags: Vec<&str> = sections.iter().map(Option::unwrap).collect();

    // Categories appear in catalog order, rows in insertion order
    assert_eq!(tags, vec!["PF", "D", "D", "B"]);
}

#[test]
fn test_single_table_csv_lines() {
    let store = sample_store();
    let outcome = exporter().export(&store, ExportFormat::Csv).unwrap();
    let artifact = outcome.artifact().unwrap();

    assert_eq!(artifact.file_name, "phenopacket_2024-06-01.csv");
    assert_eq!(artifact.mime_type(), "text/csv");
    assert_eq!(artifact.rows, 4);

    let text = String::from_utf8(artifact.bytes.clone()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + 4);
    assert!(lines[0].starts_with("IndividualID,PhenotypeID,Label,Excluded"));
    assert!(lines[0].contains("Section"));
    assert!(lines[2].contains("Asthma"));
    assert!(lines[3].contains("Eczema"));
}

#[test]
fn test_workbook_has_one_sheet_per_non_empty_category() {
    let store = sample_store();
    let sheets = sheet_batches(&store).unwrap();

    let names: Vec<&str> = sheets.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["pf", "d", "b"]);

    let counts: Vec<usize> = sheets.iter().map(|(_, batch)| batch.num_rows()).collect();
    assert_eq!(counts, vec![1, 2, 1]);

    // Each sheet carries exactly its category's columns
    let (_, diseases) = &sheets[1];
    let columns: Vec<String> = diseases
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().clone())
        .collect();
    let expected: Vec<String> = Category::Disease
        .field_names()
        .map(str::to_string)
        .collect();
    assert_eq!(columns, expected);
}

#[test]
fn test_workbook_artifact() {
    let store = sample_store();
    let outcome = exporter().export(&store, ExportFormat::Xlsx).unwrap();
    let artifact = outcome.artifact().unwrap();

    assert_eq!(artifact.file_name, "phenopacket_2024-06-01.xlsx");
    assert_eq!(
        artifact.mime_type(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(artifact.rows, 4);
    assert!(artifact.bytes.starts_with(b"PK"));
}

/// Read every sheet of a workbook back as rows of cell text
fn read_workbook(bytes: &[u8]) -> Vec<(String, Vec<Vec<String>>)> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec())).unwrap();
    workbook
        .sheet_names()
        .into_iter()
        .map(|name| {
            let range = workbook.worksheet_range(&name).unwrap();
            let rows = range
                .rows()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect();
            (name, rows)
        })
        .collect()
}

fn header(category: Category) -> Vec<String> {
    category.field_names().map(str::to_string).collect()
}

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn test_workbook_sheets_hold_rows_in_insertion_order() {
    let store = RecordStore::from_rows(vec![
        biosample("S1", "Blood"),
        disease("D1", "Asthma, severe \"x\"", "Ongoing"),
        phenotype("HP:0001250", "Seizure"),
        disease("D2", "Eczema", "Resolved"),
    ])
    .unwrap();
    let outcome = exporter().export(&store, ExportFormat::Xlsx).unwrap();
    let sheets = read_workbook(&outcome.artifact().unwrap().bytes);

    let names: Vec<&str> = sheets.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["pf", "d", "b"]);

    let (_, phenotypes) = &sheets[0];
    assert_eq!(phenotypes[0], header(Category::PhenotypicFeature));
    assert_eq!(
        phenotypes[1..],
        [cells(&["IND1", "HP:0001250", "Seizure", "False", "Infantile", "Moderate", "", ""])]
    );

    let (_, diseases) = &sheets[1];
    assert_eq!(diseases[0], header(Category::Disease));
    assert_eq!(
        diseases[1..],
        [
            cells(&["IND1", "D1", "Asthma, severe \"x\"", "Ongoing", "Mild", "", ""]),
            cells(&["IND1", "D2", "Eczema", "Resolved", "Mild", "", ""]),
        ]
    );

    let (_, biosamples) = &sheets[2];
    assert_eq!(biosamples[0], header(Category::Biosample));
    assert_eq!(
        biosamples[1..],
        [cells(&["S1", "IND1", "Routine collection", "Blood", "2024-05-01", ""])]
    );
}

#[test]
fn test_workbook_skips_empty_categories() {
    let mut store = sample_store();
    store.remove(Category::PhenotypicFeature, 0).unwrap();

    let outcome = exporter().export(&store, ExportFormat::Xlsx).unwrap();
    let sheets = read_workbook(&outcome.artifact().unwrap().bytes);

    let names: Vec<&str> = sheets.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["d", "b"]);
    assert_eq!(sheets[0].1.len(), 1 + 2);
}

#[test]
fn test_artifact_written_to_new_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("exports");

    let store = sample_store();
    let outcome = exporter().export(&store, ExportFormat::Csv).unwrap();
    let artifact = outcome.artifact().unwrap();
    let path = artifact.write_to_dir(&dir).unwrap();

    assert_eq!(path, dir.join("phenopacket_2024-06-01.csv"));
    assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
}

#[test]
fn test_export_does_not_change_store() {
    let store = sample_store();
    let before: Vec<_> = store.iter().map(|(c, rows)| (c, rows.to_vec())).collect();

    exporter().export(&store, ExportFormat::Csv).unwrap();
    exporter().export(&store, ExportFormat::Xlsx).unwrap();

    let after: Vec<_> = store.iter().map(|(c, rows)| (c, rows.to_vec())).collect();
    assert_eq!(before, after);
}
