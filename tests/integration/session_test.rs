//! Tests for a full entry session
//!
//! Forms are filled and submitted, rows selected and deleted, and the
//! session exported, all through the library surface.

use chrono::NaiveDate;

use phenopacket_entry::{
    Category, CategoryCollection, EntryError, ExportFormat, Exporter, Session,
};

fn submit_individual(session: &mut Session, id: &str) {
    let draft = session
        .draft(Category::Individual)
        .with("IndividualID", id)
        .and_then(|d| d.with("AgeDays", "420"))
        .and_then(|d| d.with("Sex", "Female"))
        .unwrap();
    session.submit(draft).unwrap();
}

fn submit_measurement(session: &mut Session, kind: &str, value: &str) {
    let draft = session
        .draft(Category::Measurement)
        .with("Type", kind)
        .and_then(|d| d.with("Value", value))
        .and_then(|d| d.with("Interpretation", "Normal"))
        .unwrap();
    session.submit(draft).unwrap();
}

#[test]
fn test_rows_follow_the_current_individual() {
    let mut session = Session::new();
    submit_individual(&mut session, "IND1");
    submit_measurement(&mut session, "Height", "76");

    submit_individual(&mut session, "IND2");
    submit_measurement(&mut session, "Weight", "9.8");

    let store = session.store();
    assert_eq!(store.len(Category::Individual), 2);
    assert_eq!(
        store.get(Category::Measurement, 0).unwrap().individual_id(),
        Some("IND1")
    );
    assert_eq!(
        store.get(Category::Measurement, 1).unwrap().individual_id(),
        Some("IND2")
    );
}

#[test]
fn test_select_then_delete() {
    let mut session = Session::new();
    submit_individual(&mut session, "IND1");
    for value in ["1", "2", "3"] {
        submit_measurement(&mut session, "Height", value);
    }

    session.select(Category::Measurement, 1).unwrap();
    let removed = session.delete_selected(Category::Measurement).unwrap();
    assert_eq!(removed.get("Value"), Some("2"));
    assert_eq!(session.selected(Category::Measurement), None);

    let remaining: Vec<&str> = session
        .store()
        .rows(Category::Measurement)
        .iter()
        .filter_map(|stored| stored.row.get("Value"))
        .collect();
    assert_eq!(remaining, vec!["1", "3"]);

    // Nothing is selected any more
    assert!(session.delete_selected(Category::Measurement).is_none());
    assert_eq!(session.store().len(Category::Measurement), 2);
}

#[test]
fn test_select_out_of_range_is_rejected() {
    let mut session = Session::new();
    let err = session.select(Category::Pedigree, 0).unwrap_err();
    assert!(matches!(err, EntryError::IndexOutOfRange { len: 0, .. }));
    assert_eq!(session.selected(Category::Pedigree), None);
}

#[test]
fn test_invalid_choice_never_reaches_the_store() {
    let mut session = Session::new();
    let mut draft = session.draft(Category::GenomicInterpretation);
    let err = draft.set("Zygosity", "Hemizygous").unwrap_err();
    assert!(matches!(err, EntryError::InvalidChoice { .. }));

    draft.set("Gene", "SCN1A").unwrap();
    session.submit(draft).unwrap();

    let row = session.store().get(Category::GenomicInterpretation, 0).unwrap();
    assert_eq!(row.get("Zygosity"), Some(""));
    assert_eq!(row.get("Gene"), Some("SCN1A"));
}

#[test]
fn test_remove_by_id_survives_earlier_removals() {
    let mut session = Session::new();
    submit_individual(&mut session, "IND1");
    submit_measurement(&mut session, "Height", "1");
    submit_measurement(&mut session, "Height", "2");
    let draft = session
        .draft(Category::Measurement)
        .with("Value", "3")
        .unwrap();
    let third = session.submit(draft).unwrap();

    session.remove(Category::Measurement, 0);
    let removed = session.remove_by_id(third).unwrap();
    assert_eq!(removed.get("Value"), Some("3"));
    assert_eq!(session.store().len(Category::Measurement), 1);
    assert!(session.remove_by_id(third).is_none());
}

#[test]
fn test_export_after_reset_is_empty() {
    let mut session = Session::new();
    submit_individual(&mut session, "IND1");
    let exporter = Exporter::default().with_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

    let outcome = session.export(&exporter, ExportFormat::Csv).unwrap();
    assert_eq!(outcome.artifact().unwrap().rows, 1);

    session.reset();
    assert_eq!(session.current_individual(), "IND1");
    let outcome = session.export(&exporter, ExportFormat::Xlsx).unwrap();
    assert!(outcome.artifact().is_none());
}
