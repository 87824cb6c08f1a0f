use performans_core::model::note::validate_timestamp;
use performans_core::{InvalidInputError, NoteStore, NoteStoreError, StoreLocation};
use std::collections::HashSet;

#[test]
fn append_empty_text_is_invalid_input() {
    let store = NoteStore::open_in_memory().unwrap();

    for text in ["", "   ", "\n\t"] {
        let err = store.append(text).unwrap_err();
        assert!(matches!(
            err,
            NoteStoreError::InvalidInput(InvalidInputError::EmptyNoteText)
        ));
    }
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn append_then_recent_one_returns_the_note() {
    let store = NoteStore::open_in_memory().unwrap();
    let appended = store.append("hello").unwrap();

    let recent = store.recent(1).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].text, "hello");
    assert_eq!(recent[0], appended);
    assert!(validate_timestamp(&appended.timestamp).is_ok());
}

#[test]
fn recent_is_newest_first() {
    let store = NoteStore::open_in_memory().unwrap();
    store.append("A").unwrap();
    store.append("B").unwrap();
    store.append("C").unwrap();

    let texts: Vec<_> = store
        .recent(2)
        .unwrap()
        .into_iter()
        .map(|note| note.text)
        .collect();
    assert_eq!(texts, vec!["C".to_string(), "B".to_string()]);
}

#[test]
fn recent_orders_by_timestamp_before_id() {
    let store = NoteStore::open_in_memory().unwrap();
    store.append_at("later", "2026-05-02 10:00:00").unwrap();
    store.append_at("earlier", "2026-05-01 10:00:00").unwrap();

    let recent = store.recent(5).unwrap();
    assert_eq!(recent[0].text, "later");
    assert_eq!(recent[1].text, "earlier");
}

#[test]
fn append_at_rejects_malformed_timestamp_without_writing() {
    let store = NoteStore::open_in_memory().unwrap();
    store.append_at("real", "2026-05-01 10:00:00").unwrap();

    for timestamp in ["not-a-time", "9999-99-99", "2026-05-01 10:00", ""] {
        let err = store.append_at("wish", timestamp).unwrap_err();
        assert!(matches!(
            err,
            NoteStoreError::InvalidInput(InvalidInputError::MalformedTimestamp(ref value))
                if value == timestamp
        ));
    }
    assert_eq!(store.count().unwrap(), 1);

    store.append_at("next", "2026-05-01 11:00:00").unwrap();
    let recent = store.recent(5).unwrap();
    assert_eq!(recent[0].text, "next");
    assert_eq!(recent[1].text, "real");
}

#[test]
fn recent_larger_than_total_returns_everything() {
    let store = NoteStore::open_in_memory().unwrap();
    for idx in 0..3 {
        store.append(&format!("note {idx}")).unwrap();
    }

    let recent = store.recent(50).unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].text, "note 2");
    assert_eq!(recent[2].text, "note 0");
    assert_eq!(store.recent(i64::MAX).unwrap().len(), 3);
}

#[test]
fn recent_rejects_non_positive_counts() {
    let store = NoteStore::open_in_memory().unwrap();
    for count in [0, -1, i64::MIN] {
        let err = store.recent(count).unwrap_err();
        assert!(matches!(
            err,
            NoteStoreError::InvalidInput(InvalidInputError::NonPositiveRetrievalCount(value))
                if value == count
        ));
    }
}

#[test]
fn recent_never_exceeds_bounds() {
    let store = NoteStore::open_in_memory().unwrap();
    for idx in 0..7 {
        store.append(&format!("intention {idx}")).unwrap();
    }
    let total = store.count().unwrap() as usize;

    for n in 1..=10_i64 {
        let len = store.recent(n).unwrap().len();
        assert!(len <= n as usize);
        assert!(len >= (n as usize).min(total));
    }
}

#[test]
fn ids_are_unique_and_strictly_increasing() {
    let store = NoteStore::open_in_memory().unwrap();
    let ids: Vec<_> = (0..20)
        .map(|idx| store.append(&format!("n{idx}")).unwrap().id)
        .collect();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
}

#[test]
fn every_appended_note_is_retrievable_with_identical_text() {
    let store = NoteStore::open_in_memory().unwrap();
    let texts = ["Zdrowie i obfitość", "  padded  ", "multi\nline", "🙂"];
    for text in texts {
        store.append(text).unwrap();
    }

    let stored: Vec<_> = store
        .recent(texts.len() as i64)
        .unwrap()
        .into_iter()
        .map(|note| note.text)
        .collect();
    for text in texts {
        assert!(stored.iter().any(|value| value == text));
    }
}

#[test]
fn file_store_survives_close_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");

    let store = NoteStore::open(&path).unwrap();
    assert_eq!(store.location(), &StoreLocation::File(path.clone()));
    let first = store.append("persisted").unwrap();
    store.close().unwrap();

    let reopened = NoteStore::open(&path).unwrap();
    let second = reopened.append("after reopen").unwrap();
    assert!(second.id > first.id);
    let recent = reopened.recent(5).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[1].text, "persisted");
    reopened.close().unwrap();
}
