//! Lead tracker tests.

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use bjround::leads::{
    FileStore, KeyValueStore, Lead, LeadColor, LeadTracker, MemoryStore, STORAGE_KEY,
};
use bjround::{LeadError, StoreError};

/// A store whose writes fail while `failing` is set.
#[derive(Debug, Default)]
struct FlakyStore {
    inner: MemoryStore,
    failing: Rc<Cell<bool>>,
}

impl FlakyStore {
    fn check(&self) -> Result<(), StoreError> {
        if self.failing.get() {
            return Err(io::Error::other("disk full").into());
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.check()?;
        self.inner.clear()
    }
}

fn tracker() -> LeadTracker<MemoryStore> {
    LeadTracker::open(MemoryStore::new()).unwrap()
}

#[test]
fn opens_empty_store() {
    let tracker = tracker();
    assert!(tracker.is_empty());
    assert!(tracker.store().is_empty());
}

#[test]
fn save_input_requires_url() {
    let mut tracker = tracker();

    assert!(matches!(
        tracker.save_input("   ", "notes"),
        Err(LeadError::Empty)
    ));
    assert!(tracker.is_empty());

    tracker.save_input("https://example.com", "call back").unwrap();
    assert_eq!(
        tracker.leads(),
        &[Lead::new("https://example.com", "call back")]
    );
}

#[test]
fn save_note_requires_text() {
    let mut tracker = tracker();

    assert!(matches!(tracker.save_note(" \n"), Err(LeadError::Empty)));
    tracker.save_note("remember pricing page").unwrap();

    let lead = tracker.get(0).unwrap();
    assert!(lead.url.is_empty());
    assert_eq!(lead.notes, "remember pricing page");
}

#[test]
fn save_tab_accepts_empty_notes() {
    let mut tracker = tracker();
    tracker.save_tab("https://rust-lang.org", "").unwrap();
    assert_eq!(tracker.get(0).unwrap().url, "https://rust-lang.org");
}

#[test]
fn every_change_is_persisted() {
    let mut tracker = tracker();
    tracker.save_input("https://a.example", "").unwrap();
    tracker.save_note("b").unwrap();

    let raw = tracker.store().get(STORAGE_KEY).unwrap().unwrap();
    let stored: Vec<Lead> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, tracker.leads());

    let reopened = LeadTracker::open(tracker.into_store()).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get(1).unwrap().notes, "b");
}

#[test]
fn update_trims_and_keeps_color() {
    let mut tracker = tracker();
    tracker.save_input("https://a.example", "old").unwrap();
    tracker.set_color(0, Some(LeadColor::Green)).unwrap();

    tracker.update(0, "  https://b.example ", " new note ").unwrap();
    let lead = tracker.get(0).unwrap();
    assert_eq!(lead.url, "https://b.example");
    assert_eq!(lead.notes, "new note");
    assert_eq!(lead.color, Some(LeadColor::Green));

    assert!(matches!(tracker.update(0, " ", ""), Err(LeadError::Empty)));
    assert_eq!(tracker.get(0).unwrap().url, "https://b.example");

    assert!(matches!(
        tracker.update(3, "x", "y"),
        Err(LeadError::NotFound { index: 3, len: 1 })
    ));
}

#[test]
fn delete_removes_by_index() {
    let mut tracker = tracker();
    for url in ["https://1.example", "https://2.example", "https://3.example"] {
        tracker.save_input(url, "").unwrap();
    }

    let removed = tracker.delete(1).unwrap();
    assert_eq!(removed.url, "https://2.example");
    let urls: Vec<&str> = tracker.leads().iter().map(|lead| lead.url.as_str()).collect();
    assert_eq!(urls, ["https://1.example", "https://3.example"]);

    assert!(matches!(
        tracker.delete(2),
        Err(LeadError::NotFound { index: 2, len: 2 })
    ));
}

#[test]
fn clear_wipes_the_whole_store() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark".to_string()).unwrap();
    let mut tracker = LeadTracker::open(store).unwrap();
    tracker.save_note("x").unwrap();

    tracker.clear().unwrap();
    assert!(tracker.is_empty());
    assert!(tracker.store().is_empty());
}

#[test]
fn reads_legacy_string_entries() {
    let mut store = MemoryStore::new();
    store
        .set(
            STORAGE_KEY,
            r#"["https://old.example", {"url": "https://new.example", "notes": "n"}, {}]"#
                .to_string(),
        )
        .unwrap();

    let tracker = LeadTracker::open(store).unwrap();
    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.get(0).unwrap(), &Lead::new("https://old.example", ""));
    assert_eq!(tracker.get(1).unwrap().notes, "n");
    assert!(tracker.get(2).unwrap().is_blank());
}

#[test]
fn failed_writes_leave_list_and_store_in_step() {
    let failing = Rc::new(Cell::new(false));
    let store = FlakyStore {
        inner: MemoryStore::new(),
        failing: Rc::clone(&failing),
    };
    let mut tracker = LeadTracker::open(store).unwrap();
    tracker.save_note("kept").unwrap();
    let saved = tracker.store().get(STORAGE_KEY).unwrap();

    failing.set(true);
    assert!(matches!(tracker.save_note("lost"), Err(LeadError::Store(_))));
    assert!(matches!(tracker.save_tab("https://lost.example", ""), Err(LeadError::Store(_))));
    assert!(tracker.update(0, "", "changed").is_err());
    assert!(tracker.set_color(0, Some(LeadColor::Blue)).is_err());
    assert!(tracker.delete(0).is_err());
    assert!(tracker.clear().is_err());

    assert_eq!(tracker.leads(), &[Lead::new("", "kept")]);
    assert_eq!(tracker.store().get(STORAGE_KEY).unwrap(), saved);

    failing.set(false);
    assert_eq!(tracker.delete(0).unwrap().notes, "kept");
    assert!(tracker.is_empty());
}

#[test]
fn null_text_fields_read_as_empty() {
    let mut store = MemoryStore::new();
    store
        .set(
            STORAGE_KEY,
            r#"[{"url": null, "notes": "n"}, {"url": "https://a.example", "notes": null, "color": null}]"#
                .to_string(),
        )
        .unwrap();

    let tracker = LeadTracker::open(store).unwrap();
    assert_eq!(
        tracker.leads(),
        &[Lead::new("", "n"), Lead::new("https://a.example", "")]
    );
}

#[test]
fn null_list_reads_as_empty() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, "null".to_string()).unwrap();
    assert!(LeadTracker::open(store).unwrap().is_empty());
}

#[test]
fn malformed_list_is_an_error() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, "{not json".to_string()).unwrap();
    assert!(matches!(
        LeadTracker::open(store),
        Err(LeadError::Store(_))
    ));
}

#[test]
fn color_is_stored_lowercase_and_omitted_when_unset() {
    let mut tracker = tracker();
    tracker.save_note("plain").unwrap();
    tracker.save_note("tagged").unwrap();
    tracker.set_color(1, Some(LeadColor::Purple)).unwrap();

    let raw = tracker.to_json().unwrap();
    assert_eq!(
        raw,
        r#"[{"url":"","notes":"plain"},{"url":"","notes":"tagged","color":"purple"}]"#
    );

    tracker.set_color(1, None).unwrap();
    assert_eq!(tracker.get(1).unwrap().color, None);
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");

    let mut tracker = LeadTracker::open(FileStore::new(&path)).unwrap();
    assert!(tracker.is_empty());
    tracker.save_input("https://file.example", "saved").unwrap();
    tracker.set_color(0, Some(LeadColor::Red)).unwrap();

    let reopened = LeadTracker::open(FileStore::new(&path)).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get(0).unwrap().color, Some(LeadColor::Red));
    assert_eq!(reopened.store().path(), path.as_path());

    let mut reopened = reopened;
    reopened.clear().unwrap();
    assert!(LeadTracker::open(FileStore::new(&path)).unwrap().is_empty());
}
