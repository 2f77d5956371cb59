//! A persisted list of lead notes: a URL, free text and an optional color tag.
//!
//! [`LeadTracker`] keeps the list in memory and writes the whole list to a
//! [`KeyValueStore`] under [`STORAGE_KEY`] after every change.
//!
//! ```
//! use bjround::leads::{LeadTracker, MemoryStore};
//!
//! let mut tracker = LeadTracker::open(MemoryStore::new()).unwrap();
//! tracker.save_input("https://example.com", "call back").unwrap();
//! assert_eq!(tracker.len(), 1);
//! ```

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LeadError;

mod store;

#[cfg(feature = "std")]
pub use store::FileStore;
pub use store::{KeyValueStore, MemoryStore};

/// Key the list is stored under.
pub const STORAGE_KEY: &str = "myLeads";

/// Color tag for a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadColor {
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
}

/// A saved lead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Page address; empty for note-only leads.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Free text; may be empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    /// Optional color tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<LeadColor>,
}

impl Lead {
    /// Creates an untagged lead.
    #[must_use]
    pub fn new(url: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            notes: notes.into(),
            color: None,
        }
    }

    /// Returns whether the lead has neither a URL nor notes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.url.is_empty() && self.notes.is_empty()
    }
}

/// Reads a `null` text field as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// On-disk form of a lead. Older lists stored bare URL strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLead {
    Url(String),
    Full(Lead),
}

impl From<StoredLead> for Lead {
    fn from(stored: StoredLead) -> Self {
        match stored {
            StoredLead::Url(url) => Self::new(url, String::new()),
            StoredLead::Full(lead) => lead,
        }
    }
}

/// An ordered list of leads persisted to a key-value store.
#[derive(Debug)]
pub struct LeadTracker<S> {
    store: S,
    leads: Vec<Lead>,
}

impl<S: KeyValueStore> LeadTracker<S> {
    /// Loads the list saved in `store`, or starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds malformed data.
    pub fn open(store: S) -> Result<Self, LeadError> {
        let leads = match store.get(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str::<Option<Vec<StoredLead>>>(&raw)
                .map_err(crate::error::StoreError::from)?
                .unwrap_or_default()
                .into_iter()
                .map(Lead::from)
                .collect(),
            None => Vec::new(),
        };
        tracing::debug!(count = leads.len(), "leads loaded");

        Ok(Self { store, leads })
    }

    /// Returns all leads in insertion order.
    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Returns the lead at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Lead> {
        self.leads.get(index)
    }

    /// Returns the number of leads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    /// Returns whether there are no leads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Saves a typed URL with optional notes.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Empty`] if `url` is blank, or a store error.
    pub fn save_input(&mut self, url: &str, notes: &str) -> Result<(), LeadError> {
        if url.trim().is_empty() {
            return Err(LeadError::Empty);
        }
        self.push(Lead::new(url, notes))
    }

    /// Saves a note without a URL.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Empty`] if `notes` is blank, or a store error.
    pub fn save_note(&mut self, notes: &str) -> Result<(), LeadError> {
        if notes.trim().is_empty() {
            return Err(LeadError::Empty);
        }
        self.push(Lead::new(String::new(), notes))
    }

    /// Saves the URL of the active browser tab with optional notes.
    ///
    /// # Errors
    ///
    /// Returns a store error if the list cannot be persisted.
    pub fn save_tab(&mut self, url: &str, notes: &str) -> Result<(), LeadError> {
        self.push(Lead::new(url, notes))
    }

    fn push(&mut self, lead: Lead) -> Result<(), LeadError> {
        let url = lead.url.clone();
        let mut leads = self.leads.clone();
        leads.push(lead);
        self.commit(leads)?;
        tracing::debug!(%url, "lead saved");
        Ok(())
    }

    /// Replaces the URL and notes of a lead. Both are trimmed; the color tag
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::NotFound`] for a bad index, [`LeadError::Empty`]
    /// if both fields are blank, or a store error.
    pub fn update(&mut self, index: usize, url: &str, notes: &str) -> Result<(), LeadError> {
        let (url, notes) = (url.trim(), notes.trim());
        self.ensure_index(index)?;
        if url.is_empty() && notes.is_empty() {
            return Err(LeadError::Empty);
        }

        self.edit(index, |lead| {
            lead.url = url.to_string();
            lead.notes = notes.to_string();
        })?;
        tracing::debug!(index, "lead updated");
        Ok(())
    }

    /// Sets or removes the color tag of a lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::NotFound`] for a bad index, or a store error.
    pub fn set_color(&mut self, index: usize, color: Option<LeadColor>) -> Result<(), LeadError> {
        self.edit(index, |lead| lead.color = color)
    }

    /// Removes and returns a lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::NotFound`] for a bad index, or a store error.
    pub fn delete(&mut self, index: usize) -> Result<Lead, LeadError> {
        self.ensure_index(index)?;
        let mut leads = self.leads.clone();
        let lead = leads.remove(index);
        self.commit(leads)?;
        tracing::debug!(index, "lead deleted");
        Ok(lead)
    }

    /// Removes every lead and wipes the store.
    ///
    /// # Errors
    ///
    /// Returns a store error if the store cannot be cleared.
    pub fn clear(&mut self) -> Result<(), LeadError> {
        self.store.clear()?;
        self.leads.clear();
        tracing::debug!("leads cleared");
        Ok(())
    }

    /// Returns the backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the tracker and returns the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the list encoded the way it is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_json(&self) -> Result<String, LeadError> {
        encode(&self.leads)
    }

    fn ensure_index(&self, index: usize) -> Result<(), LeadError> {
        let len = self.leads.len();
        if index < len {
            Ok(())
        } else {
            Err(LeadError::NotFound { index, len })
        }
    }

    fn edit(&mut self, index: usize, edit: impl FnOnce(&mut Lead)) -> Result<(), LeadError> {
        self.ensure_index(index)?;
        let mut leads = self.leads.clone();
        if let Some(lead) = leads.get_mut(index) {
            edit(lead);
        }
        self.commit(leads)
    }

    /// Writes `leads` to the store and only then makes it the current list.
    fn commit(&mut self, leads: Vec<Lead>) -> Result<(), LeadError> {
        let raw = encode(&leads)?;
        self.store.set(STORAGE_KEY, raw)?;
        self.leads = leads;
        Ok(())
    }
}

fn encode(leads: &[Lead]) -> Result<String, LeadError> {
    serde_json::to_string(leads).map_err(|err| LeadError::Store(err.into()))
}
