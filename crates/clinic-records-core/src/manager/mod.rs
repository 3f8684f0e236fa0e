//! Record manager: the user-facing operations over the record store.
//!
//! Every mutation is applied to the in-memory sequence first and then
//! persisted. Presentation code learns about changes through
//! [`RecordManager::subscribe`] and re-renders from [`RecordManager::render`].

mod events;

pub use events::*;

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::db::DbResult;
use crate::models::{ClinicRecord, RecordForm, RecordStatus};
use crate::render::{render_records, PrintDocument};
use crate::store::RecordStore;

type Listener = Box<dyn FnMut(&ChangeEvent)>;

/// Create, delete, edit, search and print clinic records.
pub struct RecordManager {
    store: RecordStore,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl RecordManager {
    /// Create a manager over a store, seeding status assignment from OS entropy.
    pub fn new(store: RecordStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Create a manager with an explicit RNG for status assignment.
    pub fn with_rng(store: RecordStore, rng: StdRng) -> Self {
        Self {
            store,
            rng,
            listeners: Vec::new(),
        }
    }

    /// Register a listener called after every operation that emits an event.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// All records, newest first.
    pub fn records(&self) -> &[ClinicRecord] {
        self.store.all()
    }

    /// Underlying store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Create a record from form fields and store it at the front of the list.
    pub fn add(&mut self, form: RecordForm) -> DbResult<ClinicRecord> {
        let status = RecordStatus::random(&mut self.rng);
        let mut record = ClinicRecord::new(form, status);
        while self.store.find(&record.id).is_some() {
            record.id = uuid::Uuid::new_v4().to_string();
        }

        self.store.insert_front(record.clone());
        self.store.persist()?;
        log::info!(
            "Added record {} for student {} ({})",
            record.id,
            record.student_id,
            record.status
        );

        self.emit(ChangeEvent::Added {
            id: record.id.clone(),
        });
        Ok(record)
    }

    /// Delete the record with this ID.
    ///
    /// A missing ID is not an error; the returned flag says whether anything
    /// was removed, and the change notification is emitted either way.
    pub fn delete(&mut self, id: &str) -> DbResult<bool> {
        let removed = self.store.remove(id).is_some();
        self.store.persist()?;
        if removed {
            log::info!("Deleted record {}", id);
        } else {
            log::debug!("Delete of unknown record {}", id);
        }

        self.emit(ChangeEvent::Deleted {
            id: id.to_string(),
            removed,
        });
        Ok(removed)
    }

    /// Hand a record's fields back for re-entry and discard the original.
    ///
    /// The record is gone until the returned form is submitted again through
    /// [`RecordManager::add`]. Unknown IDs return `None` and emit nothing.
    pub fn edit(&mut self, id: &str) -> DbResult<Option<RecordForm>> {
        let Some(record) = self.store.find(id) else {
            log::debug!("Edit of unknown record {}", id);
            return Ok(None);
        };
        let form = record.to_form();

        self.delete(id)?;
        self.emit(ChangeEvent::LoadedForEditing { id: id.to_string() });
        Ok(Some(form))
    }

    /// Records whose student ID or name contains `term`, case-insensitively.
    pub fn search(&self, term: &str) -> Vec<&ClinicRecord> {
        self.store
            .all()
            .iter()
            .filter(|record| record.matches(term))
            .collect()
    }

    /// Markup for the records matching `term`.
    pub fn render(&self, term: &str) -> String {
        render_records(self.search(term))
    }

    /// Build a printable document for a record. Unknown IDs return `None`.
    pub fn print(&mut self, id: &str) -> Option<PrintDocument> {
        let document = PrintDocument::for_record(self.store.find(id)?, &Local::now());
        self.emit(ChangeEvent::PrintRequested { id: id.to_string() });
        Some(document)
    }

    fn emit(&mut self, event: ChangeEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
