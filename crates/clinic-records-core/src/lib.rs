//! Clinic Records Core Library
//!
//! Local-first record keeper for school clinic visits.
//!
//! # Architecture
//!
//! ```text
//!   Presentation (form, search box, record actions)
//!                  │
//!                  ▼
//!   RecordManager ── add / delete / edit / search / print
//!                  │                    │
//!                  │                    └──► ChangeEvent ──► listeners
//!                  ▼
//!   RecordStore  ── in-memory list, newest first
//!                  │
//!                  ▼
//!   Database     ── SQLite slot "clinicRecords" (JSON array)
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite named-slot storage
//! - [`models`]: Domain types (ClinicRecord, RecordStatus, RecordForm)
//! - [`store`]: Ordered record collection and its persisted mirror
//! - [`manager`]: User-facing operations and change notifications
//! - [`render`]: Record list markup and printable documents

pub mod db;
pub mod manager;
pub mod models;
pub mod render;
pub mod store;

use std::path::Path;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult};
pub use manager::{ChangeEvent, RecordManager};
pub use models::{ClinicRecord, RecordForm, RecordStatus};
pub use render::PrintDocument;
pub use store::{RecordStore, RECORDS_SLOT};

/// Open or create a record database at the given path and wrap it in a manager.
pub fn open_manager<P: AsRef<Path>>(path: P) -> DbResult<RecordManager> {
    let store = RecordStore::open(Database::open(path)?)?;
    Ok(RecordManager::new(store))
}

/// Create a manager over an in-memory database (for testing).
pub fn open_manager_in_memory() -> DbResult<RecordManager> {
    let store = RecordStore::open(Database::open_in_memory()?)?;
    Ok(RecordManager::new(store))
}
