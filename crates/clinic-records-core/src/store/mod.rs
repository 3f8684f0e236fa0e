//! Record store: the in-memory record sequence and its persisted mirror.

use crate::db::{Database, DbResult};
use crate::models::ClinicRecord;

/// Slot holding the JSON array of records.
pub const RECORDS_SLOT: &str = "clinicRecords";

/// Ordered collection of clinic records, newest first.
pub struct RecordStore {
    db: Database,
    records: Vec<ClinicRecord>,
}

impl RecordStore {
    /// Open a store over a database, loading any persisted records.
    pub fn open(db: Database) -> DbResult<Self> {
        let mut store = Self {
            db,
            records: Vec::new(),
        };
        store.records = store.load()?;
        log::info!("Loaded {} clinic records", store.records.len());
        Ok(store)
    }

    /// Read the persisted sequence.
    ///
    /// Returns an empty sequence when nothing has been persisted yet or when
    /// the persisted payload cannot be parsed.
    pub fn load(&self) -> DbResult<Vec<ClinicRecord>> {
        let Some(payload) = self.db.get_slot(RECORDS_SLOT)? else {
            log::debug!("No persisted records, starting empty");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<ClinicRecord>>(&payload) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!("Discarding unreadable persisted records: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Serialize and persist a full sequence, overwriting prior state.
    pub fn save(&self, records: &[ClinicRecord]) -> DbResult<()> {
        let payload = serde_json::to_string(records)?;
        self.db.put_slot(RECORDS_SLOT, &payload)?;
        log::debug!("Persisted {} clinic records", records.len());
        Ok(())
    }

    /// Current in-memory sequence.
    pub fn all(&self) -> &[ClinicRecord] {
        &self.records
    }

    /// Find a record by ID.
    pub fn find(&self, id: &str) -> Option<&ClinicRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Current sequence in the persisted JSON format, pretty-printed.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }

    /// Write the current sequence to durable storage.
    pub(crate) fn persist(&self) -> DbResult<()> {
        self.save(&self.records)
    }

    pub(crate) fn insert_front(&mut self, record: ClinicRecord) {
        self.records.insert(0, record);
    }

    /// Remove the record with this ID, if any.
    pub(crate) fn remove(&mut self, id: &str) -> Option<ClinicRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordForm, RecordStatus};

    fn setup_store() -> RecordStore {
        RecordStore::open(Database::open_in_memory().unwrap()).unwrap()
    }

    fn make_record(student_id: &str, student_name: &str) -> ClinicRecord {
        ClinicRecord::new(
            RecordForm::new(student_id, student_name, "Checkup", "None"),
            RecordStatus::Pending,
        )
    }

    #[test]
    fn test_empty_on_first_run() {
        let store = setup_store();
        assert!(store.all().is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let store = setup_store();
        let records = vec![make_record("S2", "Bob"), make_record("S1", "Alice")];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_malformed_payload_loads_empty() {
        let db = Database::open_in_memory().unwrap();
        db.put_slot(RECORDS_SLOT, "{not json").unwrap();

        let store = RecordStore::open(db).unwrap();
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let db = Database::open_in_memory().unwrap();
        db.put_slot(RECORDS_SLOT, r#"[{"id": "1"}]"#).unwrap();

        let store = RecordStore::open(db).unwrap();
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_insert_front_and_remove() {
        let mut store = setup_store();
        let a = make_record("S1", "Alice");
        let b = make_record("S2", "Bob");

        store.insert_front(a.clone());
        store.insert_front(b.clone());
        assert_eq!(store.all(), &[b.clone(), a.clone()]);

        assert_eq!(store.remove(&a.id), Some(a.clone()));
        assert_eq!(store.remove(&a.id), None);
        assert_eq!(store.all(), &[b]);
    }

    #[test]
    fn test_persist_mirrors_memory() {
        let mut store = setup_store();
        store.insert_front(make_record("S1", "Alice"));
        store.persist().unwrap();

        assert_eq!(store.load().unwrap(), store.all());
    }

    #[test]
    fn test_to_json_uses_persisted_keys() {
        let mut store = setup_store();
        store.insert_front(make_record("S1", "Alice"));

        let json = store.to_json().unwrap();
        assert!(json.contains("\"studentId\": \"S1\""));
        assert!(json.contains("\"studentName\": \"Alice\""));
    }
}
