//! Clinic visit records.

use chrono::{DateTime, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::form::RecordForm;

/// Display format for record timestamps (e.g. `3/14/2025, 9:05:12 AM`).
pub const DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Format a timestamp the way records and printouts display it.
pub fn format_datetime(at: &DateTime<Local>) -> String {
    at.format(DATETIME_FORMAT).to_string()
}

/// Visit status, fixed when the record is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordStatus {
    #[serde(alias = "active", alias = "ACTIVE")]
    Active,
    #[serde(alias = "pending", alias = "PENDING")]
    Pending,
}

impl RecordStatus {
    /// Draw a status uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            RecordStatus::Active
        } else {
            RecordStatus::Pending
        }
    }

    /// Status label as persisted and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Pending => "Pending",
        }
    }

    /// Case-insensitive check against "active", used for badge styling.
    pub fn is_active(&self) -> bool {
        self.as_str().eq_ignore_ascii_case("active")
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One clinic visit entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicRecord {
    /// Unique record ID, assigned at creation
    pub id: String,
    /// Student identifier (free text, not unique)
    pub student_id: String,
    /// Student name
    pub student_name: String,
    /// Consultation notes
    pub consultation: String,
    /// Prescribed medicines
    pub medicines: String,
    /// Human-readable creation timestamp
    pub datetime: String,
    /// Visit status
    pub status: RecordStatus,
}

impl ClinicRecord {
    /// Create a new record from submitted form fields.
    pub fn new(form: RecordForm, status: RecordStatus) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: form.student_id,
            student_name: form.student_name,
            consultation: form.consultation,
            medicines: form.medicines,
            datetime: format_datetime(&Local::now()),
            status,
        }
    }

    /// Case-insensitive substring match on student ID or student name.
    ///
    /// An empty term matches every record.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.student_id.to_lowercase().contains(&needle)
            || self.student_name.to_lowercase().contains(&needle)
    }

    /// Copy the editable fields back into a form.
    pub fn to_form(&self) -> RecordForm {
        RecordForm {
            student_id: self.student_id.clone(),
            student_name: self.student_name.clone(),
            consultation: self.consultation.clone(),
            medicines: self.medicines.clone(),
        }
    }
}
