//! Plain-text rendering for the terminal.

use clinic_records_core::{ClinicRecord, RecordForm};

use crate::ui::FormField;

/// Render one record as a text card.
pub fn render_card(record: &ClinicRecord) -> String {
    format!(
        "[{status}] {name} (ID: {student_id})\n  \
         Record: {id}\n  \
         Date & Time: {datetime}\n  \
         Consultation: {consultation}\n  \
         Prescribed Medicines: {medicines}\n",
        status = record.status,
        name = record.student_name,
        student_id = record.student_id,
        id = record.id,
        datetime = record.datetime,
        consultation = record.consultation,
        medicines = record.medicines,
    )
}

/// Render a full list, replacing the previous one.
pub fn render_list(records: &[&ClinicRecord]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    records
        .iter()
        .map(|record| render_card(record))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Render the form with its current values.
pub fn render_form(form: &RecordForm) -> String {
    FormField::ALL
        .iter()
        .map(|field| {
            let label = format!("{}:", field.label());
            format!("  {:<13} {}\n", label, field.get(form))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_records_core::RecordStatus;

    #[test]
    fn test_render_card() {
        let record = ClinicRecord::new(
            RecordForm::new("S1", "Alice", "Flu", "Paracetamol"),
            RecordStatus::Active,
        );
        let text = render_card(&record);

        assert!(text.starts_with("[Active] Alice (ID: S1)\n"));
        assert!(text.contains(&format!("Record: {}", record.id)));
        assert!(text.contains("Consultation: Flu"));
        assert!(text.contains("Prescribed Medicines: Paracetamol"));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[]), "No records found.\n");
    }

    #[test]
    fn test_render_form() {
        let form = RecordForm::new("S1", "Alice", "", "");
        let text = render_form(&form);

        assert!(text.contains("Student ID:   S1"));
        assert!(text.contains("Student Name: Alice"));
        assert_eq!(text.lines().count(), 4);
    }
}
