//! Submission form fields.

/// The four editable fields of a clinic visit.
///
/// No validation is applied; empty strings are accepted for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub student_id: String,
    pub student_name: String,
    pub consultation: String,
    pub medicines: String,
}

impl RecordForm {
    /// Build a form from field values.
    pub fn new(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        consultation: impl Into<String>,
        medicines: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
            consultation: consultation.into(),
            medicines: medicines.into(),
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut form = RecordForm::new("S1", "Alice", "Flu", "Paracetamol");
        assert_ne!(form, RecordForm::default());
        form.reset();
        assert_eq!(form, RecordForm::default());
    }
}
