//! Standalone printable documents.

use chrono::{DateTime, Local};

use super::escape_html;
use crate::models::{format_datetime, ClinicRecord};

/// A printable page for a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    /// Record the document was generated from
    pub record_id: String,
    /// Page title
    pub title: String,
    /// Generation timestamp, display formatted
    pub generated_at: String,
    /// Complete HTML page
    pub html: String,
}

impl PrintDocument {
    /// Build the printable page for a record.
    pub fn for_record(record: &ClinicRecord, generated_at: &DateTime<Local>) -> Self {
        let title = format!("Medical Record - {}", record.student_name);
        let generated_at = format_datetime(generated_at);

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{ font-family: Arial, sans-serif; padding: 20px; }}
        .header {{ text-align: center; margin-bottom: 20px; }}
        .content {{ margin-bottom: 15px; }}
        .footer {{ margin-top: 50px; text-align: center; }}
        @media print {{
            .no-print {{ display: none; }}
        }}
    </style>
</head>
<body>
    <div class="header">
        <h1>School Clinic Medical Record</h1>
        <p>Generated on: {generated_at}</p>
    </div>
    <div class="content">
        <h2>Student Information</h2>
        <p><strong>Name:</strong> {name}</p>
        <p><strong>ID:</strong> {student_id}</p>
        <p><strong>Visit Date:</strong> {datetime}</p>

        <h2>Medical Details</h2>
        <p><strong>Consultation Notes:</strong></p>
        <p>{consultation}</p>

        <h2>Prescription</h2>
        <p>{medicines}</p>
    </div>
    <div class="footer">
        <p>School Clinic Management System</p>
    </div>
    <div class="no-print" style="text-align: center; margin-top: 20px;">
        <button onclick="window.print()">Print Record</button>
    </div>
</body>
</html>
"#,
            title = escape_html(&title),
            generated_at = escape_html(&generated_at),
            name = escape_html(&record.student_name),
            student_id = escape_html(&record.student_id),
            datetime = escape_html(&record.datetime),
            consultation = escape_html(&record.consultation),
            medicines = escape_html(&record.medicines),
        );

        Self {
            record_id: record.id.clone(),
            title,
            generated_at,
            html,
        }
    }

    /// File name for saving this document.
    ///
    /// Characters outside `[A-Za-z0-9_-]` in the record ID become `_`, so the
    /// name never contains a path separator or `..`.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .record_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("record-{}.html", stem)
    }
}
