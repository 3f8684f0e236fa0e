//! Record list cards.

use super::escape_html;
use crate::models::{ClinicRecord, RecordStatus};

/// Action a card offers for its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Delete,
    Edit,
    Print,
}

impl CardAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardAction::Delete => "delete",
            CardAction::Edit => "edit",
            CardAction::Print => "print",
        }
    }
}

/// CSS class of the status badge.
pub fn status_badge_class(status: RecordStatus) -> &'static str {
    if status.is_active() {
        "status-active"
    } else {
        "status-pending"
    }
}

/// Render one record card.
pub fn render_card(record: &ClinicRecord) -> String {
    let id = escape_html(&record.id);
    format!(
        r#"<div class="record-card" data-record-id="{id}">
    <button class="delete-btn" data-action="{delete}" data-record-id="{id}">Delete</button>
    <h3>
        {name}
        <small>(ID: {student_id})</small>
        <span class="status-badge {badge}">{status}</span>
    </h3>
    <p><strong>Date &amp; Time:</strong> {datetime}</p>
    <p><strong>Consultation:</strong> {consultation}</p>
    <p><strong>Prescribed Medicines:</strong> {medicines}</p>
    <div class="record-actions">
        <button data-action="{edit}" data-record-id="{id}">Edit</button>
        <button data-action="{print}" data-record-id="{id}">Print</button>
    </div>
</div>
"#,
        id = id,
        delete = CardAction::Delete.as_str(),
        edit = CardAction::Edit.as_str(),
        print = CardAction::Print.as_str(),
        name = escape_html(&record.student_name),
        student_id = escape_html(&record.student_id),
        badge = status_badge_class(record.status),
        status = record.status,
        datetime = escape_html(&record.datetime),
        consultation = escape_html(&record.consultation),
        medicines = escape_html(&record.medicines),
    )
}

/// Render the full record list, replacing whatever was displayed before.
pub fn render_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a ClinicRecord>,
{
    records.into_iter().map(render_card).collect()
}
