//! Presentation state: form fields, focus, toast and keyboard shortcuts.

use std::str::FromStr;
use std::time::{Duration, Instant};

use clinic_records_core::RecordForm;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// One of the four submission form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StudentId,
    StudentName,
    Consultation,
    Medicines,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::StudentId,
        FormField::StudentName,
        FormField::Consultation,
        FormField::Medicines,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::StudentId => "Student ID",
            FormField::StudentName => "Student Name",
            FormField::Consultation => "Consultation",
            FormField::Medicines => "Medicines",
        }
    }

    pub fn get<'a>(&self, form: &'a RecordForm) -> &'a str {
        match self {
            FormField::StudentId => &form.student_id,
            FormField::StudentName => &form.student_name,
            FormField::Consultation => &form.consultation,
            FormField::Medicines => &form.medicines,
        }
    }

    pub fn set(&self, form: &mut RecordForm, value: String) {
        match self {
            FormField::StudentId => form.student_id = value,
            FormField::StudentName => form.student_name = value,
            FormField::Consultation => form.consultation = value,
            FormField::Medicines => form.medicines = value,
        }
    }
}

impl FromStr for FormField {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "studentid" | "student-id" => Ok(FormField::StudentId),
            "name" | "studentname" | "student-name" => Ok(FormField::StudentName),
            "consultation" | "notes" => Ok(FormField::Consultation),
            "medicines" | "meds" => Ok(FormField::Medicines),
            _ => Err("Allowed fields: id, name, consultation, medicines"),
        }
    }
}

/// Where keyboard input is currently going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    Field(FormField),
    Search,
}

impl Focus {
    /// True when focus is in a text input (form field or search box).
    pub fn is_text_entry(&self) -> bool {
        !matches!(self, Focus::None)
    }
}

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + S
    Save,
    /// Ctrl/Cmd + F
    FocusSearch,
}

impl FromStr for Shortcut {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chord = s.to_ascii_lowercase();
        let (modifier, key) = chord
            .split_once('+')
            .ok_or("Shortcuts look like ctrl+s or cmd+f")?;
        if !matches!(modifier, "ctrl" | "cmd" | "meta") {
            return Err("Shortcuts use ctrl or cmd");
        }
        match key {
            "s" => Ok(Shortcut::Save),
            "f" => Ok(Shortcut::FocusSearch),
            _ => Err("Available shortcuts: ctrl+s, ctrl+f"),
        }
    }
}

/// What a shortcut does given the current focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SubmitForm,
    FocusSearch,
}

/// Resolve a shortcut against the current focus.
///
/// Save is ignored while a text input has focus.
pub fn resolve_shortcut(shortcut: Shortcut, focus: Focus) -> Option<ShortcutAction> {
    match shortcut {
        Shortcut::Save if focus.is_text_entry() => None,
        Shortcut::Save => Some(ShortcutAction::SubmitForm),
        Shortcut::FocusSearch => Some(ShortcutAction::FocusSearch),
    }
}

/// Transient status message.
#[derive(Debug, Clone)]
struct Toast {
    message: String,
    shown_at: Instant,
}

/// Holds the most recent toast; a newer one replaces the old.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            shown_at: now,
        });
    }

    /// The message still on screen at `now`, if any.
    pub fn visible(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|toast| now.saturating_duration_since(toast.shown_at) < TOAST_DURATION)
            .map(|toast| toast.message.as_str())
    }
}
