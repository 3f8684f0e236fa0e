//! Change notifications emitted by the record manager.

/// Something the manager did that a presentation layer may want to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A record was created and stored at the front of the list.
    Added { id: String },
    /// A delete was requested. `removed` is false when no record matched.
    Deleted { id: String, removed: bool },
    /// A record's fields were handed back for re-entry and the original removed.
    LoadedForEditing { id: String },
    /// A printable document was produced.
    PrintRequested { id: String },
}

impl ChangeEvent {
    /// User-facing notice for this event.
    ///
    /// Deletes report success whether or not a record was removed.
    pub fn notice(&self) -> &'static str {
        match self {
            ChangeEvent::Added { .. } => "Record added successfully!",
            ChangeEvent::Deleted { .. } => "Record deleted successfully!",
            ChangeEvent::LoadedForEditing { .. } => "Record loaded for editing",
            ChangeEvent::PrintRequested { .. } => "Print window opened",
        }
    }

    /// Whether the record list changed and should be re-rendered.
    pub fn changes_records(&self) -> bool {
        matches!(
            self,
            ChangeEvent::Added { .. } | ChangeEvent::Deleted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_notice_is_unconditional() {
        let hit = ChangeEvent::Deleted {
            id: "a".into(),
            removed: true,
        };
        let miss = ChangeEvent::Deleted {
            id: "a".into(),
            removed: false,
        };
        assert_eq!(hit.notice(), miss.notice());
    }

    #[test]
    fn test_changes_records() {
        assert!(ChangeEvent::Added { id: "a".into() }.changes_records());
        assert!(!ChangeEvent::PrintRequested { id: "a".into() }.changes_records());
        assert!(!ChangeEvent::LoadedForEditing { id: "a".into() }.changes_records());
    }
}
