use chrono::NaiveDateTime;

/// Common view over every record kind handled by the list engine and the
/// editor.
pub trait Record: Clone {
    fn id(&self) -> &str;

    /// Branch scope tag. Records without one are only visible to admins.
    fn branch(&self) -> Option<&str> {
        None
    }

    /// Timestamp used by the calendar-day filter.
    fn recorded_at(&self) -> Option<NaiveDateTime> {
        None
    }
}
