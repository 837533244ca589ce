//! Calendar port
//!
//! Supplies the current date in the Hebrew calendar as display text.

/// Source of the current Hebrew date
pub trait CalendarPort: Send + Sync {
    /// e.g. `"Sunday 7 Marcheshvan 5787"`
    fn current_hebrew_date(&self) -> String;
}
