//! Adapters for the Sefaria library service

pub mod calendar;
pub mod gateway;

pub use calendar::HebrewCalendar;
pub use gateway::HttpLibraryGateway;
