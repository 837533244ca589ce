//! Calendar arithmetic used by `get_situational_info`

pub mod hebrew;

pub use hebrew::HebrewDate;
