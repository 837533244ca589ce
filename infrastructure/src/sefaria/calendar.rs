//! Hebrew calendar adapter

use chrono::{Datelike, Local, NaiveDate};
use sefaria_application::ports::calendar::CalendarPort;
use sefaria_domain::calendar::HebrewDate;

/// [`CalendarPort`] backed by the local system clock
#[derive(Debug, Clone, Default)]
pub struct HebrewCalendar {
    fixed: Option<NaiveDate>,
}

impl HebrewCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always report `date` instead of today
    pub fn fixed(date: NaiveDate) -> Self {
        Self { fixed: Some(date) }
    }

    fn today(&self) -> NaiveDate {
        self.fixed.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl CalendarPort for HebrewCalendar {
    /// `"<Weekday> <day> <Month> <year>"`, e.g. `"Sunday 7 Marcheshvan 5787"`
    fn current_hebrew_date(&self) -> String {
        let today = self.today();
        let hebrew = HebrewDate::from_fixed(i64::from(today.num_days_from_ce()));
        format!("{} {}", today.format("%A"), hebrew)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let calendar = HebrewCalendar::fixed(date);
        assert_eq!(calendar.current_hebrew_date(), "Sunday 7 Marcheshvan 5787");
    }

    #[test]
    fn test_known_dates() {
        let cases = [
            ((2024, 10, 3), "Thursday 1 Tishrei 5785"),
            ((2025, 4, 13), "Sunday 15 Nisan 5785"),
            ((2024, 3, 24), "Sunday 14 Adar II 5784"),
            ((2026, 9, 12), "Saturday 1 Tishrei 5787"),
            ((2000, 1, 1), "Saturday 23 Tevet 5760"),
        ];

        for ((y, m, d), expected) in cases {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(HebrewCalendar::fixed(date).current_hebrew_date(), expected);
        }
    }

    #[test]
    fn test_today_is_formatted() {
        let text = HebrewCalendar::new().current_hebrew_date();
        // "<Weekday> <day> <Month> <year>"
        assert!(text.split_whitespace().count() >= 4);
    }
}
