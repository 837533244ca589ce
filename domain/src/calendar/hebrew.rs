//! Arithmetic Hebrew calendar
//!
//! Dates are converted through fixed day numbers (day 1 = 1 January of year 1
//! in the proleptic Gregorian calendar, as `chrono`'s `num_days_from_ce`
//! counts them). Months are numbered from Nisan = 1;
//! the year starts at Tishrei = 7, and leap years add Adar II = 13.

use std::fmt;

/// Fixed day number of 1 Tishrei AM 1
const HEBREW_EPOCH: i64 = -1_373_427;

/// Parts in an hour and day (1 hour = 1080 parts)
const PARTS_PER_DAY: i64 = 25_920;

/// Mean lunar month in parts, minus whole days: 29d 12h 793p
const MONTH_PARTS: i64 = 13_753;

/// Parts offset of the first molad (BaHaRaD)
const MOLAD_BEHARAD_PARTS: i64 = 12_084;

pub fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

fn last_month_of_year(year: i64) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad of Tishrei, with the weekday postponement.
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (235 * year - 234).div_euclid(19);
    let parts_elapsed = MOLAD_BEHARAD_PARTS + MONTH_PARTS * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Delay keeping year lengths within the permitted set.
fn year_length_correction(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed day number of 1 Tishrei of `year`.
pub fn new_year(year: i64) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

pub fn days_in_year(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

fn long_marcheshvan(year: i64) -> bool {
    matches!(days_in_year(year), 355 | 385)
}

fn short_kislev(year: i64) -> bool {
    matches!(days_in_year(year), 353 | 383)
}

pub fn days_in_month(year: i64, month: u8) -> u8 {
    let short = matches!(month, 2 | 4 | 6 | 10 | 13)
        || (month == 12 && !is_leap_year(year))
        || (month == 8 && !long_marcheshvan(year))
        || (month == 9 && short_kislev(year));
    if short { 29 } else { 30 }
}

/// A date in the Hebrew calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewDate {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

impl HebrewDate {
    pub fn new(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn to_fixed(&self) -> i64 {
        let mut days = new_year(self.year) + i64::from(self.day) - 1;
        if self.month < 7 {
            for m in 7..=last_month_of_year(self.year) {
                days += i64::from(days_in_month(self.year, m));
            }
            for m in 1..self.month {
                days += i64::from(days_in_month(self.year, m));
            }
        } else {
            for m in 7..self.month {
                days += i64::from(days_in_month(self.year, m));
            }
        }
        days
    }

    pub fn from_fixed(fixed: i64) -> Self {
        let approx = ((fixed - HEBREW_EPOCH) * 98_496).div_euclid(35_975_351) + 1;
        let mut year = approx - 1;
        while new_year(year + 1) <= fixed {
            year += 1;
        }

        let mut month = if fixed < HebrewDate::new(year, 1, 1).to_fixed() {
            7
        } else {
            1
        };
        while fixed > HebrewDate::new(year, month, days_in_month(year, month)).to_fixed() {
            month += 1;
        }

        let day = fixed - HebrewDate::new(year, month, 1).to_fixed() + 1;
        // day is within 1..=30 by construction of the month search
        Self::new(year, month, day as u8)
    }

    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "Nisan",
            2 => "Iyyar",
            3 => "Sivan",
            4 => "Tammuz",
            5 => "Av",
            6 => "Elul",
            7 => "Tishrei",
            8 => "Marcheshvan",
            9 => "Kislev",
            10 => "Tevet",
            11 => "Shvat",
            12 if is_leap_year(self.year) => "Adar I",
            12 => "Adar",
            _ => "Adar II",
        }
    }

}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}
