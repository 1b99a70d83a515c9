//! Upcoming-birthday window.
//!
//! For every record with a birthday:
//! 1. Project month/day onto `today`'s year (leap-day policy applies)
//! 2. If that date already passed, use next year's occurrence
//! 3. Keep it if it falls within `window.days` days of `today` (inclusive)
//! 4. Move Saturday and Sunday congratulations to the following Monday
//!
//! Results keep the address book's iteration order.

use crate::record::Record;
use crate::types::format_date;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default look-ahead in days
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Where a Feb 29 birthday lands in a non-leap year
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    #[default]
    March1,
    February28,
}

/// Parameters of the upcoming-birthdays query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: u32,
    pub leap_day: LeapDayPolicy,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

/// A contact to congratulate and the (weekday) date to do it on
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn congratulation_date_str(&self) -> String {
        format_date(self.congratulation_date)
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, congratulation_date: {}",
            self.name,
            self.congratulation_date_str()
        )
    }
}

/// The birthday's month/day in `year`, resolving Feb 29 per `policy`
///
/// Returns `None` only when `year` is outside chrono's representable range.
pub fn occurrence_in(birthday: NaiveDate, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| match policy {
        LeapDayPolicy::March1 => NaiveDate::from_ymd_opt(year, 3, 1),
        LeapDayPolicy::February28 => NaiveDate::from_ymd_opt(year, 2, 28),
    })
}

/// First occurrence of the birthday on or after `today`
pub fn next_occurrence(
    birthday: NaiveDate,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year(), policy)?;
    if this_year < today {
        occurrence_in(birthday, today.year() + 1, policy)
    } else {
        Some(this_year)
    }
}

/// Weekend dates move to the following Monday
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Contacts whose birthday falls within the window starting at `today`
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window: &BirthdayWindow,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut upcoming = Vec::new();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let Some(next) = next_occurrence(birthday.date(), today, window.leap_day) else {
            tracing::warn!(
                "Cannot project birthday {} of {} from {}",
                birthday,
                record.name(),
                today
            );
            continue;
        };

        let days_until = (next - today).num_days();
        if !(0..=i64::from(window.days)).contains(&days_until) {
            continue;
        }

        upcoming.push(UpcomingBirthday {
            name: record.name().to_string(),
            congratulation_date: congratulation_date(next),
        });
    }

    tracing::debug!(
        "Found {} upcoming birthdays within {} days of {}",
        upcoming.len(),
        window.days,
        today
    );

    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactName;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: &str) -> Record {
        let mut r = Record::new(ContactName::new(name).unwrap());
        r.set_birthday(birthday).unwrap();
        r
    }

    fn names(upcoming: &[UpcomingBirthday]) -> Vec<&str> {
        upcoming.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_sunday_moves_to_monday() {
        // 2024-06-14 is a Friday, 2024-06-16 a Sunday
        let today = date(2024, 6, 14);
        let records = vec![record("Tom", "16.06.1990")];

        let upcoming = upcoming_birthdays(&records, today, &BirthdayWindow::default());
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Tom");
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
        assert_eq!(upcoming[0].congratulation_date_str(), "17.06.2024");
    }

    #[test]
    fn test_saturday_moves_to_monday() {
        let today = date(2024, 6, 14);
        let records = vec![record("Ann", "15.06.1985")];

        let upcoming = upcoming_birthdays(&records, today, &BirthdayWindow::default());
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
    }

    #[test]
    fn test_weekday_is_unchanged() {
        let today = date(2024, 6, 14);
        let records = vec![record("Bob", "18.06.2000")];

        let upcoming = upcoming_birthdays(&records, today, &BirthdayWindow::default());
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 18));
    }

    #[test]
    fn test_window_bounds() {
        let today = date(2024, 6, 14);
        let records = vec![
            record("Today", "14.06.1990"),
            record("Seven", "21.06.1990"),
            record("Eight", "22.06.1990"),
            record("Nine", "23.06.1990"),
            record("Yesterday", "13.06.1990"),
        ];

        let upcoming = upcoming_birthdays(&records, today, &BirthdayWindow::default());
        assert_eq!(names(&upcoming), vec!["Today", "Seven"]);
    }

    #[test]
    fn test_wraps_into_next_year() {
        // 2024-12-28 is a Saturday
        let today = date(2024, 12, 28);
        let records = vec![record("Newyear", "02.01.1970")];

        let upcoming = upcoming_birthdays(&records, today, &BirthdayWindow::default());
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(2025, 1, 2));
    }

    #[test]
    fn test_records_without_birthday_are_skipped() {
        let today = date(2024, 6, 14);
        let records = vec![
            Record::new(ContactName::new("NoBirthday").unwrap()),
            record("Bob", "18.06.2000"),
        ];

        let upcoming = upcoming_birthdays(&records, today, &BirthdayWindow::default());
        assert_eq!(names(&upcoming), vec!["Bob"]);
    }

    #[test]
    fn test_results_keep_input_order() {
        let today = date(2024, 6, 14);
        let records = vec![record("Late", "20.06.1990"), record("Early", "15.06.1990")];

        let upcoming = upcoming_birthdays(&records, today, &BirthdayWindow::default());
        assert_eq!(names(&upcoming), vec!["Late", "Early"]);
    }

    #[test]
    fn test_leap_day_policy() {
        let birthday = date(2000, 2, 29);
        assert_eq!(
            occurrence_in(birthday, 2025, LeapDayPolicy::March1),
            Some(date(2025, 3, 1))
        );
        assert_eq!(
            occurrence_in(birthday, 2025, LeapDayPolicy::February28),
            Some(date(2025, 2, 28))
        );
        assert_eq!(
            occurrence_in(birthday, 2024, LeapDayPolicy::March1),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_leap_day_birthday_in_window() {
        // 2025-02-25 is a Tuesday; Mar 1 2025 is a Saturday
        let today = date(2025, 2, 25);
        let records = vec![record("Leap", "29.02.2000")];

        let upcoming = upcoming_birthdays(&records, today, &BirthdayWindow::default());
        assert_eq!(upcoming[0].congratulation_date, date(2025, 3, 3));

        let feb28 = BirthdayWindow {
            leap_day: LeapDayPolicy::February28,
            ..BirthdayWindow::default()
        };
        let upcoming = upcoming_birthdays(&records, today, &feb28);
        assert_eq!(upcoming[0].congratulation_date, date(2025, 2, 28));
    }

    #[test]
    fn test_leap_day_wraps_into_leap_year() {
        // Mar 2 2027 is past both policies' 2027 dates; next is Feb 29 2028
        let birthday = date(2000, 2, 29);
        assert_eq!(
            next_occurrence(birthday, date(2027, 3, 2), LeapDayPolicy::March1),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_custom_window() {
        let today = date(2024, 6, 14);
        let records = vec![record("Nine", "23.06.1990")];
        let wide = BirthdayWindow {
            days: 10,
            ..BirthdayWindow::default()
        };

        assert_eq!(upcoming_birthdays(&records, today, &wide).len(), 1);
    }

    #[test]
    fn test_display() {
        let upcoming = UpcomingBirthday {
            name: "Tom".into(),
            congratulation_date: date(2024, 6, 17),
        };
        assert_eq!(
            upcoming.to_string(),
            "name: Tom, congratulation_date: 17.06.2024"
        );
    }
}
