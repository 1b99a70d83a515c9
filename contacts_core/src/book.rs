//! In-memory address book.
//!
//! Records are kept in insertion order and looked up by the plain string
//! value of their name. Lookups are linear in the number of contacts.

use crate::birthdays::{self, BirthdayWindow, UpcomingBirthday};
use crate::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// The collection of all records, one per unique name
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    ///
    /// A replaced record keeps its slot in iteration order and is returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                tracing::warn!("Replacing existing record for {}", record.name());
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                tracing::debug!("Added record for {}", record.name());
                self.records.push(record);
                None
            }
        }
    }

    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record with this name, if any
    pub fn delete_record(&mut self, name: &str) -> Option<Record> {
        let index = self.position_of(name)?;
        tracing::debug!("Deleted record for {}", name);
        Some(self.records.remove(index))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays in the default seven-day window
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, &BirthdayWindow::default())
    }

    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window: &BirthdayWindow,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(&self.records, today, window)
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl Serialize for AddressBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactName;

    fn record(name: &str) -> Record {
        Record::new(ContactName::new(name).unwrap())
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.records().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("Jane")).is_none());

        let found = book.find_record("Jane").unwrap();
        assert_eq!(found.name().as_str(), "Jane");
        assert!(book.find_record("jane").is_none());
        assert!(book.find_record("Tom").is_none());
    }

    #[test]
    fn test_add_existing_name_replaces_in_place() {
        let mut book = AddressBook::new();
        let mut first = record("Jane");
        first.add_phone("0991234567").unwrap();
        book.add_record(first);
        book.add_record(record("Tom"));

        let replaced = book.add_record(record("Jane")).unwrap();
        assert_eq!(replaced.phones().len(), 1);

        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["Jane", "Tom"]);
        assert!(book.find_record("Jane").unwrap().phones().is_empty());
    }

    #[test]
    fn test_delete_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane"));
        book.add_record(record("Tom"));

        assert!(book.delete_record("Jane").is_some());
        assert!(book.delete_record("Jane").is_none());
        assert_eq!(names(&book), vec!["Tom"]);
    }

    #[test]
    fn test_find_record_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane"));

        book.find_record_mut("Jane")
            .unwrap()
            .add_phone("0991234567")
            .unwrap();
        assert_eq!(book.find_record("Jane").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_upcoming_birthdays_uses_book_order() {
        let mut book = AddressBook::new();
        let mut tom = record("Tom");
        tom.set_birthday("16.06.1990").unwrap();
        let mut ann = record("Ann");
        ann.set_birthday("14.06.1990").unwrap();
        book.add_record(tom);
        book.add_record(record("Jane"));
        book.add_record(ann);

        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let upcoming = book.upcoming_birthdays(today);
        let got: Vec<_> = upcoming
            .iter()
            .map(|u| (u.name.as_str(), u.congratulation_date_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Tom", "17.06.2024".to_string()),
                ("Ann", "14.06.2024".to_string())
            ]
        );
    }

    #[test]
    fn test_serde_roundtrip_is_lossless() {
        let mut book = AddressBook::new();
        let mut jane = record("Jane");
        jane.add_phone("0991234567").unwrap();
        jane.add_phone("0501112233").unwrap();
        jane.set_birthday("15.08.1990").unwrap();
        book.add_record(jane);
        book.add_record(record("Tom"));

        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with('['));

        let parsed: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_deserialize_rejects_invalid_phone() {
        let json = r#"[{"name":"Jane","phones":["123"],"birthday":null}]"#;
        assert!(serde_json::from_str::<AddressBook>(json).is_err());
    }
}
