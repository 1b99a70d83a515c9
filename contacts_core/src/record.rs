//! A single contact: name, phones and an optional birthday.

use crate::error::{Entity, Error, Result};
use crate::types::{BirthdayDate, ContactName, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of adding a phone to a record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhoneStatus {
    Added,
    AlreadyPresent,
}

/// One contact in the address book
///
/// Phones keep insertion order and never contain the same number twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordData")]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

/// Wire form of a record; fields are validated by their own types
#[derive(Deserialize)]
struct RecordData {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        let mut record = Record::new(data.name);
        for phone in data.phones {
            if record.find_phone(phone.as_str()).is_none() {
                record.phones.push(phone);
            }
        }
        record.birthday = data.birthday;
        record
    }
}

impl Record {
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Append a phone unless the same number is already listed
    pub fn add_phone(&mut self, raw: &str) -> Result<PhoneStatus> {
        if self.find_phone(raw).is_some() {
            return Ok(PhoneStatus::AlreadyPresent);
        }

        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        tracing::debug!("Added phone {} to {}", raw, self.name);
        Ok(PhoneStatus::Added)
    }

    /// Replace `old` with `new`, keeping its position
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| Error::not_found(Entity::Phone, old))?;

        let phone = PhoneNumber::new(new)?;

        if let Some(existing) = self.position_of(new) {
            if existing != index {
                return Err(Error::DuplicatePhone(new.to_string()));
            }
        }

        self.phones[index] = phone;
        tracing::debug!("Changed phone {} to {} for {}", old, new, self.name);
        Ok(())
    }

    /// Remove the phone if present, returning it
    pub fn remove_phone(&mut self, raw: &str) -> Option<PhoneNumber> {
        let index = self.position_of(raw)?;
        let removed = self.phones.remove(index);
        tracing::debug!("Removed phone {} from {}", raw, self.name);
        Some(removed)
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Set or overwrite the birthday
    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        let birthday = BirthdayDate::new(raw)?;
        self.birthday = Some(birthday);
        tracing::debug!("Set birthday {} for {}", birthday, self.name);
        Ok(())
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "contact name: {} | birthday: {} | phones: {}",
            self.name, birthday, phones
        )
    }
}
