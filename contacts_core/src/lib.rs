#![forbid(unsafe_code)]

//! Core domain model and business logic for the contacts assistant.
//!
//! This crate provides:
//! - Validated value types (name, phone, birthday)
//! - Contact records and the in-memory address book
//! - The upcoming-birthdays window
//! - The command grammar and dispatcher used by the CLI
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod record;
pub mod book;
pub mod birthdays;
pub mod command;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Entity, Error, FieldKind, Result};
pub use types::{format_date, parse_date, BirthdayDate, ContactName, PhoneNumber};
pub use record::{PhoneStatus, Record};
pub use book::AddressBook;
pub use birthdays::{BirthdayWindow, LeapDayPolicy, UpcomingBirthday};
pub use command::{execute, Command, Reply};
pub use config::Config;
