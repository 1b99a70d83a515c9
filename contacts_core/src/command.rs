//! Assistant commands.
//!
//! `Command::parse` turns one input line into a command, the free functions
//! below implement each operation against an `AddressBook`, and `execute`
//! dispatches a parsed command. Nothing here prints; callers render the
//! returned `Reply` or `Error`.

use crate::birthdays::{BirthdayWindow, UpcomingBirthday};
use crate::book::AddressBook;
use crate::error::{Entity, Error, Result};
use crate::record::{PhoneStatus, Record};
use crate::types::{ContactName, PhoneNumber};
use chrono::NaiveDate;

/// Keyword and usage line for every command, in help order
pub const USAGE: &[(&str, &str)] = &[
    ("hello", "hello"),
    ("add", "add <name> <phone>"),
    ("change", "change <name> <old phone> <new phone>"),
    ("phone", "phone <name>"),
    ("remove-phone", "remove-phone <name> <phone>"),
    ("delete", "delete <name>"),
    ("all", "all"),
    ("add-birthday", "add-birthday <name> <DD.MM.YYYY>"),
    ("show-birthday", "show-birthday <name>"),
    ("birthdays", "birthdays"),
    ("help", "help"),
    ("close", "close | exit"),
];

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Hello,
    AddContact {
        name: String,
        phone: String,
    },
    ChangeContact {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    ShowPhones {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    DeleteContact {
        name: String,
    },
    ShowAll,
    AddBirthday {
        name: String,
        date: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Help,
    Exit,
}

/// What a successful command produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Lines(Vec<String>),
    Upcoming(Vec<UpcomingBirthday>),
    Exit,
}

impl Command {
    /// Parse `<command> [args...]`; the keyword is case-insensitive and
    /// surplus arguments are ignored
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(Error::EmptyInput)?.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take::<2>("add", &args)?;
                Command::AddContact { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = take::<3>("change", &args)?;
                Command::ChangeContact {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = take::<1>("phone", &args)?;
                Command::ShowPhones { name }
            }
            "remove-phone" => {
                let [name, phone] = take::<2>("remove-phone", &args)?;
                Command::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = take::<1>("delete", &args)?;
                Command::DeleteContact { name }
            }
            "all" => Command::ShowAll,
            "add-birthday" => {
                let [name, date] = take::<2>("add-birthday", &args)?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take::<1>("show-birthday", &args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => return Err(Error::UnknownCommand(keyword)),
        };

        Ok(command)
    }

    /// Operation name, used to label failures
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::AddContact { .. } => "add_contact",
            Command::ChangeContact { .. } => "change_contact",
            Command::ShowPhones { .. } => "phone",
            Command::RemovePhone { .. } => "remove_phone",
            Command::DeleteContact { .. } => "delete_contact",
            Command::ShowAll => "show_all",
            Command::AddBirthday { .. } => "add_birthday",
            Command::ShowBirthday { .. } => "show_birthday",
            Command::Birthdays => "birthdays",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

/// First `N` arguments, or `MissingArgument` with the command's usage
fn take<const N: usize>(keyword: &'static str, args: &[&str]) -> Result<[String; N]> {
    if args.len() < N {
        return Err(Error::MissingArgument {
            command: keyword,
            usage: usage_of(keyword),
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

fn usage_of(keyword: &str) -> &'static str {
    USAGE
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, usage)| *usage)
        .unwrap_or("help")
}

fn find<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    let name = name.trim();
    book.find_record(name)
        .ok_or_else(|| Error::not_found(Entity::Contact, name))
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    let name = name.trim();
    book.find_record_mut(name)
        .ok_or_else(|| Error::not_found(Entity::Contact, name))
}

// ============================================================================
// Operations
// ============================================================================

/// Create the contact if needed and attach the phone
///
/// The phone is validated before anything is created, so a failure leaves
/// the book untouched.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> Result<String> {
    let name = ContactName::new(name)?;
    let phone = PhoneNumber::new(phone)?;

    let mut messages = Vec::new();
    if book.find_record(name.as_str()).is_none() {
        book.add_record(Record::new(name.clone()));
        messages.push("Contact added.");
    }

    let record = find_mut(book, name.as_str())?;
    if record.add_phone(phone.as_str())? == PhoneStatus::Added {
        messages.push("Phone added.");
    }

    if messages.is_empty() {
        Ok("Nothing to add.".to_string())
    } else {
        Ok(messages.join(" "))
    }
}

pub fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> Result<String> {
    find_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Phone changed.".to_string())
}

/// `contact name: <name>, phones: <p1>; <p2>`
pub fn get_phones(book: &AddressBook, name: &str) -> Result<String> {
    let record = find(book, name)?;
    let phones = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join("; ");
    Ok(format!("contact name: {}, phones: {}", record.name(), phones))
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<String> {
    find_mut(book, name)?
        .remove_phone(phone)
        .ok_or_else(|| Error::not_found(Entity::Phone, phone))?;
    Ok("Phone removed.".to_string())
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> Result<String> {
    let name = name.trim();
    book.delete_record(name)
        .ok_or_else(|| Error::not_found(Entity::Contact, name))?;
    Ok("Contact deleted.".to_string())
}

pub fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> Result<String> {
    find_mut(book, name)?.set_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// The stored birthday as `DD.MM.YYYY`
pub fn get_birthday(book: &AddressBook, name: &str) -> Result<String> {
    let record = find(book, name)?;
    record
        .birthday()
        .map(|b| b.to_string())
        .ok_or_else(|| Error::not_found(Entity::Birthday, record.name().as_str()))
}

pub fn list_upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window: &BirthdayWindow,
) -> Vec<UpcomingBirthday> {
    book.upcoming_birthdays_within(today, window)
}

/// One summary line per record, in book order
pub fn list_all_contacts(book: &AddressBook) -> Vec<String> {
    book.records().map(Record::to_string).collect()
}

/// Run a parsed command against the book
pub fn execute(
    book: &mut AddressBook,
    command: &Command,
    today: NaiveDate,
    window: &BirthdayWindow,
) -> Result<Reply> {
    tracing::debug!("Executing {}", command.name());

    let reply = match command {
        Command::Hello => Reply::Message("How can I help you?".to_string()),
        Command::AddContact { name, phone } => Reply::Message(add_contact(book, name, phone)?),
        Command::ChangeContact {
            name,
            old_phone,
            new_phone,
        } => Reply::Message(change_contact(book, name, old_phone, new_phone)?),
        Command::ShowPhones { name } => Reply::Message(get_phones(book, name)?),
        Command::RemovePhone { name, phone } => Reply::Message(remove_phone(book, name, phone)?),
        Command::DeleteContact { name } => Reply::Message(delete_contact(book, name)?),
        Command::ShowAll => Reply::Lines(list_all_contacts(book)),
        Command::AddBirthday { name, date } => Reply::Message(add_birthday(book, name, date)?),
        Command::ShowBirthday { name } => Reply::Message(get_birthday(book, name)?),
        Command::Birthdays => Reply::Upcoming(list_upcoming_birthdays(book, today, window)),
        Command::Help => Reply::Lines(
            USAGE
                .iter()
                .map(|(_, usage)| format!("  {}", usage))
                .collect(),
        ),
        Command::Exit => Reply::Exit,
    };

    Ok(reply)
}
