//! Error types for the contacts_core library.

use std::fmt;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Which value failed validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Phone,
    Date,
}

impl FieldKind {
    /// Human-readable description of the accepted format
    pub fn expected_format(&self) -> &'static str {
        match self {
            FieldKind::Name => "a non-empty name",
            FieldKind::Phone => "exactly 10 digits",
            FieldKind::Date => "DD.MM.YYYY",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone number",
            FieldKind::Date => "date",
        };
        f.write_str(label)
    }
}

/// What a lookup was looking for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Contact,
    Phone,
    Birthday,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Entity::Contact => "Contact",
            Entity::Phone => "Phone",
            Entity::Birthday => "Birthday",
        };
        f.write_str(label)
    }
}

/// Core error type for contacts_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed name, phone or date
    #[error("Invalid {kind}: '{value}'. Expected {}", .kind.expected_format())]
    Validation { kind: FieldKind, value: String },

    /// Referenced contact, phone or birthday does not exist
    #[error("{entity} not found: {key}")]
    NotFound { entity: Entity, key: String },

    /// Too few arguments for a command
    #[error("Missing arguments. Usage: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    /// Input line did not start with a known command
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// Input line was blank
    #[error("Empty input")]
    EmptyInput,

    /// Phone is already listed on the record
    #[error("Phone already exists: {0}")]
    DuplicatePhone(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn validation(kind: FieldKind, value: impl Into<String>) -> Self {
        Error::Validation {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn not_found(entity: Entity, key: impl Into<String>) -> Self {
        Error::NotFound {
            entity,
            key: key.into(),
        }
    }
}
