use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::error::OptionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Boolean,
    Number,
    String,
    Member,
    Channel,
    Role,
}

impl OptionType {
    pub const ALL: [OptionType; 6] = [
        Self::Boolean,
        Self::Number,
        Self::String,
        Self::Member,
        Self::Channel,
        Self::Role,
    ];

    /// Only strings and numbers can be restricted to a fixed set of values.
    pub fn is_choiceable(&self) -> bool {
        matches!(self, Self::String | Self::Number)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Member => "member",
            Self::Channel => "channel",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptionType {
    type Err = OptionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" | "bool" => Ok(Self::Boolean),
            "number" | "int" => Ok(Self::Number),
            "string" | "str" => Ok(Self::String),
            "member" | "user" => Ok(Self::Member),
            "channel" => Ok(Self::Channel),
            "role" => Ok(Self::Role),
            _ => Err(OptionError::UnknownType(s.to_string())),
        }
    }
}

/// A typed value produced by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum OptionValue {
    Boolean(bool),
    Number(i64),
    String(String),
    // mention kinds carry the raw snowflake id
    Member(String),
    Channel(String),
    Role(String),
}

impl OptionValue {
    pub fn option_type(&self) -> OptionType {
        match self {
            Self::Boolean(_) => OptionType::Boolean,
            Self::Number(_) => OptionType::Number,
            Self::String(_) => OptionType::String,
            Self::Member(_) => OptionType::Member,
            Self::Channel(_) => OptionType::Channel,
            Self::Role(_) => OptionType::Role,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Text of string values and the id of mention values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) | Self::Member(value) | Self::Channel(value) | Self::Role(value) => {
                Some(value)
            }
            _ => None,
        }
    }
}

/// Shared vocabulary for reporting a failed command to the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidArgType,
    MissingArgs,
    MissingPermissions,
    MissingRoles,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
    pub kind: ErrorKind,
}

impl CommandError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}
