use thiserror::Error;

/// Misuse of the builder API while declaring an option.
///
/// These are programmer errors in a command definition. A token that fails
/// validation is never reported through this type.
#[derive(Error, Debug)]
pub enum OptionError {
    #[error("option name must not be empty")]
    EmptyName,

    #[error("option description must not be empty")]
    EmptyDescription,

    #[error("at least one choice is required")]
    NoChoices,

    #[error("choice is missing both a name and a value")]
    IncompleteChoice,

    #[error("choice with value `{0}` is missing a name")]
    MissingChoiceName(String),

    #[error("choice `{0}` is missing a value")]
    MissingChoiceValue(String),

    #[error("unknown option type `{0}`")]
    UnknownType(String),

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, OptionError>;
