// lets the derive's `::chatopts::` paths resolve inside this crate too
extern crate self as chatopts;

pub mod choice;
pub mod error;
pub mod mention;
pub mod option;
pub mod options;
pub mod signature;
pub mod types;
mod utils;

pub use chatopts_derive::ChoiceSet;
pub use choice::{ChoiceSet, ChoiceValue, OptionChoice};
pub use error::{OptionError, Result};
pub use mention::MentionKind;
pub use option::{ChoiceableOption, CommandOption, NOT_IMPLEMENTED, OptionBase};
pub use options::{
    AnyOption, BooleanOption, ChannelOption, MemberOption, NumberOption, RoleOption, StringOption,
};
pub use signature::Signature;
pub use types::{CommandError, ErrorKind, OptionType, OptionValue};
