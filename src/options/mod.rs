use serde::Serialize;

use crate::option::{CommandOption, OptionBase};
use crate::types::{OptionType, OptionValue};

mod boolean;
mod channel;
mod member;
mod number;
mod role;
mod string;

pub use boolean::BooleanOption;
pub use channel::ChannelOption;
pub use member::MemberOption;
pub use number::NumberOption;
pub use role::RoleOption;
pub use string::StringOption;

/// Any of the six option kinds, for callers that keep a heterogeneous list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyOption {
    Boolean(BooleanOption),
    Number(NumberOption),
    String(StringOption),
    Member(MemberOption),
    Channel(ChannelOption),
    Role(RoleOption),
}

impl AnyOption {
    /// A fresh, unnamed option of the given kind.
    pub fn new(option_type: OptionType) -> Self {
        match option_type {
            OptionType::Boolean => Self::Boolean(BooleanOption::new()),
            OptionType::Number => Self::Number(NumberOption::new()),
            OptionType::String => Self::String(StringOption::new()),
            OptionType::Member => Self::Member(MemberOption::new()),
            OptionType::Channel => Self::Channel(ChannelOption::new()),
            OptionType::Role => Self::Role(RoleOption::new()),
        }
    }

    pub fn base(&self) -> &OptionBase {
        match self {
            Self::Boolean(option) => option.base(),
            Self::Number(option) => option.base(),
            Self::String(option) => option.base(),
            Self::Member(option) => option.base(),
            Self::Channel(option) => option.base(),
            Self::Role(option) => option.base(),
        }
    }

    pub fn name(&self) -> &str {
        self.base().name()
    }

    pub fn option_type(&self) -> OptionType {
        self.base().option_type()
    }

    pub fn build_regex_string(&self) -> String {
        let fragment = match self {
            Self::Boolean(option) => option.build_regex_string(),
            Self::Number(option) => option.build_regex_string(),
            Self::String(option) => option.build_regex_string(),
            Self::Member(option) => option.build_regex_string(),
            Self::Channel(option) => option.build_regex_string(),
            Self::Role(option) => option.build_regex_string(),
        };
        tracing::trace!(option = self.name(), %fragment, "built fragment");
        fragment
    }

    pub fn validate(&self, token: &str) -> Option<OptionValue> {
        let value = match self {
            Self::Boolean(option) => option.validate(token).map(OptionValue::Boolean),
            Self::Number(option) => option.validate(token).map(OptionValue::Number),
            Self::String(option) => option.validate(token).map(OptionValue::String),
            Self::Member(option) => option.validate(token).map(OptionValue::Member),
            Self::Channel(option) => option.validate(token).map(OptionValue::Channel),
            Self::Role(option) => option.validate(token).map(OptionValue::Role),
        };
        if value.is_none() {
            tracing::debug!(
                option = self.name(),
                kind = %self.option_type(),
                token,
                "token rejected"
            );
        }
        value
    }
}

impl From<BooleanOption> for AnyOption {
    fn from(option: BooleanOption) -> Self {
        Self::Boolean(option)
    }
}

impl From<NumberOption> for AnyOption {
    fn from(option: NumberOption) -> Self {
        Self::Number(option)
    }
}

impl From<StringOption> for AnyOption {
    fn from(option: StringOption) -> Self {
        Self::String(option)
    }
}

impl From<MemberOption> for AnyOption {
    fn from(option: MemberOption) -> Self {
        Self::Member(option)
    }
}

impl From<ChannelOption> for AnyOption {
    fn from(option: ChannelOption) -> Self {
        Self::Channel(option)
    }
}

impl From<RoleOption> for AnyOption {
    fn from(option: RoleOption) -> Self {
        Self::Role(option)
    }
}
