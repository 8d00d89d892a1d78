use serde::Serialize;

use crate::mention::MentionKind;
use crate::option::{CommandOption, OptionBase};
use crate::types::OptionType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelOption {
    #[serde(flatten)]
    base: OptionBase,
}

impl ChannelOption {
    pub fn new() -> Self {
        Self {
            base: OptionBase::new(OptionType::Channel, MentionKind::Channel.fragment()),
        }
    }
}

impl Default for ChannelOption {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOption for ChannelOption {
    type Value = String;

    fn base(&self) -> &OptionBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OptionBase {
        &mut self.base
    }

    fn build_regex_string(&self) -> String {
        self.base.regex_string().to_string()
    }

    fn validate(&self, token: &str) -> Option<String> {
        MentionKind::Channel.parse(token).map(str::to_string)
    }
}
