use serde::Serialize;

use crate::mention::MentionKind;
use crate::option::{CommandOption, OptionBase};
use crate::types::OptionType;

/// Resolves a user mention, `<@id>` or the nickname form `<@!id>`, to the user's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberOption {
    #[serde(flatten)]
    base: OptionBase,
}

impl MemberOption {
    pub fn new() -> Self {
        Self {
            base: OptionBase::new(OptionType::Member, MentionKind::User.fragment()),
        }
    }
}

impl Default for MemberOption {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOption for MemberOption {
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
        MentionKind::User.parse(token).map(str::to_string)
    }
}
