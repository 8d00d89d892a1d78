use serde::Serialize;

use crate::mention::MentionKind;
use crate::option::{CommandOption, OptionBase};
use crate::types::OptionType;

/// `<@&id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleOption {
    #[serde(flatten)]
    base: OptionBase,
}

impl RoleOption {
    pub fn new() -> Self {
        Self {
            base: OptionBase::new(OptionType::Role, MentionKind::Role.fragment()),
        }
    }
}

impl Default for RoleOption {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOption for RoleOption {
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
        MentionKind::Role.parse(token).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate() {
        let option = RoleOption::new();
        assert_eq!(
            option.validate("<@&988839581384323083>"),
            Some("988839581384323083".to_string())
        );
        assert_eq!(option.validate("<@988839581384323083>"), None);
        assert_eq!(option.validate("<@&98883958138432308300>"), None);
    }
}
