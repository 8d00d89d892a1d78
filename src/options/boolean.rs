use serde::Serialize;

use crate::option::{CommandOption, OptionBase};
use crate::types::OptionType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanOption {
    #[serde(flatten)]
    base: OptionBase,
}

impl BooleanOption {
    pub fn new() -> Self {
        Self {
            base: OptionBase::new(OptionType::Boolean, "(?:true|false)"),
        }
    }
}

impl Default for BooleanOption {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOption for BooleanOption {
    type Value = bool;

    fn base(&self) -> &OptionBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OptionBase {
        &mut self.base
    }

    fn build_regex_string(&self) -> String {
        self.base.regex_string().to_string()
    }

    // exact and case sensitive, like the fragment
    fn validate(&self, token: &str) -> Option<bool> {
        match token {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_is_exact() {
        let option = BooleanOption::new();
        assert_eq!(option.validate("true"), Some(true));
        assert_eq!(option.validate("false"), Some(false));
        assert_eq!(option.validate("TRUE"), None);
        assert_eq!(option.validate("yes"), None);
        assert_eq!(option.validate(" true"), None);
    }

    #[test]
    fn fragment_is_the_default() {
        let option = BooleanOption::new();
        assert_eq!(option.build_regex_string(), "(?:true|false)");
        assert_eq!(option.option_type(), OptionType::Boolean);
    }
}
