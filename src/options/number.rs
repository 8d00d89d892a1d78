use serde::Serialize;

use crate::choice::OptionChoice;
use crate::option::{ChoiceableOption, CommandOption, OptionBase};
use crate::types::OptionType;
use crate::utils::{choice_regex, unquote};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberOption {
    #[serde(flatten)]
    base: OptionBase,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    choices: Vec<OptionChoice<i64>>,
}

impl NumberOption {
    pub fn new() -> Self {
        Self {
            base: OptionBase::new(OptionType::Number, r"\d+"),
            choices: Vec::new(),
        }
    }
}

impl Default for NumberOption {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOption for NumberOption {
    type Value = i64;

    fn base(&self) -> &OptionBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OptionBase {
        &mut self.base
    }

    fn build_regex_string(&self) -> String {
        choice_regex(&self.choices, self.base.regex_string())
    }

    fn validate(&self, token: &str) -> Option<i64> {
        // choice fragments hand over quoted literals
        let digits = if self.choices.is_empty() {
            token
        } else {
            unquote(token).unwrap_or(token)
        };
        digits.parse::<i64>().ok()
    }
}

impl ChoiceableOption for NumberOption {
    type Choice = i64;

    fn choices(&self) -> &[OptionChoice<i64>] {
        &self.choices
    }

    fn choices_mut(&mut self) -> &mut Vec<OptionChoice<i64>> {
        &mut self.choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn default_fragment_matches_digits() {
        let option = NumberOption::new();
        assert_eq!(option.build_regex_string(), r"\d+");
        let pattern = Regex::new(&format!("^{}$", option.build_regex_string())).unwrap();
        assert!(pattern.is_match("123"));
        assert!(!pattern.is_match("abc"));
    }

    #[test]
    fn validate_parses_integers() {
        let option = NumberOption::new();
        assert_eq!(option.validate("42"), Some(42));
        assert_eq!(option.validate("abc"), None);
        assert_eq!(option.validate(""), None);
        assert_eq!(option.validate("99999999999999999999"), None);
    }

    #[test]
    fn quotes_only_unwrap_with_choices() {
        let option = NumberOption::new();
        assert_eq!(option.validate(r#""42""#), None);
        // signed integers parse even though `\d+` never captures them
        assert_eq!(option.validate("-5"), Some(-5));
    }

    #[test]
    fn choices_are_quoted_literals() {
        let option = NumberOption::new()
            .add_choice([("One", 1i64), ("Two", 2i64)])
            .unwrap();
        assert_eq!(option.build_regex_string(), r#"(?:"1"|"2")"#);
        assert_eq!(option.validate(r#""2""#), Some(2));
        assert_eq!(option.validate("1"), Some(1));
        assert_eq!(option.validate(r#""3""#), Some(3));
    }
}
