use serde::Serialize;

use crate::choice::OptionChoice;
use crate::option::{ChoiceableOption, CommandOption, OptionBase};
use crate::types::OptionType;
use crate::utils::{choice_regex, unquote};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringOption {
    #[serde(flatten)]
    base: OptionBase,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    choices: Vec<OptionChoice<String>>,
}

impl StringOption {
    pub fn new() -> Self {
        Self {
            base: OptionBase::new(OptionType::String, r#""[^"]+""#),
            choices: Vec::new(),
        }
    }
}

impl Default for StringOption {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOption for StringOption {
    type Value = String;

    fn base(&self) -> &OptionBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OptionBase {
        &mut self.base
    }

    fn build_regex_string(&self) -> String {
        choice_regex(&self.choices, self.base.regex_string())
    }

    fn validate(&self, token: &str) -> Option<String> {
        if self.choices.iter().any(|choice| choice.value == token) {
            return Some(token.to_string());
        }
        unquote(token).map(str::to_string)
    }
}

impl ChoiceableOption for StringOption {
    type Choice = String;

    fn choices(&self) -> &[OptionChoice<String>] {
        &self.choices
    }

    fn choices_mut(&mut self) -> &mut Vec<OptionChoice<String>> {
        &mut self.choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionError;
    use regex::Regex;

    fn anchored(option: &StringOption) -> Regex {
        Regex::new(&format!("^{}$", option.build_regex_string())).unwrap()
    }

    #[test]
    fn defaults() {
        let option = StringOption::new();
        assert_eq!(option.option_type(), OptionType::String);
        assert_eq!(option.name(), crate::NOT_IMPLEMENTED);
        assert_eq!(option.build_regex_string(), option.regex_string());
        assert!(anchored(&option).is_match(r#""hello world""#));
        assert!(!anchored(&option).is_match("hello"));
        assert!(!anchored(&option).is_match(r#""""#));
    }

    #[test]
    fn validate_strips_quotes() {
        let option = StringOption::new();
        assert_eq!(option.validate(r#""hello""#), Some("hello".to_string()));
        assert_eq!(option.validate("hello"), None);
    }

    #[test]
    fn choices_narrow_the_fragment() {
        let option = StringOption::new()
            .add_choice([("One", "1"), ("Two", "2")])
            .unwrap();
        let pattern = anchored(&option);
        assert!(pattern.is_match(r#""1""#));
        assert!(pattern.is_match(r#""2""#));
        assert!(!pattern.is_match(r#""3""#));
        assert!(!pattern.is_match("1"));
        assert_eq!(option.build_regex_string(), option.build_regex_string());
    }

    #[test]
    fn validation_unwraps_tokens_outside_the_choices() {
        let option = StringOption::new()
            .set_choices([("Red", "red"), ("Blue", "blue")])
            .unwrap();
        assert_eq!(option.validate("red"), Some("red".to_string()));
        assert_eq!(option.validate(r#""blue""#), Some("blue".to_string()));
        // the fragment narrows the grammar, validation only unwraps
        assert_eq!(option.validate(r#""green""#), Some("green".to_string()));
        assert_eq!(option.validate("green"), None);
    }

    #[test]
    fn add_choice_appends_and_set_choices_replaces() {
        let option = StringOption::new()
            .add_choice([("A", "a")])
            .unwrap()
            .add_choice([("B", "b")])
            .unwrap();
        assert_eq!(
            option.choices(),
            [OptionChoice::new("A", "a".to_string()), OptionChoice::new("B", "b".to_string())]
        );

        let option = option.set_choices([("C", "c")]).unwrap();
        assert_eq!(option.choices(), [OptionChoice::new("C", "c".to_string())]);
    }

    #[test]
    fn bad_choices_are_rejected() {
        let none: [(&str, &str); 0] = [];
        assert!(matches!(
            StringOption::new().add_choice(none),
            Err(OptionError::NoChoices)
        ));
        assert!(matches!(
            StringOption::new().set_choices(none),
            Err(OptionError::NoChoices)
        ));
        assert!(matches!(
            StringOption::new().add_choice([("A", "")]),
            Err(OptionError::MissingChoiceValue(_))
        ));
    }

    #[test]
    fn setters_reject_empty_text() {
        assert!(matches!(StringOption::new().set_name(""), Err(OptionError::EmptyName)));
        assert!(matches!(
            StringOption::new().set_description(""),
            Err(OptionError::EmptyDescription)
        ));
        let option = StringOption::new()
            .set_name("query")
            .and_then(|option| option.set_description("what to search for"))
            .unwrap();
        assert_eq!(option.name(), "query");
        assert_eq!(option.description(), "what to search for");
    }
}
