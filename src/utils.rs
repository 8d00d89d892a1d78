use regex::Regex;
use std::sync::LazyLock;

use crate::choice::{ChoiceValue, OptionChoice};

// one layer of surrounding double quotes
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?s)^"(.+)"$"#).unwrap());

pub(crate) fn unquote(token: &str) -> Option<&str> {
    QUOTED
        .captures(token)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str())
}

/// Alternation of the quoted choice values, or `fallback` when there are none.
pub(crate) fn choice_regex<T: ChoiceValue>(choices: &[OptionChoice<T>], fallback: &str) -> String {
    if choices.is_empty() {
        return fallback.to_string();
    }
    let alternatives = choices
        .iter()
        .map(|choice| format!("\"{}\"", regex::escape(&choice.value.to_string())))
        .collect::<Vec<_>>();
    format!("(?:{})", alternatives.join("|"))
}
