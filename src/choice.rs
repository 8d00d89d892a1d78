use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OptionError, Result};

/// A value an option can be restricted to.
pub trait ChoiceValue: Clone + PartialEq + fmt::Display + fmt::Debug {
    /// An empty value does not count as a choice.
    fn is_absent(&self) -> bool;
}

impl ChoiceValue for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

// zero is a real choice
impl ChoiceValue for i64 {
    fn is_absent(&self) -> bool {
        false
    }
}

/// A `(name, value)` pair; the name is what users see, the value is what they type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChoice<T> {
    pub name: String,
    pub value: T,
}

impl<T> OptionChoice<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl<T: ChoiceValue> OptionChoice<T> {
    fn check(&self) -> Result<()> {
        match (self.name.is_empty(), self.value.is_absent()) {
            (true, true) => Err(OptionError::IncompleteChoice),
            (true, false) => Err(OptionError::MissingChoiceName(self.value.to_string())),
            (false, true) => Err(OptionError::MissingChoiceValue(self.name.clone())),
            (false, false) => Ok(()),
        }
    }
}

impl<N: Into<String>> From<(N, &str)> for OptionChoice<String> {
    fn from((name, value): (N, &str)) -> Self {
        Self::new(name, value.to_string())
    }
}

impl<N: Into<String>> From<(N, String)> for OptionChoice<String> {
    fn from((name, value): (N, String)) -> Self {
        Self::new(name, value)
    }
}

impl<N: Into<String>> From<(N, i64)> for OptionChoice<i64> {
    fn from((name, value): (N, i64)) -> Self {
        Self::new(name, value)
    }
}

/// A closed set of choices, usually derived from a fieldless enum.
///
/// ```
/// use chatopts::{ChoiceSet, ChoiceableOption, StringOption};
///
/// #[derive(Debug, PartialEq, ChoiceSet)]
/// enum Size {
///     Small,
///     #[choice(name = "Large", value = "xl")]
///     Big,
/// }
///
/// let option = StringOption::new().with_choice_set::<Size>().unwrap();
/// assert_eq!(option.choices().len(), 2);
/// assert_eq!(Size::from_value(&"xl".to_string()), Some(Size::Big));
/// ```
pub trait ChoiceSet: Sized {
    type Value: ChoiceValue;

    fn choices() -> Vec<OptionChoice<Self::Value>>;

    fn from_value(value: &Self::Value) -> Option<Self>;
}

/// Collects and checks every pair up front so callers can apply them all or none.
pub(crate) fn collect_choices<T, I, C>(choices: I) -> Result<Vec<OptionChoice<T>>>
where
    T: ChoiceValue,
    I: IntoIterator<Item = C>,
    C: Into<OptionChoice<T>>,
{
    let choices = choices.into_iter().map(Into::into).collect::<Vec<_>>();
    if choices.is_empty() {
        return Err(OptionError::NoChoices);
    }
    for choice in &choices {
        choice.check()?;
    }
    Ok(choices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let choices: Vec<OptionChoice<String>> = Vec::new();
        assert!(matches!(collect_choices::<String, _, _>(choices), Err(OptionError::NoChoices)));
    }

    #[test]
    fn incomplete_pairs_are_rejected() {
        assert!(matches!(
            collect_choices::<String, _, _>([("", "")]),
            Err(OptionError::IncompleteChoice)
        ));
        assert!(matches!(
            collect_choices::<String, _, _>([("", "a")]),
            Err(OptionError::MissingChoiceName(value)) if value == "a"
        ));
        assert!(matches!(
            collect_choices::<String, _, _>([("A", "")]),
            Err(OptionError::MissingChoiceValue(name)) if name == "A"
        ));
    }

    #[test]
    fn zero_is_a_valid_number_choice() {
        let choices = collect_choices::<i64, _, _>([("Zero", 0i64)]).unwrap();
        assert_eq!(choices, vec![OptionChoice::new("Zero", 0)]);
    }

    #[derive(Debug, PartialEq, crate::ChoiceSet)]
    enum Stake {
        #[choice(value = 5)]
        Low,
        #[choice(name = "All in", value = 500)]
        High,
    }

    #[test]
    fn derived_sets_are_valid_choices() {
        let choices = collect_choices(Stake::choices()).unwrap();
        assert_eq!(choices[1], OptionChoice::new("All in", 500));
        assert_eq!(Stake::from_value(&5), Some(Stake::Low));
        assert_eq!(Stake::from_value(&6), None);
    }

    #[test]
    fn one_bad_pair_spoils_the_batch() {
        assert!(collect_choices::<String, _, _>([("A", "a"), ("B", "")]).is_err());
    }
}
