use serde::Serialize;

use crate::choice::{ChoiceSet, ChoiceValue, OptionChoice, collect_choices};
use crate::error::{OptionError, Result};
use crate::types::OptionType;

/// Name and description of an option nobody has named yet.
pub const NOT_IMPLEMENTED: &str = "not implemented";

/// State shared by every option kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionBase {
    name: String,
    description: String,
    #[serde(rename = "type")]
    option_type: OptionType,
    // used whenever no choices narrow the grammar
    #[serde(skip)]
    regex_string: &'static str,
}

impl OptionBase {
    pub(crate) fn new(option_type: OptionType, regex_string: &'static str) -> Self {
        Self {
            name: NOT_IMPLEMENTED.to_string(),
            description: NOT_IMPLEMENTED.to_string(),
            option_type,
            regex_string,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn regex_string(&self) -> &'static str {
        self.regex_string
    }

    fn set_name(&mut self, name: String) -> Result<()> {
        if name.is_empty() {
            return Err(OptionError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    fn set_description(&mut self, description: String) -> Result<()> {
        if description.is_empty() {
            return Err(OptionError::EmptyDescription);
        }
        self.description = description;
        Ok(())
    }
}

/// A single typed argument slot of a text command.
///
/// Implementors fix their [`OptionType`] and default fragment on construction
/// and supply the fragment builder and the validator. Setters consume and
/// return the option so declarations chain with `?`:
///
/// ```
/// use chatopts::{CommandOption, NumberOption};
///
/// let amount = NumberOption::new()
///     .set_name("amount")?
///     .set_description("how many to roll")?;
/// assert_eq!(amount.validate("42"), Some(42));
/// # Ok::<(), chatopts::OptionError>(())
/// ```
pub trait CommandOption {
    type Value;

    fn base(&self) -> &OptionBase;

    fn base_mut(&mut self) -> &mut OptionBase;

    /// Unanchored fragment matching one occurrence of an accepted value.
    fn build_regex_string(&self) -> String;

    /// Converts a token the caller extracted with this option's fragment.
    /// Returns `None` when the token is outside the option's domain.
    fn validate(&self, token: &str) -> Option<Self::Value>;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn description(&self) -> &str {
        self.base().description()
    }

    fn option_type(&self) -> OptionType {
        self.base().option_type()
    }

    fn regex_string(&self) -> &'static str {
        self.base().regex_string()
    }

    fn set_name(mut self, name: impl Into<String>) -> Result<Self>
    where
        Self: Sized,
    {
        self.base_mut().set_name(name.into())?;
        Ok(self)
    }

    fn set_description(mut self, description: impl Into<String>) -> Result<Self>
    where
        Self: Sized,
    {
        self.base_mut().set_description(description.into())?;
        Ok(self)
    }
}

/// An option whose accepted values can be narrowed to a fixed list.
pub trait ChoiceableOption: CommandOption {
    type Choice: ChoiceValue;

    fn choices(&self) -> &[OptionChoice<Self::Choice>];

    fn choices_mut(&mut self) -> &mut Vec<OptionChoice<Self::Choice>>;

    /// Appends one or more choices. Fails without touching the list if the
    /// input is empty or any pair lacks a name or a value.
    fn add_choice<I, C>(mut self, choices: I) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = C>,
        C: Into<OptionChoice<Self::Choice>>,
    {
        let choices = collect_choices(choices)?;
        self.choices_mut().extend(choices);
        Ok(self)
    }

    /// Replaces the whole list, all or nothing.
    fn set_choices<I, C>(mut self, choices: I) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = C>,
        C: Into<OptionChoice<Self::Choice>>,
    {
        let choices = collect_choices(choices)?;
        *self.choices_mut() = choices;
        Ok(self)
    }

    fn with_choice_set<S>(self) -> Result<Self>
    where
        Self: Sized,
        S: ChoiceSet<Value = Self::Choice>,
    {
        self.set_choices(S::choices())
    }
}
