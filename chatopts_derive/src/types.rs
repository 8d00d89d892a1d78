use proc_macro2::{Ident, Literal};

#[derive(Default)]
pub(crate) struct Config {
    pub(crate) name: Option<Literal>,
    pub(crate) value: Option<Literal>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum SupportedArguments {
    Name,
    Value,
}

impl std::str::FromStr for SupportedArguments {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "value" => Ok(Self::Value),
            _ => Err(()),
        }
    }
}

// what a variant expands to once its attribute is resolved
pub(crate) struct Choice {
    pub(crate) variant: Ident,
    pub(crate) name: String,
    pub(crate) value: ChoiceValue,
}

#[derive(PartialEq)]
pub(crate) enum ChoiceValue {
    Str(String),
    Int(i64),
}
