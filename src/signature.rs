use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;
use crate::options::AnyOption;
use crate::types::{CommandError, ErrorKind, OptionValue};

// quoted runs stay whole, everything else splits on whitespace
static LOOSE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*"|\S+"#).unwrap());

/// The ordered arguments of one command, compiled into a single pattern.
///
/// The option layer only answers "does this token fit"; a signature is
/// where those answers turn into [`CommandError`]s for the end user.
#[derive(Debug, Clone)]
pub struct Signature {
    options: Vec<AnyOption>,
    // any one of these unlocks the command, none means anyone
    roles: Vec<String>,
    pattern: Regex,
    // each fragment on its own, for diagnostics
    fragments: Vec<Regex>,
}

impl Signature {
    pub fn new<I, O>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = O>,
        O: Into<AnyOption>,
    {
        let options = options.into_iter().map(Into::into).collect::<Vec<AnyOption>>();
        let built = options
            .iter()
            .map(AnyOption::build_regex_string)
            .collect::<Vec<_>>();
        let groups = built
            .iter()
            .map(|fragment| format!("({fragment})"))
            .collect::<Vec<_>>();
        let pattern = Regex::new(&format!(r"^\s*{}\s*$", groups.join(r"\s+")))?;
        let fragments = built
            .iter()
            .map(|fragment| Regex::new(&format!("^(?:{fragment})$")))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            options,
            roles: Vec::new(),
            pattern,
            fragments,
        })
    }

    pub fn require_roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn options(&self) -> &[AnyOption] {
        &self.options
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn authorize(&self, roles: &[String]) -> std::result::Result<(), CommandError> {
        if self.roles.is_empty() || roles.iter().any(|role| self.roles.contains(role)) {
            return Ok(());
        }
        Err(CommandError::new(
            ErrorKind::MissingRoles,
            format!("requires one of the roles: {}", self.roles.join(", ")),
        ))
    }

    /// Validates everything after the command name, in declaration order.
    pub fn parse(&self, args: &str) -> std::result::Result<Vec<OptionValue>, CommandError> {
        let Some(captures) = self.pattern.captures(args) else {
            let err = self.diagnose(args);
            tracing::debug!(args, kind = ?err.kind, "arguments did not match");
            return Err(err);
        };
        let mut values = Vec::with_capacity(self.options.len());
        for (index, option) in self.options.iter().enumerate() {
            let token = captures.get(index + 1).map_or("", |token| token.as_str());
            let Some(value) = option.validate(token) else {
                return Err(invalid(option, token));
            };
            values.push(value);
        }
        Ok(values)
    }

    fn diagnose(&self, args: &str) -> CommandError {
        let mut tokens = LOOSE_TOKEN.find_iter(args).map(|token| token.as_str());
        for (option, fragment) in self.options.iter().zip(&self.fragments) {
            let Some(token) = tokens.next() else {
                return CommandError::new(
                    ErrorKind::MissingArgs,
                    format!("missing argument `{}` ({})", option.name(), option.option_type()),
                );
            };
            if !fragment.is_match(token) {
                return invalid(option, token);
            }
        }
        match tokens.next() {
            Some(extra) => CommandError::new(
                ErrorKind::InvalidArgType,
                format!("unexpected argument `{extra}`"),
            ),
            // every loose token fit but the whole line did not, e.g. quotes inside a string
            None => CommandError::new(ErrorKind::InvalidArgType, "malformed arguments"),
        }
    }
}

fn invalid(option: &AnyOption, token: &str) -> CommandError {
    CommandError::new(
        ErrorKind::InvalidArgType,
        format!(
            "`{token}` is not a valid {} for `{}`",
            option.option_type(),
            option.name()
        ),
    )
}
