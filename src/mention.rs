//! The chat platform's mention syntax.
//!
//! Users render as `<@id>` (or the legacy nickname form `<@!id>`), channels
//! as `<#id>` and roles as `<@&id>`, where `id` is a 17 to 19 digit
//! snowflake. Nothing outside this module knows these shapes.

use regex::Regex;
use std::sync::LazyLock;

static USER_MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<@!?(\d{17,19})>$").unwrap());
static CHANNEL_MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<#(\d{17,19})>$").unwrap());
static ROLE_MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<@&(\d{17,19})>$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionKind {
    User,
    Channel,
    Role,
}

impl MentionKind {
    /// Unanchored fragment without capture groups.
    pub fn fragment(&self) -> &'static str {
        match self {
            Self::User => r"<@!?\d{17,19}>",
            Self::Channel => r"<#\d{17,19}>",
            Self::Role => r"<@&\d{17,19}>",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::User => &*USER_MENTION,
            Self::Channel => &*CHANNEL_MENTION,
            Self::Role => &*ROLE_MENTION,
        }
    }

    /// Returns the snowflake id if `token` is exactly one mention of this kind.
    pub fn parse<'a>(&self, token: &'a str) -> Option<&'a str> {
        self.pattern()
            .captures(token)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str())
    }

    pub fn format(&self, id: &str) -> String {
        match self {
            Self::User => format!("<@{id}>"),
            Self::Channel => format!("<#{id}>"),
            Self::Role => format!("<@&{id}>"),
        }
    }
}
