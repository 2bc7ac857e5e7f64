//! The failure-code domain.
//!
//! A [`Code`] is the stable, programmatically matchable discriminant of a
//! failure. Codes are either text, an integer, or the explicit "no code"
//! value [`Code::None`], which renders as `null`.

use std::fmt;

/// Stable discriminant attached to a failure.
///
/// Matching is strict and structural: `Code::Text("1".into())` and
/// `Code::Int(1)` are different codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Code {
    /// The explicit absence of a code.
    #[default]
    None,
    /// A textual code such as `"E_TIMEOUT"`.
    Text(String),
    /// A numeric code such as `404`.
    Int(i64),
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "null"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Code {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Code {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Code {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Code {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl<C: Into<Code>> From<Option<C>> for Code {
    fn from(code: Option<C>) -> Self {
        code.map_or(Self::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_renders_as_null() {
        assert_eq!(Code::None.to_string(), "null");
    }

    #[test]
    fn text_and_int_render_verbatim() {
        assert_eq!(Code::from("E_TIMEOUT").to_string(), "E_TIMEOUT");
        assert_eq!(Code::from(404).to_string(), "404");
    }

    #[test]
    fn equality_is_strict() {
        assert_eq!(Code::from("a"), Code::Text("a".to_owned()));
        assert_ne!(Code::from("1"), Code::from(1));
        assert_ne!(Code::None, Code::from("null"));
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Code::from(None::<&str>), Code::None);
        assert_eq!(Code::from(Some("a")), Code::from("a"));
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Code::default(), Code::None);
    }
}
