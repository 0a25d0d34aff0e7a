//! Command argument tokens.
//!
//! Clients hand the store arguments of mixed type: strings, integers,
//! floats. Everything that gets rewritten or compared against a literal
//! marker (`STORE`, `MATCH`, ...) is first coerced to its string form;
//! tokens that are left alone keep their original type.

use std::borrow::Cow;
use std::fmt;

/// A single command token.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Token {
    /// A string (or binary-safe text) argument.
    Str(String),
    /// An integer argument.
    Int(i64),
    /// A floating point argument.
    Float(f64),
}

impl Token {
    /// The canonical string form of this token.
    ///
    /// Floats use Rust's shortest round-trip formatting, so `2.0` renders
    /// as `"2"` rather than `"2.0"` as some other clients print it.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
        }
    }

    /// Borrow the string payload, if this is a string token.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// ASCII case-insensitive comparison against a literal marker.
    pub fn is_marker(&self, marker: &str) -> bool {
        match self {
            Self::Str(s) => s.eq_ignore_ascii_case(marker),
            _ => self.as_text().eq_ignore_ascii_case(marker),
        }
    }

    /// True for the empty string. Numbers are never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }

    /// Interpret this token as a key count.
    ///
    /// Anything that does not parse as an integer counts as `0`. Negative
    /// values are returned as-is; callers clamp them.
    pub fn as_count(&self) -> i64 {
        match self {
            Self::Int(n) => *n,
            Self::Float(f) if f.is_finite() => f.trunc() as i64,
            Self::Float(_) => 0,
            Self::Str(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// Build the string token `qualifier + self`.
    pub fn prefixed(&self, qualifier: &str) -> Token {
        let text = self.as_text();
        let mut out = String::with_capacity(qualifier.len() + text.len());
        out.push_str(qualifier);
        out.push_str(&text);
        Token::Str(out)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Str(s.to_owned())
    }
}

impl From<&String> for Token {
    fn from(s: &String) -> Self {
        Token::Str(s.clone())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Str(s)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Int(n)
    }
}

impl From<i32> for Token {
    fn from(n: i32) -> Self {
        Token::Int(n.into())
    }
}

impl From<u32> for Token {
    fn from(n: u32) -> Self {
        Token::Int(n.into())
    }
}

impl From<f64> for Token {
    fn from(x: f64) -> Self {
        Token::Float(x)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == *other
    }
}
