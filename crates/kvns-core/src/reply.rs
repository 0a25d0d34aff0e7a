//! Reply values as handed back by the transport.

/// A decoded store reply.
///
/// Mirrors the wire reply types: null, integers, doubles, bulk strings,
/// arrays and maps. Map entries keep their wire order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reply {
    /// Null / nil reply.
    Nil,
    /// Integer reply.
    Int(i64),
    /// Double reply.
    Float(f64),
    /// Bulk or simple string reply.
    Bulk(String),
    /// Array reply.
    Array(Vec<Reply>),
    /// Map reply, string keys only.
    Map(Vec<(String, Reply)>),
}

impl Reply {
    /// Borrow the string payload of a bulk reply.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bulk(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements of an array reply.
    pub fn as_array(&self) -> Option<&[Reply]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// True for [`Reply::Nil`].
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Build an array of bulk strings.
    pub fn bulk_array<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Array(items.into_iter().map(|s| Self::Bulk(s.into())).collect())
    }
}

impl From<&str> for Reply {
    fn from(s: &str) -> Self {
        Reply::Bulk(s.to_owned())
    }
}

impl From<String> for Reply {
    fn from(s: String) -> Self {
        Reply::Bulk(s)
    }
}

impl From<i64> for Reply {
    fn from(n: i64) -> Self {
        Reply::Int(n)
    }
}

impl From<f64> for Reply {
    fn from(x: f64) -> Self {
        Reply::Float(x)
    }
}

impl From<Vec<Reply>> for Reply {
    fn from(items: Vec<Reply>) -> Self {
        Reply::Array(items)
    }
}
