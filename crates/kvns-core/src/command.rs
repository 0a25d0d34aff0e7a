//! Command values: a verb followed by its arguments.

use std::fmt;
use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use crate::token::Token;

/// An ordered token list whose first token is the verb.
///
/// The verb keeps whatever casing the caller used; lookups uppercase it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Command {
    tokens: SmallVec<[Token; 8]>,
}

impl Command {
    /// Build a command from a verb and its arguments.
    pub fn new<V, I, A>(verb: V, args: I) -> Self
    where
        V: Into<Token>,
        I: IntoIterator<Item = A>,
        A: Into<Token>,
    {
        let mut tokens = SmallVec::new();
        tokens.push(verb.into());
        tokens.extend(args.into_iter().map(Into::into));
        Self { tokens }
    }

    /// The verb token, if the command is not empty.
    pub fn verb(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// The verb uppercased for registry lookups.
    pub fn verb_upper(&self) -> Option<String> {
        self.verb().map(|v| v.as_text().to_ascii_uppercase())
    }

    /// Token at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// All tokens, verb included.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Mutable view of all tokens. The length cannot change through it.
    #[inline]
    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Number of tokens, verb included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when there is not even a verb.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Every token in its string form.
    pub fn to_strings(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.as_text().into_owned()).collect()
    }

    /// Consume the command and return its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens.into_vec()
    }
}

impl Index<usize> for Command {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IndexMut<usize> for Command {
    fn index_mut(&mut self, index: usize) -> &mut Token {
        &mut self.tokens[index]
    }
}

impl<T: Into<Token>> FromIterator<T> for Command {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Token>> From<Vec<T>> for Command {
    fn from(tokens: Vec<T>) -> Self {
        tokens.into_iter().collect()
    }
}

impl<T: Into<Token>, const N: usize> From<[T; N]> for Command {
    fn from(tokens: [T; N]) -> Self {
        tokens.into_iter().collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
