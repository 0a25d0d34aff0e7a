//! Namespacing rewriters.
//!
//! A [`Namespace`] does the actual work for one prefix. [`Namespaced`]
//! adds optional delegation to a parent rewriter so namespaces can nest,
//! and [`Rewriter`] lets callers pick between a working rewriter and a
//! passthrough at construction time instead of at every call site.

use tracing::{trace, warn};

use crate::command::Command;
use crate::error::{NamespaceError, Result};
use crate::registry;
use crate::reply::Reply;
use crate::result;

/// Separator placed between namespace and key when none is given.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Anything that can namespace commands and un-namespace their replies.
pub trait Rewrite: Send + Sync {
    /// Prefix every key-bearing token of `command`.
    fn rewrite(&self, command: Command) -> Result<Command>;

    /// Strip the namespace back out of the key positions of `reply`.
    ///
    /// `command` is the command the reply answers, rewritten or not.
    fn strip(&self, command: &Command, reply: Reply) -> Reply;

    /// The full text this rewriter puts in front of a key, parents
    /// included. Empty for a passthrough.
    fn key_prefix(&self) -> String;

    /// Rewrite a batch. Fails as a whole on the first unknown verb.
    fn rewrite_all(&self, commands: Vec<Command>) -> Result<Vec<Command>> {
        commands.into_iter().map(|cmd| self.rewrite(cmd)).collect()
    }
}

/// One namespace prefix and its separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    prefix: String,
    separator: String,
    qualifier: String,
}

impl Namespace {
    /// Namespace `prefix` with the default `:` separator.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_separator(prefix, DEFAULT_SEPARATOR)
    }

    /// Namespace `prefix` with a custom separator.
    pub fn with_separator(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let separator = separator.into();
        let qualifier = if prefix.is_empty() {
            String::new()
        } else {
            format!("{}{}", prefix, separator)
        };
        Self {
            prefix,
            separator,
            qualifier,
        }
    }

    /// The namespace prefix.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The separator.
    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// `prefix + separator`, or empty when the prefix is empty.
    #[inline]
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// An empty prefix turns this namespace into the identity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Qualify a single key.
    pub fn key(&self, key: &str) -> String {
        format!("{}{}", self.qualifier, key)
    }

    /// Namespace one command.
    ///
    /// Commands without arguments are returned as they are, registered or
    /// not. Otherwise the verb must be in the registry.
    pub fn apply(&self, mut command: Command) -> Result<Command> {
        if self.is_empty() || command.len() < 2 {
            return Ok(command);
        }
        let verb = command.verb_upper().unwrap_or_default();
        let Some(strategy) = registry::lookup(&verb) else {
            warn!(verb = %verb, namespace = %self.prefix, "unknown command, refusing to namespace");
            return Err(NamespaceError::UnknownCommand { verb });
        };
        strategy.apply(command.tokens_mut(), |token| token.prefixed(&self.qualifier));
        trace!(verb = %verb, strategy = %strategy, namespace = %self.prefix, "namespaced command");
        Ok(command)
    }

    /// Remove this namespace from the key positions of `reply`.
    #[inline]
    pub fn unapply(&self, command: &Command, reply: Reply) -> Reply {
        result::denamespace(command, reply, &self.qualifier)
    }
}

impl Rewrite for Namespace {
    fn rewrite(&self, command: Command) -> Result<Command> {
        self.apply(command)
    }

    fn strip(&self, command: &Command, reply: Reply) -> Reply {
        self.unapply(command, reply)
    }

    fn key_prefix(&self) -> String {
        self.qualifier.clone()
    }
}

/// A namespace that may sit on top of a parent rewriter.
///
/// The parent is borrowed, never owned or modified. On the way out the
/// parent prefixes first and this namespace wraps the result, so child
/// `app`/`-` over parent `tenant`/`:` turns `key` into `app-tenant:key`.
/// Replies lose the combined `app-tenant:` prefix in one step; keys that
/// carry only part of it are left alone.
#[derive(Clone)]
pub struct Namespaced<'p> {
    namespace: Namespace,
    parent: Option<&'p dyn Rewrite>,
}

impl Namespaced<'static> {
    /// A rewriter without a parent.
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            parent: None,
        }
    }
}

impl<'p> Namespaced<'p> {
    /// Nest `prefix`/`separator` on top of `parent`.
    pub fn wrap(
        parent: &'p dyn Rewrite,
        prefix: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Namespace::with_separator(prefix, separator),
            parent: Some(parent),
        }
    }

    /// This rewriter's own namespace.
    #[inline]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// True when a parent rewriter is attached.
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

impl Rewrite for Namespaced<'_> {
    fn rewrite(&self, command: Command) -> Result<Command> {
        let command = match self.parent {
            Some(parent) => parent.rewrite(command)?,
            None => command,
        };
        self.namespace.apply(command)
    }

    /// Only keys carrying the whole chain's prefix are stripped, and
    /// always of that whole prefix.
    fn strip(&self, command: &Command, reply: Reply) -> Reply {
        match self.parent {
            Some(_) => result::denamespace(command, reply, &self.key_prefix()),
            None => self.namespace.unapply(command, reply),
        }
    }

    fn key_prefix(&self) -> String {
        let parent = self.parent.map(|p| p.key_prefix()).unwrap_or_default();
        format!("{}{}", self.namespace.qualifier(), parent)
    }
}

impl std::fmt::Debug for Namespaced<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Namespaced")
            .field("namespace", &self.namespace)
            .field("has_parent", &self.has_parent())
            .finish()
    }
}

/// A working rewriter, or an explicit "do nothing".
#[derive(Clone, Debug)]
pub enum Rewriter<'p> {
    /// Commands and replies pass through untouched.
    Passthrough,
    /// Commands are namespaced.
    Namespaced(Namespaced<'p>),
}

impl Rewriter<'static> {
    /// Build a rewriter from a possibly absent or empty prefix.
    ///
    /// `None` and `Some("")` both yield [`Rewriter::Passthrough`].
    pub fn from_prefix(prefix: Option<&str>, separator: &str) -> Self {
        match prefix {
            Some(prefix) if !prefix.is_empty() => {
                Self::Namespaced(Namespaced::new(Namespace::with_separator(prefix, separator)))
            }
            _ => Self::Passthrough,
        }
    }
}

impl Rewriter<'_> {
    /// True for [`Rewriter::Passthrough`].
    #[inline]
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough)
    }

    /// The namespace applied by this rewriter, if any.
    pub fn namespace(&self) -> Option<&Namespace> {
        match self {
            Self::Passthrough => None,
            Self::Namespaced(inner) => Some(inner.namespace()),
        }
    }
}

impl Rewrite for Rewriter<'_> {
    fn rewrite(&self, command: Command) -> Result<Command> {
        match self {
            Self::Passthrough => Ok(command),
            Self::Namespaced(inner) => inner.rewrite(command),
        }
    }

    fn strip(&self, command: &Command, reply: Reply) -> Reply {
        match self {
            Self::Passthrough => reply,
            Self::Namespaced(inner) => inner.strip(command, reply),
        }
    }
    fn key_prefix(&self) -> String {
        match self {
            Self::Passthrough => String::new(),
            Self::Namespaced(inner) => inner.key_prefix(),
        }
    }
}
