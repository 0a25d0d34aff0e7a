//! # kvns-core
//!
//! Key namespacing for key-value store commands. Lets several tenants
//! share one store by prefixing every key, pattern and channel a command
//! names, and by stripping the prefix back out of replies that return
//! keys.
//!
//! ## Features
//!
//! - A static registry of store commands and where their keys live
//! - In-place rewriting that preserves command length and verb casing
//! - Per-command reply shapes for stripping the prefix from replies
//! - Nested namespaces by composing rewriters
//! - No I/O, no locks: everything here is a pure function of its inputs

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ```rust
//! use kvns_core::{Command, Namespace, Reply, Rewrite};
//!
//! let ns = Namespace::new("app");
//!
//! let cmd = ns.rewrite(Command::from(["MSET", "a", "1", "b", "2"])).unwrap();
//! assert_eq!(cmd.to_strings(), ["MSET", "app:a", "1", "app:b", "2"]);
//!
//! let keys = Command::from(["KEYS", "*"]);
//! let reply = ns.strip(&keys, Reply::bulk_array(["app:a", "app:b"]));
//! assert_eq!(reply, Reply::bulk_array(["a", "b"]));
//! ```
//!
//! ### Nesting
//!
//! ```rust
//! use kvns_core::{Command, Namespace, Namespaced, Rewrite};
//!
//! let tenant = Namespace::new("tenant");
//! let app = Namespaced::wrap(&tenant, "app", "-");
//!
//! let cmd = app.rewrite(Command::from(["GET", "key"])).unwrap();
//! assert_eq!(cmd.to_strings(), ["GET", "app-tenant:key"]);
//! ```

pub mod command;
pub mod error;
pub mod registry;
pub mod reply;
pub mod result;
pub mod rewriter;
pub mod strategy;
pub mod token;

pub use self::command::Command;
pub use self::error::{NamespaceError, ParseNameError, Result};
pub use self::registry::{CommandDef, Group, COMMANDS};
pub use self::reply::Reply;
pub use self::result::{denamespace, shape_for, ResultShape, RESULT_SHAPES};
pub use self::rewriter::{Namespace, Namespaced, Rewrite, Rewriter, DEFAULT_SEPARATOR};
pub use self::strategy::KeyStrategy;
pub use self::token::Token;
