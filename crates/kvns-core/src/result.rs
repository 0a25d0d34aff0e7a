//! Reply denamespacing.
//!
//! Argument key positions and reply key positions have nothing in common,
//! so replies get their own catalog: each entry names the command (or
//! command plus sub-verb) and the [`ResultShape`] of its reply. Only the
//! positions a shape declares are touched; values that merely happen to
//! start with the namespace are left alone. Commands without an entry
//! pass their reply through verbatim.
//!
//! Stripping never fails. A reply that does not look like its declared
//! shape (an error string, a nil, a RESP3 variant we do not expect) is
//! returned unchanged.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::command::Command;
use crate::error::ParseNameError;
use crate::reply::Reply;

/// Which parts of a reply are keys or channel names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResultShape {
    /// A single key (`RANDOMKEY`).
    Key,
    /// A flat list of keys or channels (`KEYS`, `PUBSUB CHANNELS`).
    KeyList,
    /// `[cursor, [key, ...]]` (`SCAN`).
    Cursor,
    /// `[name, count, name, count]`, or a map of name to count (`PUBSUB NUMSUB`).
    NameCountPairs,
    /// `[key, ...]` where only the first element names a key (`BLPOP`, `LMPOP`).
    KeyFirst,
    /// `[[stream, entries], ...]`, or a map of stream to entries (`XREAD`).
    PerStream,
}

impl ResultShape {
    /// Every shape, in declaration order.
    pub const ALL: [ResultShape; 6] = [
        Self::Key,
        Self::KeyList,
        Self::Cursor,
        Self::NameCountPairs,
        Self::KeyFirst,
        Self::PerStream,
    ];

    /// Get the string representation of this shape.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::KeyList => "key_list",
            Self::Cursor => "cursor",
            Self::NameCountPairs => "name_count_pairs",
            Self::KeyFirst => "key_first",
            Self::PerStream => "per_stream",
        }
    }

    /// Remove `qualifier` from every key position of `reply`.
    pub fn strip(self, reply: Reply, qualifier: &str) -> Reply {
        match (self, reply) {
            (Self::Key, reply) => strip_bulk(reply, qualifier),
            (Self::KeyList, Reply::Array(items)) => Reply::Array(
                items
                    .into_iter()
                    .map(|item| strip_bulk(item, qualifier))
                    .collect(),
            ),
            (Self::Cursor, Reply::Array(mut items)) => {
                if items.len() == 2 {
                    let keys = items.pop().unwrap_or(Reply::Nil);
                    items.push(Self::KeyList.strip(keys, qualifier));
                }
                Reply::Array(items)
            }
            (Self::NameCountPairs, Reply::Array(items)) => Reply::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        if i % 2 == 0 {
                            strip_bulk(item, qualifier)
                        } else {
                            item
                        }
                    })
                    .collect(),
            ),
            (Self::NameCountPairs | Self::PerStream, Reply::Map(entries)) => Reply::Map(
                entries
                    .into_iter()
                    .map(|(name, value)| (strip_string(name, qualifier), value))
                    .collect(),
            ),
            (Self::KeyFirst, Reply::Array(mut items)) => {
                if let Some(first) = items.first_mut() {
                    let key = std::mem::replace(first, Reply::Nil);
                    *first = strip_bulk(key, qualifier);
                }
                Reply::Array(items)
            }
            (Self::PerStream, Reply::Array(streams)) => Reply::Array(
                streams
                    .into_iter()
                    .map(|stream| Self::KeyFirst.strip(stream, qualifier))
                    .collect(),
            ),
            (_, reply) => reply,
        }
    }
}

/// Static list of commands whose replies carry keys.
///
/// Sub-verb entries are written `"VERB SUB"`.
pub const RESULT_SHAPES: &[(&str, ResultShape)] = &[
    ("KEYS", ResultShape::KeyList),
    ("RANDOMKEY", ResultShape::Key),
    ("SCAN", ResultShape::Cursor),
    ("PUBSUB CHANNELS", ResultShape::KeyList),
    ("PUBSUB SHARDCHANNELS", ResultShape::KeyList),
    ("PUBSUB NUMSUB", ResultShape::NameCountPairs),
    ("PUBSUB SHARDNUMSUB", ResultShape::NameCountPairs),
    ("BLPOP", ResultShape::KeyFirst),
    ("BRPOP", ResultShape::KeyFirst),
    ("BZPOPMIN", ResultShape::KeyFirst),
    ("BZPOPMAX", ResultShape::KeyFirst),
    ("LMPOP", ResultShape::KeyFirst),
    ("BLMPOP", ResultShape::KeyFirst),
    ("ZMPOP", ResultShape::KeyFirst),
    ("BZMPOP", ResultShape::KeyFirst),
    ("XREAD", ResultShape::PerStream),
    ("XREADGROUP", ResultShape::PerStream),
];

fn index() -> &'static HashMap<&'static str, ResultShape> {
    static INDEX: OnceLock<HashMap<&'static str, ResultShape>> = OnceLock::new();
    INDEX.get_or_init(|| RESULT_SHAPES.iter().copied().collect())
}

/// The declared reply shape of `command`, if any.
///
/// `"VERB SUB"` entries take precedence over a bare `"VERB"` entry.
pub fn shape_for(command: &Command) -> Option<ResultShape> {
    let verb = command.verb_upper()?;
    let index = index();
    if let Some(sub) = command.get(1) {
        let key = format!("{} {}", verb, sub.as_text().to_ascii_uppercase());
        if let Some(shape) = index.get(key.as_str()) {
            return Some(*shape);
        }
    }
    index.get(verb.as_str()).copied()
}

/// Strip `qualifier` (`namespace + separator`) from the key positions of
/// `reply`, as declared for `command`.
pub fn denamespace(command: &Command, reply: Reply, qualifier: &str) -> Reply {
    if qualifier.is_empty() {
        return reply;
    }
    match shape_for(command) {
        Some(shape) => shape.strip(reply, qualifier),
        None => reply,
    }
}

fn strip_bulk(reply: Reply, qualifier: &str) -> Reply {
    match reply {
        Reply::Bulk(s) => Reply::Bulk(strip_string(s, qualifier)),
        other => other,
    }
}

/// Remove a leading `qualifier`, once. Anything else is returned untouched.
fn strip_string(mut s: String, qualifier: &str) -> String {
    if !qualifier.is_empty() && s.starts_with(qualifier) {
        s.replace_range(..qualifier.len(), "");
    }
    s
}

impl FromStr for ResultShape {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError {
                kind: "result shape",
                name: s.to_owned(),
            })
    }
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
