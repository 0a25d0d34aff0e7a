//! Key-position strategies.
//!
//! Every registered command maps to one [`KeyStrategy`]. A strategy knows
//! where the key-bearing tokens sit in that command's argument list and
//! passes exactly those tokens through a rewrite callback, in place. The
//! command length never changes.
//!
//! Strategies never fail. Missing optional tokens are skipped, counts
//! that do not parse are `0`, negative counts rewrite nothing, and counts
//! larger than the number of remaining tokens are clamped.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;
use crate::token::Token;

/// Where the keys of a command live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyStrategy {
    /// No keys (`PING`, `MULTI`, `INFO`).
    None,
    /// Every argument is a key (`DEL`, `MGET`, `SUBSCRIBE`).
    All,
    /// Only the first argument (`GET`, `HSET`).
    First,
    /// Only the second argument (`OBJECT ENCODING key`, `XINFO STREAM key`).
    Second,
    /// The first two arguments, each if present (`RENAME`, `LMOVE`).
    FirstTwo,
    /// Every argument after the first (`BITOP op dest key...`).
    ExcludeFirst,
    /// Every argument but the trailing timeout (`BLPOP key... timeout`).
    ExcludeLast,
    /// Keys of a key/value run (`MSET k v k v`).
    Alternate,
    /// `EVAL script numkeys key... arg...`.
    EvalStyle,
    /// `SORT key [BY pattern] [GET pattern|#] [STORE dest]`.
    Sort,
    /// `GEORADIUS key ... [STORE dest] [STOREDIST dest]`.
    GeoradiusStyle,
    /// `XREAD ... STREAMS key... id...`.
    XreadStyle,
    /// `MIGRATE host port key|"" db timeout ... [KEYS key...]`.
    Migrate,
    /// `ZINTERSTORE dest numkeys key...`.
    ZinterstoreStyle,
    /// `BLMPOP timeout numkeys key...`.
    BlmpopStyle,
    /// `LMPOP numkeys key...`.
    LmpopStyle,
    /// `SCAN cursor [MATCH pattern]`; the pattern is namespaced.
    ScanCursorStyle,
    /// `HSCAN key cursor [MATCH pattern]`; the pattern matches fields, not keys.
    ScanStyle,
    /// `PUBSUB CHANNELS|NUMSUB|SHARDCHANNELS|SHARDNUMSUB ...`.
    PubsubStyle,
    /// `MEMORY USAGE key`.
    MemoryUsage,
}

impl KeyStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [KeyStrategy; 20] = [
        Self::None,
        Self::All,
        Self::First,
        Self::Second,
        Self::FirstTwo,
        Self::ExcludeFirst,
        Self::ExcludeLast,
        Self::Alternate,
        Self::EvalStyle,
        Self::Sort,
        Self::GeoradiusStyle,
        Self::XreadStyle,
        Self::Migrate,
        Self::ZinterstoreStyle,
        Self::BlmpopStyle,
        Self::LmpopStyle,
        Self::ScanCursorStyle,
        Self::ScanStyle,
        Self::PubsubStyle,
        Self::MemoryUsage,
    ];

    /// Get the string representation of this strategy.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
            Self::First => "first",
            Self::Second => "second",
            Self::FirstTwo => "first_two",
            Self::ExcludeFirst => "exclude_first",
            Self::ExcludeLast => "exclude_last",
            Self::Alternate => "alternate",
            Self::EvalStyle => "eval_style",
            Self::Sort => "sort",
            Self::GeoradiusStyle => "georadius_style",
            Self::XreadStyle => "xread_style",
            Self::Migrate => "migrate",
            Self::ZinterstoreStyle => "zinterstore_style",
            Self::BlmpopStyle => "blmpop_style",
            Self::LmpopStyle => "lmpop_style",
            Self::ScanCursorStyle => "scan_cursor_style",
            Self::ScanStyle => "scan_style",
            Self::PubsubStyle => "pubsub_style",
            Self::MemoryUsage => "memory_usage",
        }
    }

    /// Pass every key-bearing token of `tokens` through `rewrite`.
    ///
    /// `tokens` is the whole command, verb included.
    pub fn apply<F>(self, tokens: &mut [Token], mut rewrite: F)
    where
        F: FnMut(&Token) -> Token,
    {
        let len = tokens.len();
        match self {
            Self::None => {}
            Self::All => rewrite_range(tokens, 1, len, &mut rewrite),
            Self::First | Self::ScanStyle => rewrite_at(tokens, 1, &mut rewrite),
            Self::Second => rewrite_at(tokens, 2, &mut rewrite),
            Self::FirstTwo => {
                rewrite_at(tokens, 1, &mut rewrite);
                rewrite_at(tokens, 2, &mut rewrite);
            }
            Self::ExcludeFirst => rewrite_range(tokens, 2, len, &mut rewrite),
            Self::ExcludeLast => {
                if len >= 3 {
                    rewrite_range(tokens, 1, len - 1, &mut rewrite);
                }
            }
            Self::Alternate => {
                for token in tokens.iter_mut().skip(1).step_by(2) {
                    *token = rewrite(token);
                }
            }
            Self::EvalStyle => {
                if len >= 3 {
                    rewrite_counted(tokens, 2, 3, &mut rewrite);
                }
            }
            Self::Sort => {
                rewrite_at(tokens, 1, &mut rewrite);
                // Markers are checked against the already rewritten slice, so a
                // pattern that was just prefixed is never mistaken for a marker.
                for i in 1..len {
                    let target = if tokens[i].is_marker("BY") || tokens[i].is_marker("STORE") {
                        i + 1
                    } else if tokens[i].is_marker("GET") {
                        match tokens.get(i + 1) {
                            Some(next) if *next == "#" => continue,
                            _ => i + 1,
                        }
                    } else {
                        continue;
                    };
                    rewrite_at(tokens, target, &mut rewrite);
                }
            }
            Self::GeoradiusStyle => {
                rewrite_at(tokens, 1, &mut rewrite);
                for i in 1..len {
                    if tokens[i].is_marker("STORE") || tokens[i].is_marker("STOREDIST") {
                        rewrite_at(tokens, i + 1, &mut rewrite);
                    }
                }
            }
            Self::XreadStyle => {
                if let Some(streams) = position_of(tokens, "STREAMS") {
                    let keys = (len - streams - 1) / 2;
                    rewrite_range(tokens, streams + 1, streams + 1 + keys, &mut rewrite);
                }
            }
            Self::Migrate => match tokens.get(3) {
                Some(key) if !key.is_empty() => rewrite_at(tokens, 3, &mut rewrite),
                _ => {
                    if let Some(keys) = position_of(tokens, "KEYS") {
                        rewrite_range(tokens, keys + 1, len, &mut rewrite);
                    }
                }
            },
            Self::ZinterstoreStyle => {
                if len >= 3 {
                    rewrite_at(tokens, 1, &mut rewrite);
                    rewrite_counted(tokens, 2, 3, &mut rewrite);
                }
            }
            Self::BlmpopStyle => {
                if len >= 4 {
                    rewrite_counted(tokens, 2, 3, &mut rewrite);
                }
            }
            Self::LmpopStyle => {
                if len >= 3 {
                    rewrite_counted(tokens, 1, 2, &mut rewrite);
                }
            }
            Self::ScanCursorStyle => {
                let is_scan = tokens.first().is_some_and(|verb| verb.is_marker("SCAN"));
                if is_scan {
                    if let Some(pattern) = position_of(tokens, "MATCH") {
                        rewrite_at(tokens, pattern + 1, &mut rewrite);
                    }
                }
            }
            Self::PubsubStyle => {
                let Some(sub) = tokens.get(1) else {
                    return;
                };
                match sub.as_text().to_ascii_uppercase().as_str() {
                    "CHANNELS" | "SHARDCHANNELS" => rewrite_at(tokens, 2, &mut rewrite),
                    "NUMSUB" | "SHARDNUMSUB" => rewrite_range(tokens, 2, len, &mut rewrite),
                    _ => {}
                }
            }
            Self::MemoryUsage => {
                if tokens.get(1).is_some_and(|sub| sub.is_marker("USAGE")) {
                    rewrite_at(tokens, 2, &mut rewrite);
                }
            }
        }
    }
}

#[inline]
fn rewrite_at<F: FnMut(&Token) -> Token>(tokens: &mut [Token], index: usize, rewrite: &mut F) {
    if let Some(token) = tokens.get_mut(index) {
        *token = rewrite(token);
    }
}

fn rewrite_range<F: FnMut(&Token) -> Token>(
    tokens: &mut [Token],
    start: usize,
    end: usize,
    rewrite: &mut F,
) {
    let end = end.min(tokens.len());
    if start >= end {
        return;
    }
    for token in &mut tokens[start..end] {
        *token = rewrite(token);
    }
}

/// Rewrite the run of keys announced by the count at `count_at`.
fn rewrite_counted<F: FnMut(&Token) -> Token>(
    tokens: &mut [Token],
    count_at: usize,
    first_key: usize,
    rewrite: &mut F,
) {
    let Some(count) = tokens.get(count_at).map(Token::as_count) else {
        return;
    };
    let available = tokens.len().saturating_sub(first_key);
    let keys = usize::try_from(count).unwrap_or(0).min(available);
    rewrite_range(tokens, first_key, first_key + keys, rewrite);
}

/// First argument position (never the verb) holding `marker`.
fn position_of(tokens: &[Token], marker: &str) -> Option<usize> {
    tokens
        .iter()
        .skip(1)
        .position(|t| t.is_marker(marker))
        .map(|i| i + 1)
}

impl FromStr for KeyStrategy {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError {
                kind: "strategy",
                name: s.to_owned(),
            })
    }
}

impl fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
