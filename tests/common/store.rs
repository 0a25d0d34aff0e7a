//! In-memory store transport.

use std::collections::{BTreeMap, VecDeque};

use async_trait::async_trait;
use kvns::adapter::Transport;
use kvns::error::ClientError;
use kvns_core::{Command, Reply};
use parking_lot::Mutex;

#[derive(Default)]
struct Data {
    strings: BTreeMap<String, String>,
    lists: BTreeMap<String, VecDeque<String>>,
}

impl Data {
    fn keys(&self) -> impl Iterator<Item = &String> {
        let mut keys: Vec<&String> = self.strings.keys().chain(self.lists.keys()).collect();
        keys.sort();
        keys.into_iter()
    }

    fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key) || self.lists.contains_key(key)
    }

    fn remove(&mut self, key: &str) -> bool {
        self.strings.remove(key).is_some() | self.lists.remove(key).is_some()
    }
}

/// A single-node store that records every command it receives.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Data>,
    sent: Mutex<Vec<Command>>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands exactly as they reached the store.
    pub fn sent(&self) -> Vec<Vec<String>> {
        self.sent.lock().iter().map(Command::to_strings).collect()
    }

    /// Every stored key, sorted.
    pub fn raw_keys(&self) -> Vec<String> {
        self.data.lock().keys().cloned().collect()
    }

    fn execute(&self, args: &[String]) -> Result<Reply, ClientError> {
        let verb = args[0].to_ascii_uppercase();
        let mut data = self.data.lock();
        let reply = match (verb.as_str(), &args[1..]) {
            ("SET", [key, value, ..]) => {
                data.lists.remove(key);
                data.strings.insert(key.clone(), value.clone());
                Reply::from("OK")
            }
            ("GET", [key]) => data
                .strings
                .get(key)
                .map_or(Reply::Nil, |v| Reply::from(v.as_str())),
            ("MSET", pairs) if !pairs.is_empty() && pairs.len() % 2 == 0 => {
                for pair in pairs.chunks(2) {
                    data.strings.insert(pair[0].clone(), pair[1].clone());
                }
                Reply::from("OK")
            }
            ("MGET", keys) => Reply::Array(
                keys.iter()
                    .map(|k| data.strings.get(k).map_or(Reply::Nil, |v| Reply::from(v.as_str())))
                    .collect(),
            ),
            ("DEL", keys) => Reply::Int(keys.iter().filter(|k| data.remove(k)).count() as i64),
            ("EXISTS", keys) => Reply::Int(keys.iter().filter(|k| data.contains(k)).count() as i64),
            ("KEYS", [pattern]) => Reply::bulk_array(
                data.keys()
                    .filter(|k| glob_match(pattern, k))
                    .cloned()
                    .collect::<Vec<_>>(),
            ),
            ("SCAN", [_cursor, rest @ ..]) => {
                let pattern = match rest {
                    [opt, p, ..] if opt.eq_ignore_ascii_case("MATCH") => p.as_str(),
                    _ => "*",
                };
                let keys: Vec<String> = data
                    .keys()
                    .filter(|k| glob_match(pattern, k))
                    .cloned()
                    .collect();
                Reply::Array(vec![Reply::from("0"), Reply::bulk_array(keys)])
            }
            ("LPUSH" | "RPUSH", [key, values @ ..]) if !values.is_empty() => {
                let list = data.lists.entry(key.clone()).or_default();
                for v in values {
                    if verb == "LPUSH" {
                        list.push_front(v.clone());
                    } else {
                        list.push_back(v.clone());
                    }
                }
                Reply::Int(list.len() as i64)
            }
            ("LLEN", [key]) => Reply::Int(data.lists.get(key).map_or(0, |l| l.len() as i64)),
            ("BLPOP" | "BRPOP", [keys @ .., _timeout]) if !keys.is_empty() => {
                let mut popped = Reply::Nil;
                for key in keys {
                    let Some(list) = data.lists.get_mut(key) else {
                        continue;
                    };
                    let value = if verb == "BLPOP" {
                        list.pop_front()
                    } else {
                        list.pop_back()
                    };
                    if let Some(value) = value {
                        if list.is_empty() {
                            data.lists.remove(key);
                        }
                        popped = Reply::bulk_array([key.clone(), value]);
                        break;
                    }
                }
                popped
            }
            ("PING", []) => Reply::from("PONG"),
            _ => {
                return Err(ClientError::Server(format!(
                    "ERR unknown command or wrong arguments for '{}'",
                    args[0]
                )));
            }
        };
        Ok(reply)
    }
}

#[async_trait]
impl Transport for MemoryStore {
    async fn call(&self, command: Command) -> Result<Reply, ClientError> {
        let args = command.to_strings();
        self.sent.lock().push(command);
        if args.is_empty() {
            return Err(ClientError::Server("ERR empty command".to_string()));
        }
        self.execute(&args)
    }
}

/// `*` and `?` glob matching, enough for the patterns the tests use.
fn glob_match(pattern: &str, text: &str) -> bool {
    fn go(p: &[u8], t: &[u8]) -> bool {
        match (p.first(), t.first()) {
            (None, None) => true,
            (Some(b'*'), _) => go(&p[1..], t) || (!t.is_empty() && go(p, &t[1..])),
            (Some(b'?'), Some(_)) => go(&p[1..], &t[1..]),
            (Some(a), Some(b)) if a == b => go(&p[1..], &t[1..]),
            _ => false,
        }
    }
    go(pattern.as_bytes(), text.as_bytes())
}
