//! The command registry: verb to [`KeyStrategy`].
//!
//! The table is static and process-wide. A verb that is not listed here
//! cannot be namespaced; the rewriter refuses it rather than guessing.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::strategy::KeyStrategy;
use crate::strategy::KeyStrategy as S;

/// Command family, as grouped by the store's command reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Group {
    /// Keyspace commands (`DEL`, `EXPIRE`, `SCAN`).
    Generic,
    /// Bit operations on strings.
    Bitmap,
    /// String values.
    String,
    /// Lists, including blocking pops.
    List,
    /// Sets.
    Set,
    /// Sorted sets.
    SortedSet,
    /// Hashes and hash-field expiry.
    Hash,
    /// HyperLogLog counters.
    HyperLogLog,
    /// Geospatial indexes.
    Geo,
    /// Streams.
    Stream,
    /// Publish/subscribe.
    Pubsub,
    /// `MULTI`/`EXEC`/`WATCH`.
    Transaction,
    /// Lua scripts and functions.
    Scripting,
    /// Connection management.
    Connection,
    /// Server administration.
    Server,
}

/// Definition of a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDef {
    /// Uppercase verb (e.g. "ZINTERSTORE")
    pub name: &'static str,
    /// Command family
    pub group: Group,
    /// Where the command's keys live
    pub strategy: KeyStrategy,
}

const fn def(name: &'static str, group: Group, strategy: KeyStrategy) -> CommandDef {
    CommandDef {
        name,
        group,
        strategy,
    }
}

/// Static list of supported commands.
pub const COMMANDS: &[CommandDef] = &[
    // Generic
    def("DEL", Group::Generic, S::All),
    def("EXISTS", Group::Generic, S::All),
    def("EXPIRE", Group::Generic, S::First),
    def("EXPIREAT", Group::Generic, S::First),
    def("KEYS", Group::Generic, S::First),
    def("MOVE", Group::Generic, S::First),
    def("PERSIST", Group::Generic, S::First),
    def("PEXPIRE", Group::Generic, S::First),
    def("PEXPIREAT", Group::Generic, S::First),
    def("PTTL", Group::Generic, S::First),
    def("RANDOMKEY", Group::Generic, S::None),
    def("RENAME", Group::Generic, S::FirstTwo),
    def("RENAMENX", Group::Generic, S::FirstTwo),
    def("RESTORE", Group::Generic, S::First),
    def("TTL", Group::Generic, S::First),
    def("TYPE", Group::Generic, S::First),
    def("UNLINK", Group::Generic, S::All),
    def("SCAN", Group::Generic, S::ScanCursorStyle),
    def("DUMP", Group::Generic, S::First),
    def("COPY", Group::Generic, S::FirstTwo),
    def("MIGRATE", Group::Generic, S::Migrate),
    def("SORT", Group::Generic, S::Sort),
    def("SORT_RO", Group::Generic, S::Sort),
    def("TOUCH", Group::Generic, S::All),
    def("WAIT", Group::Generic, S::None),
    def("WAITAOF", Group::Generic, S::None),
    def("OBJECT", Group::Generic, S::Second),
    def("RESTORE-ASKING", Group::Generic, S::First),
    def("EXPIRETIME", Group::Generic, S::First),
    def("PEXPIRETIME", Group::Generic, S::First),
    // Bitmap
    def("BITCOUNT", Group::Bitmap, S::First),
    def("BITOP", Group::Bitmap, S::ExcludeFirst),
    def("BITPOS", Group::Bitmap, S::First),
    def("BITFIELD", Group::Bitmap, S::First),
    def("BITFIELD_RO", Group::Bitmap, S::First),
    def("GETBIT", Group::Bitmap, S::First),
    def("SETBIT", Group::Bitmap, S::First),
    // String
    def("APPEND", Group::String, S::First),
    def("DECR", Group::String, S::First),
    def("DECRBY", Group::String, S::First),
    def("GET", Group::String, S::First),
    def("GETRANGE", Group::String, S::First),
    def("GETSET", Group::String, S::First),
    def("INCR", Group::String, S::First),
    def("INCRBY", Group::String, S::First),
    def("INCRBYFLOAT", Group::String, S::First),
    def("MGET", Group::String, S::All),
    def("MSET", Group::String, S::Alternate),
    def("MSETNX", Group::String, S::Alternate),
    def("PSETEX", Group::String, S::First),
    def("SET", Group::String, S::First),
    def("SETEX", Group::String, S::First),
    def("SETNX", Group::String, S::First),
    def("SETRANGE", Group::String, S::First),
    def("STRLEN", Group::String, S::First),
    def("GETDEL", Group::String, S::First),
    def("GETEX", Group::String, S::First),
    def("LCS", Group::String, S::FirstTwo),
    def("SUBSTR", Group::String, S::First),
    // List
    def("BLPOP", Group::List, S::ExcludeLast),
    def("BRPOP", Group::List, S::ExcludeLast),
    def("BRPOPLPUSH", Group::List, S::FirstTwo),
    def("LINDEX", Group::List, S::First),
    def("LINSERT", Group::List, S::First),
    def("LLEN", Group::List, S::First),
    def("LPOP", Group::List, S::First),
    def("LPUSH", Group::List, S::First),
    def("LPUSHX", Group::List, S::First),
    def("LRANGE", Group::List, S::First),
    def("LREM", Group::List, S::First),
    def("LSET", Group::List, S::First),
    def("LTRIM", Group::List, S::First),
    def("RPOP", Group::List, S::First),
    def("RPOPLPUSH", Group::List, S::FirstTwo),
    def("RPUSH", Group::List, S::First),
    def("RPUSHX", Group::List, S::First),
    def("LMOVE", Group::List, S::FirstTwo),
    def("BLMOVE", Group::List, S::FirstTwo),
    def("LMPOP", Group::List, S::LmpopStyle),
    def("BLMPOP", Group::List, S::BlmpopStyle),
    def("LPOS", Group::List, S::First),
    // Set
    def("SADD", Group::Set, S::First),
    def("SCARD", Group::Set, S::First),
    def("SDIFF", Group::Set, S::All),
    def("SDIFFSTORE", Group::Set, S::All),
    def("SINTER", Group::Set, S::All),
    def("SINTERSTORE", Group::Set, S::All),
    def("SISMEMBER", Group::Set, S::First),
    def("SMEMBERS", Group::Set, S::First),
    def("SMISMEMBER", Group::Set, S::First),
    def("SMOVE", Group::Set, S::FirstTwo),
    def("SPOP", Group::Set, S::First),
    def("SRANDMEMBER", Group::Set, S::First),
    def("SREM", Group::Set, S::First),
    def("SUNION", Group::Set, S::All),
    def("SUNIONSTORE", Group::Set, S::All),
    def("SSCAN", Group::Set, S::ScanStyle),
    def("SINTERCARD", Group::Set, S::LmpopStyle),
    // Sorted-set
    def("BZPOPMIN", Group::SortedSet, S::ExcludeLast),
    def("BZPOPMAX", Group::SortedSet, S::ExcludeLast),
    def("ZADD", Group::SortedSet, S::First),
    def("ZCARD", Group::SortedSet, S::First),
    def("ZCOUNT", Group::SortedSet, S::First),
    def("ZINCRBY", Group::SortedSet, S::First),
    def("ZINTERSTORE", Group::SortedSet, S::ZinterstoreStyle),
    def("ZLEXCOUNT", Group::SortedSet, S::First),
    def("ZPOPMAX", Group::SortedSet, S::First),
    def("ZPOPMIN", Group::SortedSet, S::First),
    def("ZRANGE", Group::SortedSet, S::First),
    def("ZRANGEBYLEX", Group::SortedSet, S::First),
    def("ZREVRANGEBYLEX", Group::SortedSet, S::First),
    def("ZRANGEBYSCORE", Group::SortedSet, S::First),
    def("ZRANK", Group::SortedSet, S::First),
    def("ZREM", Group::SortedSet, S::First),
    def("ZREMRANGEBYLEX", Group::SortedSet, S::First),
    def("ZREMRANGEBYRANK", Group::SortedSet, S::First),
    def("ZREMRANGEBYSCORE", Group::SortedSet, S::First),
    def("ZREVRANGE", Group::SortedSet, S::First),
    def("ZREVRANGEBYSCORE", Group::SortedSet, S::First),
    def("ZREVRANK", Group::SortedSet, S::First),
    def("ZSCORE", Group::SortedSet, S::First),
    def("ZUNIONSTORE", Group::SortedSet, S::ZinterstoreStyle),
    def("ZMSCORE", Group::SortedSet, S::First),
    def("ZSCAN", Group::SortedSet, S::ScanStyle),
    def("ZDIFF", Group::SortedSet, S::LmpopStyle),
    def("ZDIFFSTORE", Group::SortedSet, S::ZinterstoreStyle),
    def("ZINTER", Group::SortedSet, S::LmpopStyle),
    def("ZUNION", Group::SortedSet, S::LmpopStyle),
    def("ZRANDMEMBER", Group::SortedSet, S::First),
    def("BZMPOP", Group::SortedSet, S::BlmpopStyle),
    def("ZMPOP", Group::SortedSet, S::LmpopStyle),
    def("ZINTERCARD", Group::SortedSet, S::LmpopStyle),
    def("ZRANGESTORE", Group::SortedSet, S::FirstTwo),
    // Hash
    def("HDEL", Group::Hash, S::First),
    def("HEXISTS", Group::Hash, S::First),
    def("HGET", Group::Hash, S::First),
    def("HGETALL", Group::Hash, S::First),
    def("HINCRBY", Group::Hash, S::First),
    def("HINCRBYFLOAT", Group::Hash, S::First),
    def("HKEYS", Group::Hash, S::First),
    def("HLEN", Group::Hash, S::First),
    def("HMGET", Group::Hash, S::First),
    def("HMSET", Group::Hash, S::First),
    def("HSET", Group::Hash, S::First),
    def("HSETNX", Group::Hash, S::First),
    def("HSTRLEN", Group::Hash, S::First),
    def("HVALS", Group::Hash, S::First),
    def("HSCAN", Group::Hash, S::ScanStyle),
    def("HRANDFIELD", Group::Hash, S::First),
    def("HEXPIRE", Group::Hash, S::First),
    def("HEXPIREAT", Group::Hash, S::First),
    def("HEXPIRETIME", Group::Hash, S::First),
    def("HPERSIST", Group::Hash, S::First),
    def("HPEXPIRE", Group::Hash, S::First),
    def("HPEXPIREAT", Group::Hash, S::First),
    def("HPEXPIRETIME", Group::Hash, S::First),
    def("HTTL", Group::Hash, S::First),
    def("HPTTL", Group::Hash, S::First),
    def("HGETF", Group::Hash, S::First),
    def("HSETF", Group::Hash, S::First),
    // Hyperloglog
    def("PFADD", Group::HyperLogLog, S::First),
    def("PFCOUNT", Group::HyperLogLog, S::All),
    def("PFMERGE", Group::HyperLogLog, S::All),
    def("PFDEBUG", Group::HyperLogLog, S::Second),
    // Geo
    def("GEOADD", Group::Geo, S::First),
    def("GEODIST", Group::Geo, S::First),
    def("GEOHASH", Group::Geo, S::First),
    def("GEOPOS", Group::Geo, S::First),
    def("GEORADIUS", Group::Geo, S::GeoradiusStyle),
    def("GEORADIUSBYMEMBER", Group::Geo, S::GeoradiusStyle),
    def("GEOSEARCH", Group::Geo, S::First),
    def("GEOSEARCHSTORE", Group::Geo, S::FirstTwo),
    def("GEORADIUS_RO", Group::Geo, S::GeoradiusStyle),
    def("GEORADIUSBYMEMBER_RO", Group::Geo, S::GeoradiusStyle),
    // Stream
    def("XADD", Group::Stream, S::First),
    def("XRANGE", Group::Stream, S::First),
    def("XREVRANGE", Group::Stream, S::First),
    def("XLEN", Group::Stream, S::First),
    def("XREAD", Group::Stream, S::XreadStyle),
    def("XREADGROUP", Group::Stream, S::XreadStyle),
    def("XGROUP", Group::Stream, S::Second),
    def("XACK", Group::Stream, S::First),
    def("XCLAIM", Group::Stream, S::First),
    def("XDEL", Group::Stream, S::First),
    def("XTRIM", Group::Stream, S::First),
    def("XPENDING", Group::Stream, S::First),
    def("XINFO", Group::Stream, S::Second),
    def("XAUTOCLAIM", Group::Stream, S::First),
    def("XSETID", Group::Stream, S::First),
    // Pubsub
    def("PSUBSCRIBE", Group::Pubsub, S::All),
    def("PUBLISH", Group::Pubsub, S::First),
    def("PUNSUBSCRIBE", Group::Pubsub, S::All),
    def("SUBSCRIBE", Group::Pubsub, S::All),
    def("UNSUBSCRIBE", Group::Pubsub, S::All),
    def("PUBSUB", Group::Pubsub, S::PubsubStyle),
    def("SPUBLISH", Group::Pubsub, S::None),
    def("SSUBSCRIBE", Group::Pubsub, S::None),
    def("SUNSUBSCRIBE", Group::Pubsub, S::None),
    // Transactions
    def("DISCARD", Group::Transaction, S::None),
    def("EXEC", Group::Transaction, S::None),
    def("MULTI", Group::Transaction, S::None),
    def("UNWATCH", Group::Transaction, S::None),
    def("WATCH", Group::Transaction, S::All),
    // Scripting
    def("EVAL", Group::Scripting, S::EvalStyle),
    def("EVALSHA", Group::Scripting, S::EvalStyle),
    def("SCRIPT", Group::Scripting, S::None),
    def("EVAL_RO", Group::Scripting, S::EvalStyle),
    def("EVALSHA_RO", Group::Scripting, S::EvalStyle),
    def("FCALL", Group::Scripting, S::EvalStyle),
    def("FCALL_RO", Group::Scripting, S::EvalStyle),
    def("FUNCTION", Group::Scripting, S::None),
    // Connection
    def("AUTH", Group::Connection, S::None),
    def("ECHO", Group::Connection, S::None),
    def("PING", Group::Connection, S::None),
    def("QUIT", Group::Connection, S::None),
    def("SELECT", Group::Connection, S::None),
    def("SWAPDB", Group::Connection, S::None),
    def("RESET", Group::Connection, S::None),
    // Server
    def("BGREWRITEAOF", Group::Server, S::None),
    def("BGSAVE", Group::Server, S::None),
    def("CLIENT", Group::Server, S::None),
    def("COMMAND", Group::Server, S::None),
    def("CONFIG", Group::Server, S::None),
    def("DBSIZE", Group::Server, S::None),
    def("DEBUG", Group::Server, S::None),
    def("FLUSHALL", Group::Server, S::None),
    def("FLUSHDB", Group::Server, S::None),
    def("INFO", Group::Server, S::None),
    def("LASTSAVE", Group::Server, S::None),
    def("MEMORY", Group::Server, S::MemoryUsage),
    def("MONITOR", Group::Server, S::None),
    def("SAVE", Group::Server, S::None),
    def("SHUTDOWN", Group::Server, S::None),
    def("SLAVEOF", Group::Server, S::None),
    def("SLOWLOG", Group::Server, S::None),
    def("SYNC", Group::Server, S::None),
    def("TIME", Group::Server, S::None),
    def("LATENCY", Group::Server, S::None),
    def("LOLWUT", Group::Server, S::None),
    def("ACL", Group::Server, S::None),
    def("MODULE", Group::Server, S::None),
    def("CLUSTER", Group::Server, S::None),
    def("HELLO", Group::Server, S::None),
    def("FAILOVER", Group::Server, S::None),
    def("REPLICAOF", Group::Server, S::None),
    def("PSYNC", Group::Server, S::None),
];

fn index() -> &'static HashMap<&'static str, &'static CommandDef> {
    static INDEX: OnceLock<HashMap<&'static str, &'static CommandDef>> = OnceLock::new();
    INDEX.get_or_init(|| COMMANDS.iter().map(|def| (def.name, def)).collect())
}

/// Look up the definition for `verb`, case-insensitively.
pub fn lookup_def(verb: &str) -> Option<&'static CommandDef> {
    let index = index();
    match index.get(verb) {
        Some(def) => Some(*def),
        None => index.get(verb.to_ascii_uppercase().as_str()).copied(),
    }
}

/// Look up the key strategy for `verb`, case-insensitively.
#[inline]
pub fn lookup(verb: &str) -> Option<KeyStrategy> {
    lookup_def(verb).map(|def| def.strategy)
}

/// Check if a verb is registered.
pub fn is_known(verb: &str) -> bool {
    lookup_def(verb).is_some()
}

/// Iterate over the commands of one family.
pub fn commands_in(group: Group) -> impl Iterator<Item = &'static CommandDef> {
    COMMANDS.iter().filter(move |def| def.group == group)
}
