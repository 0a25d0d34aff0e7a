//! Property-based tests for command rewriting.
//!
//! Uses proptest to generate random commands and verify that:
//! 1. An empty namespace never changes anything
//! 2. Rewriting never panics and never changes the command length
//! 3. Verbs are never rewritten
//! 4. Stripping undoes rewriting for key-list replies

use kvns_core::registry::{self, COMMANDS};
use kvns_core::{Command, KeyStrategy, Namespace, Reply, Rewrite, Token};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES - Generators for command components
// =============================================================================

/// Any registered verb, in random casing.
fn verb_strategy() -> impl Strategy<Value = String> {
    (0..COMMANDS.len(), any::<bool>()).prop_map(|(i, lower)| {
        let name = COMMANDS[i].name;
        if lower {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    })
}

/// Argument tokens, including markers and counts so the interesting
/// branches of the strategies get exercised.
fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        prop::string::string_regex("[a-z0-9:*_#]{0,12}")
            .expect("valid regex")
            .prop_map(Token::Str),
        prop::sample::select(vec![
            "STORE", "STOREDIST", "BY", "GET", "#", "MATCH", "STREAMS", "KEYS", "USAGE",
            "CHANNELS", "NUMSUB", "", "-1", "0", "1", "2", "99",
        ])
        .prop_map(Token::from),
        (-3i64..10).prop_map(Token::Int),
        (-10.0f64..10.0).prop_map(Token::Float),
    ]
}

fn command_strategy() -> impl Strategy<Value = Command> {
    (verb_strategy(), prop::collection::vec(token_strategy(), 0..12))
        .prop_map(|(verb, args)| Command::new(verb, args))
}

/// Namespace prefixes that never appear in generated tokens.
fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{1,6}").expect("valid regex")
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn empty_namespace_is_identity(cmd in command_strategy()) {
        let out = Namespace::new("").rewrite(cmd.clone()).unwrap();
        prop_assert_eq!(out, cmd);
    }

    #[test]
    fn rewrite_preserves_length_and_verb(cmd in command_strategy(), prefix in prefix_strategy()) {
        let out = Namespace::new(prefix).rewrite(cmd.clone()).unwrap();
        prop_assert_eq!(out.len(), cmd.len());
        prop_assert_eq!(out.verb(), cmd.verb());
    }

    #[test]
    fn rewrite_only_prefixes(cmd in command_strategy(), prefix in prefix_strategy()) {
        let ns = Namespace::new(prefix);
        let out = ns.rewrite(cmd.clone()).unwrap();
        for (before, after) in cmd.tokens().iter().zip(out.tokens()) {
            if before != after {
                prop_assert_eq!(after.as_text(), ns.key(&before.as_text()));
            }
        }
    }

    #[test]
    fn all_strategy_prefixes_every_argument(
        verb in prop::sample::select(
            COMMANDS
                .iter()
                .filter(|def| def.strategy == KeyStrategy::All)
                .map(|def| def.name)
                .collect::<Vec<_>>()
        ),
        args in prop::collection::vec(token_strategy(), 0..8),
        prefix in prefix_strategy(),
    ) {
        let ns = Namespace::new(prefix);
        let cmd = Command::new(verb, args.clone());
        let out = ns.rewrite(cmd).unwrap();
        prop_assert_eq!(out[0].as_text(), verb);
        for (arg, token) in args.iter().zip(out.tokens().iter().skip(1)) {
            prop_assert_eq!(token.as_text(), ns.key(&arg.as_text()));
        }
    }

    #[test]
    fn keys_reply_round_trips(
        keys in prop::collection::vec(
            prop::string::string_regex("[a-z0-9:]{1,10}").expect("valid regex"),
            0..8,
        ),
        prefix in prefix_strategy(),
    ) {
        let ns = Namespace::new(prefix);
        let sent = ns.rewrite(Command::from(["KEYS", "*"])).unwrap();
        let stored = Reply::bulk_array(keys.iter().map(|k| ns.key(k)));
        prop_assert_eq!(ns.strip(&sent, stored), Reply::bulk_array(keys));
    }

    #[test]
    fn unknown_verbs_always_fail(verb in "[a-z]{3,8}_X", arg in "[a-z]{1,4}") {
        prop_assume!(!registry::is_known(&verb));
        let result = Namespace::new("t").rewrite(Command::from([verb, arg]));
        prop_assert!(result.is_err());
    }
}
