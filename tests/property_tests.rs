//! Property-based tests for rust_kvlog using proptest

use proptest::prelude::*;
use rust_kvlog::handlers::MemoryHandler;
use rust_kvlog::prelude::*;
use rust_kvlog::{new_context, normalize, ERROR_KEY, ODD_ARGS_MESSAGE};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Crit),
        Just(Level::Error),
        Just(Level::Warn),
        Just(Level::Info),
        Just(Level::Debug),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level string conversions roundtrip
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Ordering follows the numeric severity
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.ordinal() <= b.ordinal());
        prop_assert_eq!(a < b, a.ordinal() < b.ordinal());
    }

    /// Level serde uses the canonical short name
    #[test]
    fn test_level_serde_roundtrip(level in any_level()) {
        let json = serde_json::to_string(&level).unwrap();
        prop_assert_eq!(&json, &format!("\"{}\"", level.to_str()));
        let back: Level = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, level);
    }

    /// Anything that is not a known name is rejected
    #[test]
    fn test_unknown_level_names_rejected(name in "[A-Za-z]{1,8}") {
        let known = ["crit", "eror", "error", "warn", "info", "dbug", "debug"];
        prop_assume!(!known.contains(&name.as_str()));
        prop_assert!(name.parse::<Level>().is_err());
    }
}

// ============================================================================
// Context Normalization Tests
// ============================================================================

proptest! {
    /// Even sequences pass through unchanged
    #[test]
    fn test_even_context_untouched(pairs in prop::collection::vec((any_value(), any_value()), 0..10)) {
        let ctx: Vec<Value> = pairs.into_iter().flat_map(|(k, v)| [k, v]).collect();
        prop_assert_eq!(normalize(ctx.clone()), ctx);
    }

    /// Odd sequences of length 2n+1 become 2n+4 with the marker appended
    #[test]
    fn test_odd_context_repaired(ctx in prop::collection::vec(any_value(), 0..20)) {
        prop_assume!(ctx.len() % 2 == 1);
        let original_len = ctx.len();
        let normalized = normalize(ctx.clone());

        prop_assert_eq!(normalized.len(), original_len + 3);
        prop_assert_eq!(&normalized[..original_len], &ctx[..]);
        prop_assert_eq!(&normalized[original_len], &Value::Nil);
        prop_assert_eq!(&normalized[original_len + 1], &Value::from(ERROR_KEY));
        prop_assert_eq!(&normalized[original_len + 2], &Value::from(ODD_ARGS_MESSAGE));
    }

    /// A single map expands to one pair per entry
    #[test]
    fn test_ctx_expansion(entries in prop::collection::hash_map("[a-z]{1,6}", any::<i64>(), 0..8)) {
        let map: Ctx = entries.clone().into_iter().collect();
        let normalized = normalize(vec![Value::from(map)]);

        prop_assert_eq!(normalized.len(), entries.len() * 2);
        for pair in normalized.chunks_exact(2) {
            let key = pair[0].as_str().unwrap();
            prop_assert_eq!(&pair[1], &Value::from(entries[key]));
        }
    }

    /// A prefix is always kept verbatim at the front
    #[test]
    fn test_new_context_keeps_prefix(
        prefix in prop::collection::vec((any_value(), any_value()), 0..5),
        suffix in prop::collection::vec(any_value(), 0..7)
    ) {
        let prefix: Vec<Value> = prefix.into_iter().flat_map(|(k, v)| [k, v]).collect();
        let combined = new_context(&prefix, suffix.clone());
        prop_assert_eq!(&combined[..prefix.len()], &prefix[..]);
        prop_assert_eq!(combined.len(), prefix.len() + normalize(suffix).len());
        prop_assert_eq!(combined.len() % 2, 0);
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// A record is delivered exactly when its level passes the gate
    #[test]
    fn test_level_gate(floor in any_level(), level in any_level()) {
        let memory = Arc::new(MemoryHandler::new());
        let logger = Logger::builder().level(floor).shared_handler(memory.clone()).build();

        logger.log(level, "probe", kv![]).unwrap();
        prop_assert_eq!(memory.len() == 1, level <= floor);
    }

    /// Derived contexts are the parent's followed by the child's
    #[test]
    fn test_derived_context_concatenates(
        depth in 1usize..6,
        value in any::<i64>()
    ) {
        let memory = Arc::new(MemoryHandler::new());
        let mut logger = Logger::builder().shared_handler(memory.clone()).build();
        for d in 0..depth {
            logger = logger.derive(kv![format!("k{}", d), d]);
        }
        logger.info("leaf", kv!["v", value]);

        let record = memory.last().unwrap();
        prop_assert_eq!(record.context.len(), depth * 2 + 2);
        prop_assert_eq!(record.get("v"), Some(&Value::from(value)));
        prop_assert_eq!(record.get("k0"), Some(&Value::from(0usize)));
    }

    /// Messages reach the record unchanged
    #[test]
    fn test_message_preserved(message in ".*") {
        let memory = Arc::new(MemoryHandler::new());
        let logger = Logger::builder().shared_handler(memory.clone()).build();
        logger.info(&message, kv![]);
        prop_assert_eq!(&memory.last().unwrap().message, &message);
    }
}
