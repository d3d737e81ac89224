//! Basic usage example
//!
//! Demonstrates the root logger, leveled methods, formatted macros and
//! lazy context values.
//!
//! Run with: cargo run --example basic_usage

use rust_kvlog::prelude::*;
use rust_kvlog::{info, root, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== rust_kvlog - Basic Usage Example ===\n");

    // The root writes to stdout; terminal format on a tty, logfmt otherwise
    println!("1. Root logger:");
    root::info("application started", kv!["version", env!("CARGO_PKG_VERSION")]);
    root::warn("config file missing, using defaults", kv!["path", "/etc/app.toml"]);

    println!("\n2. Level gate:");
    root::set_level(Level::Info);
    root::debug("not shown", kv![]);
    root::info("shown", kv!["level", Level::Info.to_str()]);

    println!("\n3. Formatted messages:");
    let logger = root::new(kv!["component", "server"]);
    let port = 8080;
    info!(logger, "listening on port {}", port);
    warn!(logger, "{} connections pending", 3);

    println!("\n4. Lazy values:");
    let snapshot = Lazy::new(|| (1..=20u64).sum::<u64>());
    logger.info("stats", kv!["total", snapshot]);

    println!("\n5. JSON on stderr from configuration:");
    let config = LoggerConfig::from_json(r#"{"format": "json", "target": "stderr"}"#)?;
    let json_logger = config.build();
    json_logger.info("structured", kv![ctx! { "user" => "ana", "attempts" => 2 }]);

    println!("\n6. Replacing the root handler:");
    root::set_handler(Arc::new(DiscardHandler));
    root::info("silenced", kv![]);
    logger.info("children keep the handler they were created with", kv![]);

    println!("\n=== Example completed ===");
    Ok(())
}
