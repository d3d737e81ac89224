//! Context tree example
//!
//! Builds a small tree of loggers that share context and route to
//! different handlers.
//!
//! Run with: cargo run --example context_tree

use rust_kvlog::handlers::{FuncHandler, StreamHandler};
use rust_kvlog::prelude::*;
use std::io;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== rust_kvlog - Context Tree Example ===\n");

    let app = Logger::builder()
        .context(kv!["app", "shop"])
        .handler(StreamHandler::new(io::stdout(), OutputFormat::Logfmt))
        .build();

    println!("1. Derived loggers inherit context:");
    let http = app.derive(kv!["component", "http"]);
    let request = http.derive(kv!["request_id", 4711, "path", "/cart"]);
    request.info("request received", kv![]);
    request.info("request served", kv!["status", 200, "elapsed_ms", 12.7]);

    println!("\n2. Per-logger levels:");
    let db = app.derive_with_level(Level::Warn, kv!["component", "db"]);
    db.info("not shown, db logs warnings and up", kv![]);
    db.warn("slow query", kv!["table", "orders", "ms", 830]);

    println!("\n3. Routing a subtree elsewhere:");
    let audit = app.derive(kv!["component", "audit"]);
    audit.set_handler(Arc::new(FuncHandler::new(|record: &Record| {
        println!("   AUDIT {} {:?}", record.message, record.context);
        Ok(())
    })));
    audit.info("price changed", kv!["sku", "A-1", "from", 10, "to", 12]);

    println!("\n4. Shared across threads:");
    let workers = Arc::new(app.derive(kv!["component", "worker"]));
    let handles: Vec<_> = (0..3)
        .map(|id| {
            let workers = Arc::clone(&workers);
            thread::spawn(move || workers.derive(kv!["worker", id]).info("job done", kv![]))
        })
        .collect();
    for handle in handles {
        handle
            .join()
            .map_err(|_| LoggerError::other("worker thread panicked"))?;
    }

    println!("\n5. Odd context is repaired, not rejected:");
    app.warn("oops", kv!["dangling"]);

    println!("\n=== Example completed ===");
    Ok(())
}
