// ============================================================================
// Basic Usage Example
// ============================================================================

use number_validator::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Number Validator Example ===\n");

    // Rejected configurations never produce a validator
    for (precision, scale) in [(0, 0), (1, -1), (2, 2)] {
        match NumberValidator::new(precision, scale, false) {
            Ok(_) => println!("precision={} scale={} accepted", precision, scale),
            Err(e) => println!("precision={} scale={} -> {}", precision, scale, e),
        }
    }

    // Create validator with logging of every decision
    let validator = NumberValidator::new(4, 2, false)
        .expect("valid configuration")
        .with_event_handler(Arc::new(LoggingEventHandler));

    println!("\nValidator: {:?}\n", validator);

    let candidates = [
        Some("+1.23"),
        Some("-1.23"),
        Some("-12.23"),
        Some("1.234"),
        Some(" 1"),
        Some(".5"),
        Some(""),
        None,
    ];

    for candidate in candidates {
        let label = format!("{:?}", candidate);
        match validator.explain(candidate) {
            Ok(number) => match number.to_decimal() {
                Ok(decimal) => println!("{:<14} valid    -> {}", label, decimal),
                Err(e) => println!("{:<14} valid    ({})", label, e),
            },
            Err(reason) => println!("{:<14} invalid  ({})", label, reason),
        }
    }
}
