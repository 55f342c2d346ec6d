//! CLI Check Command
//!
//! Doctor-style configuration validation: reports each environment variable
//! the notifier reads, without making any network call.

use std::env;

use julesbridge_core::config::{ENV_PR_DESCRIPTION, REQUIRED_VARS};

/// Report configuration state; returns whether a run could proceed.
pub fn run() -> bool {
    println!("\n🔍 Checking JulesBridge configuration...\n");

    let mut all_good = true;

    for var in REQUIRED_VARS {
        match env::var(var) {
            Ok(val) if !val.is_empty() => println!("  🟢 {} is set", var),
            _ => {
                println!("  🔴 {} is missing (REQUIRED)", var);
                all_good = false;
            }
        }
    }
    match env::var(ENV_PR_DESCRIPTION) {
        Ok(val) if !val.is_empty() => println!("  🟢 {} is set", ENV_PR_DESCRIPTION),
        _ => println!(
            "  🟡 {} is missing (optional, will be fetched from GitHub)",
            ENV_PR_DESCRIPTION
        ),
    }

    println!();
    if all_good {
        println!("✅ Configuration looks complete.");
    } else {
        println!("❌ Missing required variables; a run would exit with an error.");
    }

    all_good
}
