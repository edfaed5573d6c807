//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifeboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use lifeboard_core::db::migrations::latest_version;
use lifeboard_core::db::open_db_in_memory;

fn main() {
    println!("lifeboard_core ping={}", lifeboard_core::ping());
    println!("lifeboard_core version={}", lifeboard_core::core_version());

    // Opening an in-memory db exercises the full migration path without
    // touching any on-disk state.
    match open_db_in_memory() {
        Ok(_) => println!("lifeboard_core schema_version={}", latest_version()),
        Err(err) => eprintln!("lifeboard_core db_error={err}"),
    }
}
