//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notevault_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notevault_core::db::migrations::latest_version;
use notevault_core::db::open_db_in_memory;

fn main() {
    println!("notevault_core version={}", notevault_core::core_version());
    println!("notevault_core schema_version={}", latest_version());

    match open_db_in_memory() {
        Ok(_) => println!("notevault_core db=ok"),
        Err(err) => println!("notevault_core db=error ({err})"),
    }
}
