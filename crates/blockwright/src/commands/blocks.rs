//! Blocks command for inspecting registered block types

use starbase::AppResult;

use blockwright_host::HostConfig;

use crate::commands::bootstrap_registry;

/// Run the blocks command: list every registered block type.
pub fn run_blocks() -> AppResult {
    let registry = match bootstrap_registry(HostConfig::default()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: Failed to set up block registry: {}", e);
            return Ok(Some(1));
        }
    };

    let blocks = registry.list();

    if blocks.is_empty() {
        println!("No block types registered.");
    } else {
        println!("{:<30} {:<12} Title", "Block", "Category");
        println!("{}", "-".repeat(64));
        for (id, info) in &blocks {
            println!("{:<30} {:<12} {}", id, info.category, info.title);
        }
        println!("\nTotal: {} block type(s) registered", blocks.len());
    }

    Ok(None)
}
