//! Departments handler: list the selectable department catalog.

use anyhow::Result;
use galleria_core::load_catalog;

use crate::bootstrap::CliContext;
use crate::presentation::print_separator;

/// Execute the departments command.
///
/// Prints the catalog in remote order, sentinel first. When the remote
/// list is unavailable this still succeeds with the sentinel-only
/// fallback, matching the degraded search experience.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let catalog = load_catalog(ctx.collection.as_ref()).await;

    println!("Departments");
    print_separator(40);
    for option in catalog.options() {
        println!("  {option}");
    }

    if catalog.is_fallback() {
        println!();
        println!("Department list is currently unavailable; searches run unfiltered.");
    }

    Ok(())
}
