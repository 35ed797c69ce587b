//! Object handler: show one record in full.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, print_separator};

/// Execute the object command.
pub async fn execute(ctx: &CliContext, object_id: u64) -> Result<()> {
    let Some(artwork) = ctx.collection.fetch_object(object_id).await? else {
        println!("Object {object_id} is not available.");
        return Ok(());
    };

    println!("{}", artwork.display_title());
    print_separator(artwork.display_title().len().max(20));
    println!("Artist:  {}", artwork.display_artist());
    println!("Date:    {}", format_optional(&artwork.object_date, "-"));
    println!("Medium:  {}", format_optional(&artwork.medium, "-"));
    if let Some(image) = artwork.best_image() {
        println!("Image:   {image}");
    }
    if let Some(ref url) = artwork.object_url {
        println!("View:    {url}");
    }

    Ok(())
}
