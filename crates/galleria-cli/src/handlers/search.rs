//! Search handler: the keyword -> gallery interaction.

use anyhow::{Result, anyhow};
use galleria_core::{DepartmentCatalog, GalleryError, GalleryRequest, load_catalog};

use crate::bootstrap::CliContext;
use crate::presentation::grid::render_gallery;

/// Arguments for the search command.
pub struct SearchArgs {
    /// Search keyword
    pub query: String,
    /// Maximum results to display
    pub max: usize,
    /// Department filter: numeric id or a (partial) department name
    pub department: Option<String>,
    /// Include artworks without images
    pub any_image: bool,
    /// Number of gallery columns
    pub columns: usize,
}

/// Execute the search command.
pub async fn execute(ctx: &CliContext, args: SearchArgs) -> Result<()> {
    let department_id = match args.department {
        Some(ref input) => {
            let catalog = load_catalog(ctx.collection.as_ref()).await;
            resolve_department(&catalog, input)?
        }
        None => None,
    };

    let request = GalleryRequest {
        query: args.query.clone(),
        has_images: !args.any_image,
        department_id,
        max_display: args.max,
        columns: args.columns,
    };

    let gallery = match ctx.gallery.run(&request).await {
        Ok(gallery) => gallery,
        Err(GalleryError::EmptyQuery) => {
            println!("Please enter a keyword before searching.");
            return Ok(());
        }
        Err(GalleryError::Collection(err)) => {
            return Err(anyhow!("Search failed: {err}"));
        }
    };

    println!("Results for \"{}\"", request.query.trim());
    println!(
        "Total found: {} items - displaying top {} results",
        gallery.total, gallery.attempted
    );

    if gallery.attempted == 0 {
        println!("No results found. Try another keyword or remove filters.");
        return Ok(());
    }

    println!();
    print!("{}", render_gallery(&gallery, request.columns.max(1)));
    Ok(())
}

/// Resolve a department argument to a filter id.
///
/// Accepts a numeric id as-is; otherwise matches the input against the
/// catalog labels case-insensitively (a name prefix is enough). The
/// sentinel resolves to "no filter".
fn resolve_department(catalog: &DepartmentCatalog, input: &str) -> Result<Option<u32>> {
    let input = input.trim();
    if let Ok(id) = input.parse::<u32>() {
        return Ok(Some(id));
    }

    let needle = input.to_lowercase();
    for option in catalog.options() {
        if option.to_lowercase().starts_with(&needle) {
            // Generated labels are unique, so resolve cannot miss here.
            return Ok(catalog
                .resolve(option)
                .ok_or_else(|| anyhow!("department catalog is inconsistent"))?);
        }
    }

    Err(anyhow!(
        "Unknown department '{input}'. Run `galleria departments` to list the available ones."
    ))
}
