//! Main commands enum and subcommand arguments.

use clap::Subcommand;

/// Available commands for the collection search tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Search artworks by keyword and render a card gallery
    Search {
        /// Search keyword (e.g., "flower", "portrait", "bronze")
        query: String,

        /// Maximum results to display (1-60)
        #[arg(short, long, default_value_t = 18)]
        max: usize,

        /// Department filter: a numeric id or a name from `galleria departments`
        #[arg(short, long)]
        department: Option<String>,

        /// Include artworks without images
        #[arg(long)]
        any_image: bool,

        /// Number of gallery columns
        #[arg(long, default_value_t = 3)]
        columns: usize,
    },

    /// List collection departments with their ids
    Departments,

    /// Show the full record for a single object id
    Object {
        /// The remote object id
        object_id: u64,
    },
}
