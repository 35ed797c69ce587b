//! Fixed-width column grid for gallery cards.
//!
//! Cards keep the column slots the gallery service assigned them:
//! each column is an independent stack, so a skipped object leaves its
//! column one card shorter instead of shifting every later card.

use galleria_core::{Gallery, GalleryCard};

use super::truncate_string;

/// Width of one card column, in characters.
pub const COLUMN_WIDTH: usize = 38;

const GUTTER: &str = "  ";

/// Render one card as its display lines, every line truncated to the
/// column width. Optional rows are omitted entirely when absent.
fn card_lines(card: &GalleryCard) -> Vec<String> {
    let artwork = &card.artwork;
    let mut lines = vec![truncate_string(artwork.display_title(), COLUMN_WIDTH)];

    let byline = match artwork.display_date() {
        "" => artwork.display_artist().to_string(),
        date => format!("{} · {date}", artwork.display_artist()),
    };
    lines.push(truncate_string(&byline, COLUMN_WIDTH));

    if let Some(ref medium) = artwork.medium {
        lines.push(truncate_string(&format!("Medium: {medium}"), COLUMN_WIDTH));
    }
    if let Some(image) = artwork.best_image() {
        lines.push(truncate_string(image, COLUMN_WIDTH));
    }
    if let Some(ref url) = artwork.object_url {
        lines.push(truncate_string(url, COLUMN_WIDTH));
    }

    lines
}

/// Render the gallery as a text grid of `columns` card columns.
#[must_use]
pub fn render_gallery(gallery: &Gallery, columns: usize) -> String {
    let columns = columns.max(1);
    let mut lanes: Vec<Vec<&GalleryCard>> = vec![Vec::new(); columns];
    for card in &gallery.cards {
        // Slots always fit by construction; `%` guards foreign input.
        lanes[card.column % columns].push(card);
    }

    let rows = lanes.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = String::new();

    for row in 0..rows {
        let blocks: Vec<Vec<String>> = lanes
            .iter()
            .map(|lane| lane.get(row).map(|card| card_lines(card)).unwrap_or_default())
            .collect();
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

        for line_index in 0..height {
            let mut line = String::new();
            for (lane_index, block) in blocks.iter().enumerate() {
                let cell = block.get(line_index).map_or("", String::as_str);
                line.push_str(&format!("{cell:<width$}", width = COLUMN_WIDTH));
                if lane_index + 1 < blocks.len() {
                    line.push_str(GUTTER);
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
