//! Page layout calculation
//!
//! Maps a page size, a margin preset, and a placement mode to the rectangle
//! an image is drawn into. Pure arithmetic: no I/O, no state, one output per
//! input.

use crate::types::{LayoutBox, MarginPreset, PageSize, Placement};

/// Calculate the bounding box for an image on a page.
///
/// Looks up the page dimensions and margin width, then delegates to
/// [`compute_layout_pt`].
pub fn compute_layout(page: PageSize, margin: MarginPreset, placement: Placement) -> LayoutBox {
    let (page_width, page_height) = page.dimensions_pt();
    compute_layout_pt(page_width, page_height, margin.points(), placement)
}

/// Calculate the bounding box from raw point values.
///
/// The base box is the content area inside the margins; each placement mode
/// overrides parts of it:
/// - `Top` keeps the top edge at the margin and halves the height.
/// - `Center` recomputes `y` from the base height. With the full content
///   height that works out to the margin again; the arithmetic is kept as-is.
/// - `Bottom` places the base-height box flush against the bottom margin.
/// - `Stretch` is the base box.
/// - `Cover` is full-bleed: the margin does not apply.
///
/// `y` is measured from the top edge of the page.
pub fn compute_layout_pt(
    page_width: f32,
    page_height: f32,
    margin: f32,
    placement: Placement,
) -> LayoutBox {
    let content_width = page_width - 2.0 * margin;
    let content_height = page_height - 2.0 * margin;

    let mut layout = LayoutBox {
        x: margin,
        y: margin,
        width: content_width,
        height: content_height,
    };

    match placement {
        Placement::Top => {
            layout.y = margin;
            layout.height = content_height / 2.0;
        }
        Placement::Center => {
            layout.y = (page_height - layout.height) / 2.0;
        }
        Placement::Bottom => {
            layout.y = page_height - layout.height - margin;
        }
        Placement::Stretch => {
            layout.width = content_width;
            layout.height = content_height;
        }
        Placement::Cover => {
            layout = LayoutBox {
                x: 0.0,
                y: 0.0,
                width: page_width,
                height: page_height,
            };
        }
    }

    layout
}
