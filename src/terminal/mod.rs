//! Terminal module: Painting the in-memory document.
//!
//! - [`Scene`]: Everything the render actor needs for one frame
//! - [`RowView`]: Turns a scene into a single buffered ANSI write
//! - [`Palette`]: Colors per [`Theme`](crate::theme::Theme)

mod row_view;

pub use row_view::{Palette, RowView, Scene, CELL_GAP, CELL_WIDTH};
