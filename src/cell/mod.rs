//! Cell module: The display side of the letter row.
//!
//! This module contains:
//! - [`Cell`]: The capability bundle every fillable target exposes (display + focus)
//! - [`CellSet`]: An ordered, index-addressable set of cells
//! - [`LetterBuffer`]: The bounded, in-memory sequence of entered letters

#[allow(clippy::module_inception)]
mod cell;
mod letters;

pub use cell::{Cell, CellSet};
pub use letters::LetterBuffer;
