//! Registry module: Discovery of the current fillable cells.
//!
//! A [`CellRegistry`] answers one question: which cells are fillable right
//! now, in document order. Hosts implement it over whatever holds the
//! markup: the browser DOM (see `web`), or the in-memory [`Document`] used
//! by the terminal host and by tests.

mod document;

pub use document::{class_selector, Document, DocumentRegistry, Element, ElementFlags, ElementHandle, ElementSnapshot};

use crate::cell::{Cell, CellSet};

/// Source of the ordered set of fillable cells.
///
/// `discover` must query the live markup every time it is called. Handles
/// from an earlier call are not reused, because the host may have replaced
/// the elements behind them since.
pub trait CellRegistry {
    /// The cell handle type this registry hands out.
    type Cell: Cell;

    /// Query all fillable cells, in document order.
    fn discover(&self) -> CellSet<Self::Cell>;
}

impl<R: CellRegistry + ?Sized> CellRegistry for &R {
    type Cell = R::Cell;

    fn discover(&self) -> CellSet<Self::Cell> {
        (**self).discover()
    }
}
