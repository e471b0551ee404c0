//! `RowView`: Draws the letter row as a line of boxed cells.
//!
//! ```text
//!            lettr
//!  ┌───┐ ┌───┐ ┌───┐ ┌───┐ ┌───┐
//!  │ h │ │ e │ │   │ │   │ │   │
//!  └───┘ └───┘ └───┘ └───┘ └───┘
//!        word not in word list
//! ```
//!
//! Elements carrying the marker class become boxes; every other element
//! with a non-empty value is a centered text line, above the row if it
//! precedes the first cell and below it otherwise.

use crate::registry::{ElementFlags, ElementSnapshot};
use crate::theme::Theme;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Columns taken by one cell box.
pub const CELL_WIDTH: u16 = 5;

/// Columns between two cell boxes.
pub const CELL_GAP: u16 = 1;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Document state, in document order.
    pub elements: Vec<ElementSnapshot>,
    /// Class that marks fillable cells.
    pub marker: String,
    /// Active theme.
    pub theme: Theme,
    /// Key help shown on the last line.
    pub hint: String,
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background.
    pub bg: Color,
    /// Letters and text.
    pub fg: Color,
    /// Box border of unfocused cells.
    pub border: Color,
    /// Box border of the focused cell.
    pub focus: Color,
    /// Hint line.
    pub muted: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb { r: 17, g: 24, b: 39 },
                fg: Color::Rgb { r: 243, g: 244, b: 246 },
                border: Color::Rgb { r: 75, g: 85, b: 99 },
                focus: Color::Rgb { r: 96, g: 165, b: 250 },
                muted: Color::Rgb { r: 107, g: 114, b: 128 },
            },
            Theme::Light => Self {
                bg: Color::Rgb { r: 255, g: 255, b: 255 },
                fg: Color::Rgb { r: 17, g: 24, b: 39 },
                border: Color::Rgb { r: 209, g: 213, b: 219 },
                focus: Color::Rgb { r: 37, g: 99, b: 235 },
                muted: Color::Rgb { r: 156, g: 163, b: 175 },
            },
        }
    }
}

/// Stateless painter for [`Scene`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView {
    width: u16,
    height: u16,
}

impl RowView {
    /// Create a view for a terminal of the given size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Change the terminal size.
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Top-left corner of each of `count` cell boxes.
    ///
    /// The row is centered; boxes that would start past the right edge are
    /// dropped.
    pub fn cell_origins(&self, count: usize) -> Vec<(u16, u16)> {
        let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
        let total = count_u16
            .saturating_mul(CELL_WIDTH + CELL_GAP)
            .saturating_sub(CELL_GAP);
        let left = self.width.saturating_sub(total) / 2;
        let top = (self.height / 2).saturating_sub(1);
        (0..count_u16)
            .map(|i| (left.saturating_add(i.saturating_mul(CELL_WIDTH + CELL_GAP)), top))
            .take_while(|(x, _)| x.saturating_add(CELL_WIDTH) <= self.width)
            .collect()
    }

    /// Render `scene` into `out` as a full-screen redraw.
    pub fn paint<W: Write>(&self, scene: &Scene, out: &mut W) -> io::Result<()> {
        let palette = Palette::for_theme(scene.theme);
        queue!(
            out,
            SetBackgroundColor(palette.bg),
            SetForegroundColor(palette.fg),
            Clear(ClearType::All)
        )?;

        let first_cell = scene.elements.iter().position(|e| e.has_class(&scene.marker));
        let cells: Vec<&ElementSnapshot> = scene
            .elements
            .iter()
            .filter(|e| e.has_class(&scene.marker))
            .collect();
        let origins = self.cell_origins(cells.len());
        let row_top = origins.first().map_or(self.height / 2, |&(_, y)| y);

        for (cell, &(x, y)) in cells.iter().zip(&origins) {
            let border = if cell.flags.contains(ElementFlags::FOCUSED) {
                palette.focus
            } else {
                palette.border
            };
            let letter = cell.value.graphemes(true).next().unwrap_or(" ");
            queue!(
                out,
                SetForegroundColor(border),
                MoveTo(x, y),
                Print("┌───┐"),
                MoveTo(x, y + 1),
                Print("│ "),
                SetForegroundColor(palette.fg),
                Print(letter),
                SetForegroundColor(border),
                Print(" │"),
                MoveTo(x, y + 2),
                Print("└───┘")
            )?;
        }

        let texts = scene
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.has_class(&scene.marker) && !e.value.is_empty());
        let (mut above, mut below) = (Vec::new(), Vec::new());
        for (i, element) in texts {
            if first_cell.is_some_and(|first| i < first) {
                above.push(element.value.as_str());
            } else {
                below.push(element.value.as_str());
            }
        }

        let mut y = row_top.saturating_sub(u16::try_from(above.len()).unwrap_or(u16::MAX) + 1);
        for text in above {
            self.centered(out, y, text, palette.fg)?;
            y = y.saturating_add(1);
        }
        let mut y = row_top.saturating_add(4);
        for text in below {
            self.centered(out, y, text, palette.fg)?;
            y = y.saturating_add(1);
        }

        if !scene.hint.is_empty() {
            self.centered(out, self.height.saturating_sub(1), &scene.hint, palette.muted)?;
        }

        queue!(out, ResetColor)?;
        out.flush()
    }

    fn centered<W: Write>(&self, out: &mut W, y: u16, text: &str, color: Color) -> io::Result<()> {
        if y >= self.height {
            return Ok(());
        }
        let text = truncate_to_width(text, usize::from(self.width));
        let width = u16::try_from(text.width()).unwrap_or(self.width);
        let x = self.width.saturating_sub(width) / 2;
        queue!(out, MoveTo(x, y), SetForegroundColor(color), Print(text))
    }
}

/// Longest prefix of `text` (whole graphemes) that fits in `max` columns.
pub(crate) fn truncate_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        used += grapheme.width();
        if used > max {
            return &text[..offset];
        }
    }
    text
}
