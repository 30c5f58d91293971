//! ASCII renderer.
//!
//! Draws the triangle with the right angle at the bottom-left corner:
//!
//! ```text
//!       |\
//!       | \
//! a = 3 |  \  c = 5
//!       |   \
//!       +----\
//!        b = 4
//! ```
//!
//! Terminal cells are about twice as tall as they are wide, so horizontal
//! lengths are stretched by two to keep proportions.

use super::{format_length, Figure, Renderer};
use crate::engine::{Side, SideLength};

const DEFAULT_MAX_WIDTH: usize = 36;
const DEFAULT_MAX_HEIGHT: usize = 12;
const MIN_EXTENT: usize = 2;

const NOT_RIGHT_NOTE: &str =
    "note: not a right triangle; the two shorter sides are drawn as legs";

/// Proportional ASCII drawing bounded by a character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiRenderer {
    /// Columns available for the base
    pub max_width: usize,
    /// Rows available for the vertical leg
    pub max_height: usize,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        AsciiRenderer {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl AsciiRenderer {
    pub fn new(max_width: usize, max_height: usize) -> Self {
        AsciiRenderer {
            max_width: max_width.max(MIN_EXTENT),
            max_height: max_height.max(MIN_EXTENT),
        }
    }

    /// Grid size `(columns, rows)` that keeps the legs' proportions.
    pub fn canvas_size(&self, figure: &Figure) -> (usize, usize) {
        let max_width = self.max_width.max(MIN_EXTENT);
        let max_height = self.max_height.max(MIN_EXTENT);
        let aspect = figure.vertical.length / figure.horizontal.length;

        let full_width_height = max_width as f64 * aspect / 2.0;
        let (width, height) = if full_width_height <= max_height as f64 {
            (max_width as f64, full_width_height)
        } else {
            (max_height as f64 * 2.0 / aspect, max_height as f64)
        };

        (
            (width.round() as usize).clamp(MIN_EXTENT, max_width),
            (height.round() as usize).clamp(MIN_EXTENT, max_height),
        )
    }
}

fn label(side: &SideLength, computed: Option<Side>) -> String {
    let mut text = format!("{} = {}", side.side, format_length(side.length));
    if computed == Some(side.side) {
        text.push_str(" (computed)");
    }
    text
}

impl Renderer for AsciiRenderer {
    fn render(&self, figure: &Figure) -> String {
        let (width, height) = self.canvas_size(figure);
        let vertical_label = label(&figure.vertical, figure.computed);
        let horizontal_label = label(&figure.horizontal, figure.computed);
        let hypotenuse_label = label(&figure.hypotenuse, figure.computed);

        let margin = vertical_label.chars().count() + 1;
        let label_row = (height - 1) / 2;
        let mut lines = Vec::with_capacity(height + 3);

        for row in 0..height {
            let mut line = if row == label_row {
                format!("{} ", vertical_label)
            } else {
                " ".repeat(margin)
            };

            // Column of the hypotenuse on this row, never on the vertical leg.
            let x = ((width * row) as f64 / (height - 1) as f64).round() as usize;
            let x = x.max(1);

            if row + 1 == height {
                line.push('+');
                line.push_str(&"-".repeat(x - 1));
                line.push('\\');
            } else {
                line.push('|');
                line.push_str(&" ".repeat(x - 1));
                line.push('\\');
                if row == label_row {
                    line.push_str("  ");
                    line.push_str(&hypotenuse_label);
                }
            }

            lines.push(line.trim_end().to_string());
        }

        let center = margin + width / 2;
        let start = center
            .saturating_sub(horizontal_label.chars().count() / 2)
            .max(margin);
        lines.push(format!("{}{}", " ".repeat(start), horizontal_label));

        if !figure.right_angle {
            lines.push(String::new());
            lines.push(NOT_RIGHT_NOTE.to_string());
        }

        lines.join("\n")
    }
}
