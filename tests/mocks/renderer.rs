//! Renderer that records what it was asked to draw.

use std::cell::RefCell;

use pythagoras::render::{Figure, Renderer};
use pythagoras::{Report, Solution};

/// Records every figure and returns a fixed string.
#[derive(Default)]
pub struct RecordingRenderer {
    pub figures: RefCell<Vec<Figure>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.figures.borrow().len()
    }

    pub fn last(&self) -> Option<Figure> {
        self.figures.borrow().last().copied()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, figure: &Figure) -> String {
        self.figures.borrow_mut().push(*figure);
        "<figure>".to_string()
    }
}

/// What a front end does with a report: draw on success, show the message
/// otherwise. Returns the text it would display.
pub fn present(report: &Report, renderer: &dyn Renderer) -> String {
    match &report.outcome {
        Ok(solution) => {
            let drawing = renderer.render(&Figure::from(solution));
            format!("{}\n{}", solution.message(), drawing)
        }
        Err(err) => err.to_string(),
    }
}

/// Shorthand for the computed side's value in a calculated solution.
pub fn computed_value(solution: &Solution) -> Option<f64> {
    match solution {
        Solution::Calculated(calc) => Some(calc.computed_value()),
        Solution::Verified(_) => None,
    }
}
