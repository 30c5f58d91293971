//! Renderer contract tests.
//!
//! A front end forwards successful results to a renderer and reports
//! failures without drawing.

use pythagoras::commands;
use pythagoras::render::{AsciiRenderer, Figure, Renderer};
use pythagoras::{Config, Side};

use crate::mocks::{present, RecordingRenderer};

#[test]
fn test_calculation_is_forwarded_to_renderer() {
    let renderer = RecordingRenderer::new();
    let report = commands::calc::run(Some("3"), Some("4"), None, &Config::default());

    let shown = present(&report, &renderer);
    assert_eq!(shown, "Hypotenuse calculated\n<figure>");
    assert_eq!(renderer.count(), 1);

    let figure = renderer.last().unwrap();
    assert_eq!(figure.computed, Some(Side::C));
    assert_eq!(figure.hypotenuse.length, 5.0);
    assert!(figure.right_angle);
}

#[test]
fn test_verification_is_forwarded_regardless_of_verdict() {
    let renderer = RecordingRenderer::new();
    let report = commands::verify::run("2", "3", "4", &Config::default());

    present(&report, &renderer);
    let figure = renderer.last().unwrap();
    assert!(!figure.right_angle);
    assert_eq!(figure.hypotenuse.side, Side::C);
}

#[test]
fn test_failure_is_not_drawn() {
    let renderer = RecordingRenderer::new();
    let report = commands::solve::run(&["a=3"], &Config::default());

    let shown = present(&report, &renderer);
    assert!(shown.contains("Enter exactly two values"));
    assert_eq!(renderer.count(), 0);
}

#[test]
fn test_ascii_renderer_labels_every_side() {
    let report = commands::verify::run("5", "12", "13", &Config::default());
    let solution = report.outcome.unwrap();
    let drawing = AsciiRenderer::default().render(&Figure::from(&solution));

    for label in ["a = 5", "b = 12", "c = 13"] {
        assert!(drawing.contains(label), "missing {} in\n{}", label, drawing);
    }
}
