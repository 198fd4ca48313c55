//! Scene nodes and the keyed reconciliation between consecutive draws.
//!
//! A draw lays every series out into a [SeriesShape] and joins the result
//! against the previous frame by series index. New series enter with a
//! fade-in, series that disappeared exit with a fade-out, and surviving
//! series carry their previous geometry so attribute changes can
//! transition instead of snapping.

use crate::color::ColorScale;
use crate::color::Rgb;

/// How a series group participates in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The series is new and its group fades in.
    Enter,
    /// The series existed last frame; changed geometry transitions.
    Update,
    /// The series is gone; its group fades out and is dropped from the
    /// retained state afterwards.
    Exit,
}

/// The geometry of one series as laid out by a draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesShape {
    /// The series label.
    pub label: String,
    /// The line path data.
    pub path: String,
    /// The number of samples behind `path`.
    pub points: usize,
    /// The label anchor x, in pixels.
    pub label_x: f64,
    /// The label anchor y, in pixels.
    pub label_y: f64,
    /// The label font size, in pixels.
    pub font_size: f64,
}

/// A series group in the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesNode {
    /// The reconciliation phase of the group.
    pub phase: Phase,
    /// The geometry to render.
    pub shape: SeriesShape,
    /// The previous geometry, present for [Phase::Update] nodes.
    pub previous: Option<SeriesShape>,
    /// The series color.
    pub color: Rgb,
    /// Whether the label is visible.
    pub show_label: bool,
}

/// A hover region: the circle marker plus the polygonal hit area and its
/// precomputed tooltip payload.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverNode {
    /// The marker center x, in pixels.
    pub cx: f64,
    /// The marker center y, in pixels.
    pub cy: f64,
    /// The hit area outline path data.
    pub area: String,
    /// The owning series color.
    pub color: Rgb,
    /// The owning series label.
    pub label: String,
    /// The point's x value formatted as a date.
    pub date: String,
    /// The point's y value formatted with two decimals.
    pub amount: String,
}

/// Joins the shapes of the current draw against the previous frame by
/// series index.
pub(crate) fn reconcile(
    previous: Vec<SeriesShape>,
    next: &[SeriesShape],
    colors: &ColorScale,
    show_labels: bool,
) -> Vec<SeriesNode> {
    let mut nodes = Vec::with_capacity(next.len().max(previous.len()));
    let mut previous = previous.into_iter();

    for (index, shape) in next.iter().enumerate() {
        let prev = previous.next();
        let phase = if prev.is_some() {
            Phase::Update
        } else {
            Phase::Enter
        };

        nodes.push(SeriesNode {
            phase,
            shape: shape.clone(),
            previous: prev,
            color: colors.get(index),
            show_label: show_labels,
        });
    }

    for (offset, shape) in previous.enumerate() {
        nodes.push(SeriesNode {
            phase: Phase::Exit,
            shape,
            previous: None,
            color: colors.get(next.len() + offset),
            show_label: show_labels,
        });
    }

    nodes
}
