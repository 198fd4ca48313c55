//! The chart renderer: lays data sets out into a frame of series groups
//! and hover regions.

use crate::color::ColorCache;
use crate::data::DataPoint;
use crate::data::DataSet;
use crate::data::FlatPoint;
use crate::data::flatten;
use crate::format;
use crate::partition::partition;
use crate::path;
use crate::scale::LinearScale;
use crate::scene::HoverNode;
use crate::scene::SeriesNode;
use crate::scene::SeriesShape;
use crate::scene::reconcile;

const LABEL_X: f64 = 10.0;
const STACKED_FONT_SIZE: f64 = 32.0;
const MAX_FONT_SIZE: f64 = 128.0;

/// The fixed-size drawing surface the chart renders onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// The surface width, in pixels.
    pub width: f64,
    /// The surface height, in pixels.
    pub height: f64,
}

impl Surface {
    /// Creates a surface of the given size.
    pub fn new(width: f64, height: f64) -> Surface {
        Self { width, height }
    }
}

/// Chart layout options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    /// Draw every series over the full surface height instead of giving
    /// each one an exclusive horizontal band.
    pub stack_charts: bool,
    /// Render the per-series labels.
    pub show_labels: bool,
    /// Scale each series against its own y range instead of the range
    /// over all series.
    pub normalize: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            stack_charts: false,
            show_labels: true,
            normalize: true,
        }
    }
}

/// A fully laid-out frame: the reconciled series groups and the hover
/// regions of the current draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The surface the frame was laid out for.
    pub surface: Surface,
    /// The series groups, reconciled against the previous frame.
    pub series: Vec<SeriesNode>,
    /// One hover region per rendered point, across all series.
    pub hover: Vec<HoverNode>,
}

/// Renders data sets into frames, retaining the color assignments and
/// the previous frame's geometry between draws.
pub struct Chart {
    surface: Surface,
    colors: ColorCache,
    previous: Vec<SeriesShape>,
}

impl Chart {
    /// Creates a chart over the given surface.
    pub fn new(surface: Surface) -> Chart {
        Self {
            surface,
            colors: ColorCache::new(),
            previous: Vec::new(),
        }
    }

    /// Creates a chart with a fixed color seed, for reproducible pages.
    pub fn with_color_seed(surface: Surface, seed: u64) -> Chart {
        Self {
            surface,
            colors: ColorCache::seeded(seed),
            previous: Vec::new(),
        }
    }

    /// Lays out `sets` and reconciles the result against the previous
    /// frame.
    ///
    /// Empty data sets, a zero-size surface, and non-finite values are
    /// not validated; they flow through as NaN geometry.
    pub fn draw(&mut self, sets: &[DataSet], options: &ChartOptions) -> Frame {
        let width = self.surface.width;
        let height_total = self.surface.height;
        let band = height_total / sets.len() as f64;

        // Exiting series still render once, so the scale must keep
        // covering the previous frame's indices.
        let colors = self.colors.scale(sets.len().max(self.previous.len()));

        let all = flatten(sets);
        let x_scale = LinearScale::fit(&all, |p: &FlatPoint| p.x, 0.0, width);

        let y_scales: Vec<LinearScale> = sets
            .iter()
            .enumerate()
            .map(|(index, set)| {
                let (range_min, range_max) = if options.stack_charts {
                    (height_total, 0.0)
                } else {
                    (band * (index + 1) as f64, band * index as f64)
                };

                if options.normalize {
                    LinearScale::fit(&set.data, |p: &DataPoint| p.y, range_min, range_max)
                } else {
                    LinearScale::fit(&all, |p: &FlatPoint| p.y, range_min, range_max)
                }
            })
            .collect();

        let shapes: Vec<SeriesShape> = sets
            .iter()
            .enumerate()
            .map(|(index, set)| {
                let scaled: Vec<(f64, f64)> = set
                    .data
                    .iter()
                    .map(|p| (x_scale.apply(p.x), y_scales[index].apply(p.y)))
                    .collect();

                let (font_size, label_y) = if options.stack_charts {
                    let first_y = set
                        .data
                        .first()
                        .map(|p| y_scales[index].apply(p.y))
                        .unwrap_or(f64::NAN);
                    (STACKED_FONT_SIZE, first_y)
                } else {
                    ((band * 0.8).min(MAX_FONT_SIZE), band * (index + 1) as f64)
                };

                SeriesShape {
                    label: set.label.clone(),
                    path: path::line(&scaled),
                    points: set.data.len(),
                    label_x: LABEL_X,
                    label_y,
                    font_size,
                }
            })
            .collect();

        let scaled_points: Vec<(f64, f64)> = all
            .iter()
            .map(|p| (x_scale.apply(p.x), y_scales[p.set_index].apply(p.y)))
            .collect();

        let hover = partition(&scaled_points, width, height_total)
            .iter()
            .map(|cell| {
                let point = &all[cell.index];
                let (cx, cy) = scaled_points[cell.index];

                HoverNode {
                    cx,
                    cy,
                    area: path::polygon(&cell.vertices),
                    color: colors.get(point.set_index),
                    label: sets[point.set_index].label.clone(),
                    date: format::date(point.x),
                    amount: format::amount(point.y),
                }
            })
            .collect();

        let series = reconcile(
            std::mem::take(&mut self.previous),
            &shapes,
            &colors,
            options.show_labels,
        );
        self.previous = shapes;

        Frame {
            surface: self.surface,
            series,
            hover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Phase;

    fn set(label: &str, points: &[(f64, f64)]) -> DataSet {
        DataSet::new(
            String::from(label),
            points.iter().map(|&(x, y)| DataPoint::new(x, y)).collect(),
        )
    }

    fn band_of(frame: &Frame, label: &str) -> usize {
        frame
            .series
            .iter()
            .position(|n| n.shape.label == label)
            .unwrap()
    }

    #[test]
    fn draws_one_path_and_one_label_per_series() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0)]),
            set("b", &[(0.0, 5.0), (1.0, 5.0)]),
            set("c", &[(0.0, 2.0), (1.0, 3.0)]),
        ];

        let frame = chart.draw(&sets, &ChartOptions::default());

        assert_eq!(frame.series.len(), 3);
        for (node, set) in frame.series.iter().zip(&sets) {
            assert_eq!(node.shape.label, set.label);
            assert!(!node.shape.path.is_empty());
        }
    }

    #[test]
    fn unstacked_normalized_example() {
        // Two series over a 200x100 surface: A spans its own band fully,
        // B is degenerate and sits at its band midpoint.
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![
            set("A", &[(0.0, 0.0), (1.0, 10.0)]),
            set("B", &[(0.0, 5.0), (1.0, 5.0)]),
        ];

        let frame = chart.draw(&sets, &ChartOptions::default());

        assert_eq!(frame.series[0].shape.path, "M0,50L200,0");
        assert_eq!(frame.series[1].shape.path, "M0,75L200,75");
        assert_eq!(frame.hover.len(), 4);
    }

    #[test]
    fn unstacked_series_stay_within_their_bands() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0), (2.0, 7.0)]),
            set("b", &[(0.0, 2.0), (1.0, 4.0), (2.0, 3.0)]),
        ];

        let frame = chart.draw(&sets, &ChartOptions::default());

        for node in &frame.hover {
            let index = band_of(&frame, &node.label);
            let top = 50.0 * index as f64;
            let bottom = 50.0 * (index + 1) as f64;
            assert!(
                node.cy >= top && node.cy <= bottom,
                "point at y {} escaped band [{top}, {bottom}]",
                node.cy
            );
        }
    }

    #[test]
    fn stacked_series_span_the_full_height() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0)]),
            set("b", &[(0.0, 2.0), (1.0, 4.0)]),
        ];
        let options = ChartOptions {
            stack_charts: true,
            ..ChartOptions::default()
        };

        let frame = chart.draw(&sets, &options);

        // Normalized extrema hit both surface edges for every series.
        assert_eq!(frame.series[0].shape.path, "M0,100L200,0");
        assert_eq!(frame.series[1].shape.path, "M0,100L200,0");
    }

    #[test]
    fn global_scale_positions_series_against_the_shared_domain() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0)]),
            set("b", &[(0.0, 2.0), (1.0, 4.0)]),
        ];
        let options = ChartOptions {
            normalize: false,
            ..ChartOptions::default()
        };

        let frame = chart.draw(&sets, &options);

        // Band b covers [50, 100]; its values 2 and 4 sit against the
        // global [0, 10] domain instead of filling the band.
        assert_eq!(frame.series[1].shape.path, "M0,90L200,80");
    }

    #[test]
    fn label_geometry_follows_the_band_when_unstacked() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0)]),
            set("b", &[(0.0, 2.0), (1.0, 4.0)]),
        ];

        let frame = chart.draw(&sets, &ChartOptions::default());

        for (index, node) in frame.series.iter().enumerate() {
            assert_eq!(node.shape.label_x, 10.0);
            assert_eq!(node.shape.label_y, 50.0 * (index + 1) as f64);
            assert_eq!(node.shape.font_size, 40.0);
        }
    }

    #[test]
    fn stacked_labels_sit_at_the_first_point() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![set("a", &[(0.0, 0.0), (1.0, 10.0)])];
        let options = ChartOptions {
            stack_charts: true,
            ..ChartOptions::default()
        };

        let frame = chart.draw(&sets, &options);

        assert_eq!(frame.series[0].shape.font_size, 32.0);
        assert_eq!(frame.series[0].shape.label_y, 100.0);
    }

    #[test]
    fn hover_regions_cover_every_point_of_every_series() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0), (2.0, 7.0)]),
            set("b", &[(0.0, 5.0), (1.0, 5.0)]),
        ];

        let frame = chart.draw(&sets, &ChartOptions::default());

        assert_eq!(frame.hover.len(), 5);
        assert_eq!(frame.hover[3].label, "b");
        assert_eq!(frame.hover[3].date, "01-01-1970");
        assert_eq!(frame.hover[3].amount, "5.00");
    }

    #[test]
    fn colors_stay_stable_when_series_are_added() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let two = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0)]),
            set("b", &[(0.0, 5.0), (1.0, 6.0)]),
        ];
        let three = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0)]),
            set("b", &[(0.0, 5.0), (1.0, 6.0)]),
            set("c", &[(0.0, 1.0), (1.0, 2.0)]),
        ];

        let first = chart.draw(&two, &ChartOptions::default());
        let second = chart.draw(&three, &ChartOptions::default());

        assert_eq!(first.series[0].color, second.series[0].color);
        assert_eq!(first.series[1].color, second.series[1].color);
    }

    #[test]
    fn consecutive_draws_reconcile_against_the_previous_frame() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let two = vec![
            set("a", &[(0.0, 0.0), (1.0, 10.0)]),
            set("b", &[(0.0, 5.0), (1.0, 6.0)]),
        ];
        let one = vec![set("a", &[(0.0, 3.0), (1.0, 8.0)])];

        let first = chart.draw(&two, &ChartOptions::default());
        assert!(first.series.iter().all(|n| n.phase == Phase::Enter));

        let second = chart.draw(&one, &ChartOptions::default());
        assert_eq!(second.series.len(), 2);
        assert_eq!(second.series[0].phase, Phase::Update);
        assert!(second.series[0].previous.is_some());
        assert_eq!(second.series[1].phase, Phase::Exit);
        assert_eq!(second.series[1].shape.label, "b");

        // The exited series is gone from the frame after next.
        let third = chart.draw(&one, &ChartOptions::default());
        assert_eq!(third.series.len(), 1);
        assert_eq!(third.series[0].phase, Phase::Update);
    }

    #[test]
    fn empty_input_produces_an_empty_frame() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);

        let frame = chart.draw(&[], &ChartOptions::default());

        assert!(frame.series.is_empty());
        assert!(frame.hover.is_empty());
    }

    #[test]
    fn empty_series_render_without_panicking() {
        let mut chart = Chart::with_color_seed(Surface::new(200.0, 100.0), 3);
        let sets = vec![set("a", &[])];
        let options = ChartOptions {
            stack_charts: true,
            ..ChartOptions::default()
        };

        let frame = chart.draw(&sets, &options);

        assert_eq!(frame.series[0].shape.path, "");
        assert!(frame.series[0].shape.label_y.is_nan());
    }
}
