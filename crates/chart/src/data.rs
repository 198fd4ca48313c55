//! The input data model: labeled, ordered sequences of samples.

use serde::Deserialize;
use serde::Serialize;

/// A single sample of a series.
///
/// When a tooltip is built for the sample, `x` is interpreted as seconds
/// since the Unix epoch.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// The sample position, in seconds since the Unix epoch.
    pub x: f64,
    /// The sample value.
    pub y: f64,
}

impl DataPoint {
    /// Creates a sample at `x` with value `y`.
    pub fn new(x: f64, y: f64) -> DataPoint {
        Self { x, y }
    }
}

/// A labeled, ordered sequence of samples. Owned by the caller; the chart
/// never mutates it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataSet {
    /// The series label shown next to the line and in the tooltip.
    pub label: String,
    /// The samples, in drawing order.
    pub data: Vec<DataPoint>,
}

impl DataSet {
    /// Creates a data set from a label and its samples.
    pub fn new(label: String, data: Vec<DataPoint>) -> DataSet {
        Self { label, data }
    }
}

/// A sample from the flattened cross-series list, tagged with the index
/// of the data set it came from.
///
/// The position of a `FlatPoint` within the flattened list is the join
/// key between partition cells and the original data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatPoint {
    /// The sample position.
    pub x: f64,
    /// The sample value.
    pub y: f64,
    /// The index of the owning data set.
    pub set_index: usize,
}

pub(crate) fn flatten(sets: &[DataSet]) -> Vec<FlatPoint> {
    sets.iter()
        .enumerate()
        .flat_map(|(set_index, set)| {
            set.data.iter().map(move |point| FlatPoint {
                x: point.x,
                y: point.y,
                set_index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_tags_points_with_their_set() {
        let sets = vec![
            DataSet::new(
                String::from("a"),
                vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)],
            ),
            DataSet::new(String::from("b"), vec![DataPoint::new(0.0, 5.0)]),
        ];

        let flat = flatten(&sets);

        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].set_index, 0);
        assert_eq!(flat[1].set_index, 0);
        assert_eq!(flat[2].set_index, 1);
        assert_eq!(flat[2].y, 5.0);
    }

    #[test]
    fn data_set_round_trips_through_json() {
        let json = r#"[{ "label": "a", "data": [{ "x": 1.0, "y": 2.5 }] }]"#;

        let sets: Vec<DataSet> = serde_json::from_str(json).unwrap();

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].label, "a");
        assert_eq!(sets[0].data, vec![DataPoint::new(1.0, 2.5)]);
    }
}
