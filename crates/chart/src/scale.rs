//! Linear scales mapping data domains onto pixel ranges.

/// A linear mapping from a data domain onto a pixel range.
///
/// The domain is fitted over the data at construction time. Values
/// outside the domain extrapolate linearly; there is no clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Fits the domain via min/max of `value` over `items` and maps it
    /// onto `[range_min, range_max]`.
    ///
    /// An empty `items` slice produces a NaN domain, and every mapped
    /// value is NaN from then on.
    pub fn fit<T, F>(items: &[T], value: F, range_min: f64, range_max: f64) -> LinearScale
    where
        F: Fn(&T) -> f64,
    {
        let mut min = f64::NAN;
        let mut max = f64::NAN;

        for item in items {
            let v = value(item);
            min = min.min(v);
            max = max.max(v);
        }

        Self {
            domain: (min, max),
            range: (range_min, range_max),
        }
    }

    /// Maps `value` from the domain onto the range.
    ///
    /// A collapsed domain (min equals max) maps every input to the
    /// midpoint of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;

        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }

        r0 + (value - d0) / span * (r1 - r0)
    }

    /// The fitted domain bounds.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}
