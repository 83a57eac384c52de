#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Two parallel, always equal-length sequences of sample values.
///
/// A `SeriesPair` holds the `x` and `y` coordinates of a sampled trace in
/// append order. Points are only ever added, never removed or reordered, so
/// index `k` always refers to the `k`-th sample taken.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct SeriesPair {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SeriesPair {
    /// Creates an empty pair of series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pair of series holding a single initial point.
    #[must_use]
    pub fn seeded(x0: f64, y0: f64) -> Self {
        Self {
            xs: vec![x0],
            ys: vec![y0],
        }
    }

    /// Appends one point to both series.
    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Returns the `x` values in append order.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the `y` values in append order.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the number of points in each series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the points as `[x, y]` pairs in append order, the form the
    /// plot viewer consumes.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_series_is_empty() {
        let series = SeriesPair::new();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.points().is_empty());
    }

    #[test]
    fn seeded_series_holds_one_point() {
        let series = SeriesPair::seeded(10.0, 11.0);
        assert_eq!(series.len(), 1);
        assert_eq!(series.xs(), [10.0]);
        assert_eq!(series.ys(), [11.0]);
    }

    #[test]
    fn push_appends_to_both_series() {
        let mut series = SeriesPair::seeded(10.0, 11.0);
        series.push(0.0, 10.0);
        series.push(1.0, 11.0);

        assert_eq!(series.len(), 3);
        assert_eq!(series.xs(), [10.0, 0.0, 1.0]);
        assert_eq!(series.ys(), [11.0, 10.0, 11.0]);
    }

    #[test]
    fn points_pairs_values_in_append_order() {
        let mut series = SeriesPair::new();
        series.push(0.0, 10.0);
        series.push(1.0, 11.0);

        assert_eq!(series.points(), [[0.0, 10.0], [1.0, 11.0]]);
    }
}
