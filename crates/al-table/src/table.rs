//! Ordered key→value table and its interpolation routine.

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// Strictly increasing numeric keys mapped to values.
///
/// Invariants, checked by every constructor:
/// - keys are finite and unique
/// - `keys` is sorted ascending and `values[i]` belongs to `keys[i]`
///
/// Tables with fewer than two points can be built (a config may be filled in
/// incrementally) but cannot be interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct InterpolationTable {
    keys: Vec<f64>,
    values: Vec<f64>,
}

impl InterpolationTable {
    /// Build a table from `(key, value)` points in any order.
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> TableResult<Self> {
        let mut points: Vec<(f64, f64)> = points.into_iter().collect();

        if let Some(&(key, _)) = points.iter().find(|(key, _)| !key.is_finite()) {
            return Err(TableError::NonFiniteKey { key });
        }

        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        // -0.0 and 0.0 sort next to each other and compare equal, so they are
        // caught here as well.
        if let Some(pair) = points.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(TableError::DuplicateKey { key: pair[1].0 });
        }

        let (keys, values) = points.into_iter().unzip();
        Ok(Self { keys, values })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Values in key order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Exact lookup by key.
    pub fn get(&self, key: f64) -> Option<f64> {
        let idx = self.keys.partition_point(|&k| k < key);
        match self.keys.get(idx) {
            Some(&k) if k == key => Some(self.values[idx]),
            _ => None,
        }
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.keys.iter().copied().zip(self.values.iter().copied())
    }

    pub fn min_key(&self) -> Option<f64> {
        self.keys.first().copied()
    }

    pub fn max_key(&self) -> Option<f64> {
        self.keys.last().copied()
    }

    /// Interpolate the value at `x`.
    ///
    /// - exact key hit: that key's value
    /// - below the first key: extend the segment between the two smallest keys
    /// - above the last key: extend the segment between the two largest keys
    /// - otherwise: linear interpolation on the bracketing pair, found by
    ///   binary search in O(log n)
    pub fn interpolate(&self, x: f64) -> TableResult<f64> {
        let n = self.len();
        if n < 2 {
            return Err(TableError::TooFewEntries { len: n });
        }
        if !x.is_finite() {
            return Err(TableError::NonFiniteQuery { x });
        }

        if x < self.keys[0] {
            return Ok(self.along(0, (0, 1), x));
        }
        if x > self.keys[n - 1] {
            return Ok(self.along(n - 1, (n - 2, n - 1), x));
        }

        let (lo, hi) = self.bracket(x);
        if x == self.keys[lo] {
            return Ok(self.values[lo]);
        }
        if x == self.keys[hi] {
            return Ok(self.values[hi]);
        }
        Ok(self.along(lo, (lo, hi), x))
    }

    /// Walk from point `anchor` to `x` with the slope of segment `seg`.
    fn along(&self, anchor: usize, seg: (usize, usize), x: f64) -> f64 {
        self.values[anchor] + (x - self.keys[anchor]) * self.slope(seg.0, seg.1)
    }

    /// Narrow `[0, n-1]` down to two adjacent keys with `keys[lo] <= x <= keys[hi]`.
    ///
    /// Requires `n >= 2` and `x` inside the key range.
    fn bracket(&self, x: f64) -> (usize, usize) {
        let mut lo = 0;
        let mut hi = self.keys.len() - 1;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if x < self.keys[mid] {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        (lo, hi)
    }

    fn slope(&self, i: usize, j: usize) -> f64 {
        (self.values[j] - self.values[i]) / (self.keys[j] - self.keys[i])
    }
}

impl TryFrom<Vec<(f64, f64)>> for InterpolationTable {
    type Error = TableError;

    fn try_from(points: Vec<(f64, f64)>) -> TableResult<Self> {
        Self::new(points)
    }
}

impl From<InterpolationTable> for Vec<(f64, f64)> {
    fn from(table: InterpolationTable) -> Self {
        table.keys.into_iter().zip(table.values).collect()
    }
}

/// Free-function form of [`InterpolationTable::interpolate`].
pub fn interpolate(x: f64, table: &InterpolationTable) -> TableResult<f64> {
    table.interpolate(x)
}
