use crate::error::{Error, Result};

/// Position of a value on a sorted grid
///
/// Either the value lands exactly on a grid point, or it sits strictly
/// between two neighbouring points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// Value is exactly the grid point at this index
    Exact(usize),
    /// Value is strictly between the grid points at `lower` and `upper`
    Between { lower: usize, upper: usize },
}

impl Bracket {
    /// Indices as a `(lower, upper)` pair
    ///
    /// Both indices are the same for an exact match.
    ///
    /// ```rust
    /// # use xstools_utils::Bracket;
    /// assert_eq!(Bracket::Exact(3).indices(), (3, 3));
    /// assert_eq!(Bracket::Between { lower: 2, upper: 3 }.indices(), (2, 3));
    /// ```
    pub fn indices(&self) -> (usize, usize) {
        match *self {
            Bracket::Exact(i) => (i, i),
            Bracket::Between { lower, upper } => (lower, upper),
        }
    }

    /// True if no interpolation is needed
    pub fn is_exact(&self) -> bool {
        matches!(self, Bracket::Exact(_))
    }
}

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use xstools_utils::SliceExt;
    /// # use xstools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Uses `total_cmp` since the float primitives do not implement `Ord`.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Only provides the maximum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use xstools_utils::SliceExt;
    /// # use xstools_utils::Error;
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Locate `value` on a non-decreasing grid
    ///
    /// The grid may contain a value twice in a row, which is how tabulated
    /// data marks a discontinuity such as an absorption edge. A value exactly
    /// on a duplicated point always resolves to the second (upper) occurrence.
    ///
    /// Values exactly on any other grid point give [Bracket::Exact], and
    /// everything else between the first and last points gives
    /// [Bracket::Between] with neighbouring indices. The search is a binary
    /// search, so O(log n).
    ///
    /// ```rust
    /// # use xstools_utils::{Bracket, SliceExt};
    /// let energies = [1.0, 2.0, 2.0, 5.0];
    ///
    /// assert_eq!(energies.bracket(1.0), Ok(Bracket::Exact(0)));
    /// assert_eq!(energies.bracket(1.5), Ok(Bracket::Between { lower: 0, upper: 1 }));
    /// assert_eq!(energies.bracket(2.0), Ok(Bracket::Exact(2)));
    /// assert_eq!(energies.bracket(3.0), Ok(Bracket::Between { lower: 2, upper: 3 }));
    ///
    /// // Values outside the grid are an error case
    /// assert!(energies.bracket(0.5).is_err());
    /// assert!(energies.bracket(5.5).is_err());
    /// ```
    fn bracket(&self, value: T) -> Result<Bracket>;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        if let Some(v) = self.iter().min_by(|a, b| a.total_cmp(b)).copied() {
            Ok(v)
        } else {
            Err(Error::SliceContainsNoValues)
        }
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        if let Some(v) = self.iter().max_by(|a, b| a.total_cmp(b)).copied() {
            Ok(v)
        } else {
            Err(Error::SliceContainsNoValues)
        }
    }

    fn bracket(&self, value: f64) -> Result<Bracket> {
        if !value.is_finite() {
            return Err(Error::UndefinedValue { value });
        }

        let (lower_bound, upper_bound) = match (self.first(), self.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(Error::SliceContainsNoValues),
        };

        // is the value relevant?
        if value < lower_bound {
            return Err(Error::ValueBelowRange { value, lower_bound });
        }
        if value > upper_bound {
            return Err(Error::ValueAboveRange { value, upper_bound });
        }

        // first index with grid[upper] >= value, always in bounds for a
        // sorted grid since value <= upper_bound
        let upper = self.partition_point(|&v| v < value);
        let found = self.get(upper).ok_or(Error::UncapturedErrorCondition)?;

        // on an edge, take the post-edge point
        if self.get(upper + 1) == Some(&value) {
            return Ok(Bracket::Exact(upper + 1));
        }

        if *found == value {
            return Ok(Bracket::Exact(upper));
        }

        // only reachable with upper > 0 unless the grid is not sorted
        let lower = upper.checked_sub(1).ok_or(Error::UncapturedErrorCondition)?;
        Ok(Bracket::Between { lower, upper })
    }
}
