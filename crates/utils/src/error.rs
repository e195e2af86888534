//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
/// The error type for `xstools_utils`
pub enum Error {
    /// An empty slice of floats for SliceExt
    SliceContainsNoValues,

    /// The slice of float values contains things like NAN or INFINITY
    SliceContainsUndefinedValues,

    /// The value searched for or interpolated at is NAN or INFINITY
    UndefinedValue { value: f64 },

    /// A catch-all for functions returning errors that should be unreachable
    UncapturedErrorCondition,

    /// Value searched for is less than the first grid value
    ValueBelowRange { value: f64, lower_bound: f64 },

    /// Value searched for is greater than the last grid value
    ValueAboveRange { value: f64, upper_bound: f64 },

    /// Interpolation point is not within the bracketing interval
    ValueOutsideInterval {
        value: f64,
        lower_bound: f64,
        upper_bound: f64,
    },

    /// Interpolation interval has zero or negative width
    DegenerateInterval { lower_bound: f64, upper_bound: f64 },

    /// Log-log interpolation needs strictly positive inputs
    NonPositiveLogArgument { value: f64 },
}

// error boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// implement standard error trait to use with ? operator
impl std::error::Error for Error {}
