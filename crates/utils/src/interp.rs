use crate::error::{Error, Result};

/// Linear interpolation in log-log space
///
/// Interpolates between `(x1, y1)` and `(x2, y2)` at `x`, treating the data as
/// a piecewise power law:
///
/// ```text
/// y = exp( ln(y1) + (ln(y2) - ln(y1)) * (ln(x) - ln(x1)) / (ln(x2) - ln(x1)) )
/// ```
///
/// Requires `x1 <= x <= x2`, `x1 < x2`, and every input strictly positive.
/// Anything else is an error rather than a NAN.
///
/// ```rust
/// # use xstools_utils::loglog;
/// let y = loglog(1.5, 1.0, 2.0, 0.5, 0.3).unwrap();
/// assert!((y - 0.37085).abs() < 1e-5);
///
/// // Outside of the interval, or anything non-positive, is an error
/// assert!(loglog(2.5, 1.0, 2.0, 0.5, 0.3).is_err());
/// assert!(loglog(1.5, 1.0, 2.0, 0.0, 0.3).is_err());
/// ```
pub fn loglog(x: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> Result<f64> {
    for value in [x, x1, x2, y1, y2] {
        if value.is_nan() || value.is_infinite() {
            return Err(Error::UndefinedValue { value });
        }
        if value <= 0.0 {
            return Err(Error::NonPositiveLogArgument { value });
        }
    }

    if x1 >= x2 {
        return Err(Error::DegenerateInterval {
            lower_bound: x1,
            upper_bound: x2,
        });
    }

    if x < x1 || x > x2 {
        return Err(Error::ValueOutsideInterval {
            value: x,
            lower_bound: x1,
            upper_bound: x2,
        });
    }

    let (ln_y1, ln_y2) = (y1.ln(), y2.ln());
    let proportion = (x.ln() - x1.ln()) / (x2.ln() - x1.ln());
    Ok((ln_y1 + (ln_y2 - ln_y1) * proportion).exp())
}
