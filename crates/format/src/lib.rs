//! Common formatting helpers for the xstools crates
//!
//! These are left public for convenience.
//!
//! Tables, errors and file names all end up needing the same handful of
//! string conversions, so they live here rather than in every crate.

// standard library
use std::fmt::{Display, LowerExp};

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Better scientific number formatting
    ///
    /// Energies and coefficients span many orders of magnitude, and the
    /// default `{:e}` output drops the exponent sign and padding. This gives
    /// the fixed-width form used in the data tables.
    ///
    /// ```rust
    /// # use xstools_format::NumFormat;
    /// assert_eq!((1.0).sci(5, 2), "1.00000e+00".to_string());
    /// assert_eq!((0.088).sci(3, 2), "8.800e-02".to_string());
    /// assert_eq!((-150.0).sci(2, 3), "-1.50e+002".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let num = f!("{:.precision$e}", &self, precision = precision);
        // `LowerExp` output always contains the 'e'
        let (mantissa, exp) = match num.split_once('e') {
            Some(parts) => parts,
            None => return num,
        };
        let (sign, exp) = match exp.strip_prefix('-') {
            Some(exp) => ('-', exp),
            None => ('+', exp),
        };
        f!("{mantissa}e{sign}{exp:0>exp_pad$}")
    }
}

/// Extends Option for easy display formatting
pub trait OptionFormat {
    /// Either the value contained within `Some()` or "none"
    ///
    /// ```rust
    /// # use xstools_format::OptionFormat;
    /// let line: Option<usize> = Some(12);
    /// assert_eq!(line.display(), "12");
    ///
    /// let line: Option<usize> = None;
    /// assert_eq!(line.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionFormat for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}

/// Capitalises the first letter and lowers the rest
///
/// Chemical symbols are written this way, so user input such as "PB" or "pb"
/// is normalised before lookup.
///
/// ```rust
/// # use xstools_format::capitalise;
/// assert_eq!(capitalise("pb"), "Pb".to_string());
/// assert_eq!(capitalise("FE"), "Fe".to_string());
/// assert_eq!(capitalise(""), "".to_string());
/// ```
pub fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Left pad an unsigned integer with zeros to a fixed width
///
/// Returns `None` if the number does not fit in `width` digits, rather than
/// silently producing a longer string.
///
/// ```rust
/// # use xstools_format::zero_pad;
/// assert_eq!(zero_pad(6, 3), Some("006".to_string()));
/// assert_eq!(zero_pad(82, 3), Some("082".to_string()));
/// assert_eq!(zero_pad(100, 3), Some("100".to_string()));
/// assert_eq!(zero_pad(1000, 3), None);
/// ```
pub fn zero_pad(value: u32, width: usize) -> Option<String> {
    let digits = value.to_string();
    if digits.len() > width {
        None
    } else {
        Some(f!("{digits:0>width$}"))
    }
}
