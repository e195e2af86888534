//! Common utility for slices of tabulated float data
//!
//! These are left public for convenience.
//!
//! The lookup code only ever needs to find where a value sits on a sorted
//! grid and interpolate between two points, but getting the edge cases right
//! (duplicated energies, values exactly on a grid point, NAN) is fiddly enough
//! to keep in one place.

// Modules
mod error;
mod interp;
mod slice_ext;

// Flatten
pub use error::{Error, Result};
pub use interp::loglog;
pub use slice_ext::{Bracket, SliceExt};
