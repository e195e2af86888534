//! Loading, caching and interpolation of tabulated attenuation coefficients
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod config;
mod element;
mod error;
mod loader;
mod lookup;
mod parsers;
mod particle;
mod reaction;
mod store;
mod table;

pub mod policy;

// inline the important types for a nice public API
#[doc(inline)]
pub use lookup::CrossSections;

#[doc(inline)]
pub use store::CrossSectionStore;

#[doc(inline)]
pub use loader::{resource_name, TableLoader, TableSource};

#[doc(inline)]
pub use table::CrossSectionTable;

#[doc(inline)]
pub use config::{Config, FailurePolicy};

#[doc(inline)]
pub use element::Element;

#[doc(inline)]
pub use particle::Particle;

#[doc(inline)]
pub use reaction::Reaction;

#[doc(inline)]
pub use error::{Error, RangeSide, Result};
