//! Result and Error types for the attenuation module

// standard library
use std::path::PathBuf;

// xstools modules
use xstools_format::OptionFormat;

// internal modules
use crate::element::Element;
use crate::particle::Particle;
use crate::reaction::Reaction;

/// Type alias for `Result<T, attenuation::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// Which end of the tabulated energy grid was exceeded
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeSide {
    /// Energy is less than the first tabulated energy
    Below,
    /// Energy is greater than the last tabulated energy
    Above,
}

impl std::fmt::Display for RangeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Below => write!(f, "below"),
            Self::Above => write!(f, "above"),
        }
    }
}

/// The error type for `xstools-attenuation`
///
/// Every variant carries enough context (particle, element, energy, reaction)
/// to find the offending table without a debugger. The type is `Clone` since a
/// failed load is cached and handed to every later caller for the same table.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Backing table is missing, unreadable, or the particle has no data layout
    #[error("no {particle} data for {element} at {path:?} ({reason})")]
    ResourceNotFound {
        particle: Particle,
        element: Element,
        path: PathBuf,
        reason: String,
    },

    /// Table content could not be parsed
    #[error(
        "malformed {particle} table for {element} (line {}, column {}): {reason}",
        .line.display(),
        .column.display()
    )]
    DataFormatError {
        particle: Particle,
        element: Element,
        line: Option<usize>,
        column: Option<usize>,
        reason: String,
    },

    /// Reaction is not declared for the particle type
    #[error("reaction {reaction} is not supported for {particle}")]
    ReactionNotSupported {
        particle: Particle,
        reaction: Reaction,
    },

    /// Energy is outside of the tabulated domain
    #[error("energy {energy} MeV is {side} range [{min}, {max}] MeV for {particle} in {element}")]
    RangeError {
        particle: Particle,
        element: Element,
        energy: f64,
        side: RangeSide,
        min: f64,
        max: f64,
    },

    /// Invalid interpolation inputs, e.g. non-positive coefficients
    #[error("cannot interpolate {reaction} for {particle} in {element} at {energy} MeV: {reason}")]
    DomainError {
        particle: Particle,
        element: Element,
        reaction: Reaction,
        energy: f64,
        reason: String,
    },

    /// Table was requested from the cache before it was loaded
    #[error("no {particle} table for {element} has been loaded")]
    NotFoundInCache { particle: Particle, element: Element },

    /// Unable to infer an element from a symbol, name, or atomic number
    #[error("failed to infer element from \"{0}\"")]
    InvalidElement(String),

    /// Unable to infer a particle type
    #[error("failed to infer particle from \"{0}\"")]
    InvalidParticle(String),

    /// Unable to infer a reaction type
    #[error("failed to infer reaction from \"{0}\"")]
    InvalidReaction(String),

    /// Configuration could not be read or is invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}
