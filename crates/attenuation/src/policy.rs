//! Static declarations of table layouts and allowed reactions
//!
//! Everything here is data. Supporting a new particle type means adding a
//! [Layout] and listing it in [layout()], nothing else.

// crate modules
use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::reaction::Reaction;

/// Column holding the energy (MeV) for every particle type
pub const ENERGY_COLUMN: usize = 0;

/// File layout and reaction columns for one particle type
#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    /// Directory token under the data directory
    pub directory: &'static str,
    /// Number of leading lines to skip
    pub header_lines: usize,
    /// Number of values on every data row, including the energy
    pub columns: usize,
    /// Declared reactions and the column holding each coefficient
    pub reactions: &'static [(Reaction, usize)],
}

/// Photon interaction tables in XCOM order
static PHOTON: Layout = Layout {
    directory: "photon",
    header_lines: 2,
    columns: 8,
    reactions: &[
        (Reaction::Coherent, 1),
        (Reaction::Incoherent, 2),
        (Reaction::Photoelectric, 3),
        (Reaction::PairNuclear, 4),
        (Reaction::PairElectron, 5),
        (Reaction::TotalWithCoherent, 6),
        (Reaction::TotalWithoutCoherent, 7),
    ],
};

/// Table layout for a particle type
///
/// Neutrons and protons are declared but have no data layout, so `None` is
/// returned rather than guessing one.
///
/// ```rust
/// # use xstools_attenuation::{policy, Particle};
/// let photon = policy::layout(Particle::Photon).unwrap();
/// assert_eq!(photon.directory, "photon");
/// assert_eq!(photon.columns, 8);
///
/// assert!(policy::layout(Particle::Neutron).is_none());
/// ```
pub fn layout(particle: Particle) -> Option<&'static Layout> {
    match particle {
        Particle::Photon => Some(&PHOTON),
        Particle::Neutron | Particle::Proton => None,
    }
}

/// True if the reaction is declared for the particle type
pub fn is_allowed(particle: Particle, reaction: Reaction) -> bool {
    find_column(particle, reaction).is_some()
}

/// Column index holding the coefficient for a reaction
///
/// ```rust
/// # use xstools_attenuation::{policy, Particle, Reaction};
/// assert_eq!(policy::column_of(Particle::Photon, Reaction::Photoelectric), Ok(3));
/// assert!(policy::column_of(Particle::Neutron, Reaction::Photoelectric).is_err());
/// ```
pub fn column_of(particle: Particle, reaction: Reaction) -> Result<usize> {
    find_column(particle, reaction).ok_or(Error::ReactionNotSupported { particle, reaction })
}

/// Declared reactions for the particle type in the fixed enumeration order
///
/// ```rust
/// # use xstools_attenuation::{policy, Particle, Reaction};
/// let reactions = policy::allowed_reactions(Particle::Photon);
/// assert_eq!(reactions.first(), Some(&Reaction::Coherent));
/// assert_eq!(reactions.len(), 7);
///
/// assert!(policy::allowed_reactions(Particle::Proton).is_empty());
/// ```
pub fn allowed_reactions(particle: Particle) -> Vec<Reaction> {
    Reaction::ALL
        .into_iter()
        .filter(|reaction| is_allowed(particle, *reaction))
        .collect()
}

fn find_column(particle: Particle, reaction: Reaction) -> Option<usize> {
    layout(particle)?
        .reactions
        .iter()
        .find(|(r, _)| *r == reaction)
        .map(|(_, column)| *column)
}
