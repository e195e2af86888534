//! Interaction channels

// crate modules
use crate::error::Error;

/// Interaction channels with a tabulated attenuation coefficient
///
/// The variant order is the fixed enumeration order used whenever every
/// allowed reaction is reported, e.g. by
/// [all_atten_coefs()](crate::CrossSections::all_atten_coefs).
///
/// ```rust
/// # use xstools_attenuation::Reaction;
/// assert_eq!(Reaction::Photoelectric, "photoelectric".parse().unwrap());
/// assert_eq!(Reaction::TotalWithCoherent, "total".parse().unwrap());
/// assert_eq!(Reaction::Incoherent.to_string(), "incoherent");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reaction {
    /// Coherent (Rayleigh) scattering
    Coherent,
    /// Incoherent (Compton) scattering
    Incoherent,
    /// Photoelectric absorption
    Photoelectric,
    /// Pair production in the nuclear field
    PairNuclear,
    /// Pair production in the electron field
    PairElectron,
    /// Total attenuation including coherent scattering
    TotalWithCoherent,
    /// Total attenuation excluding coherent scattering
    TotalWithoutCoherent,
}

impl Reaction {
    /// Every reaction in the fixed enumeration order
    pub const ALL: [Reaction; 7] = [
        Reaction::Coherent,
        Reaction::Incoherent,
        Reaction::Photoelectric,
        Reaction::PairNuclear,
        Reaction::PairElectron,
        Reaction::TotalWithCoherent,
        Reaction::TotalWithoutCoherent,
    ];

    /// Short lower case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Coherent => "coherent",
            Self::Incoherent => "incoherent",
            Self::Photoelectric => "photoelectric",
            Self::PairNuclear => "pair-nuclear",
            Self::PairElectron => "pair-electron",
            Self::TotalWithCoherent => "total",
            Self::TotalWithoutCoherent => "total-no-coherent",
        }
    }
}

impl std::fmt::Display for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Reaction {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase().replace('_', "-");

        match s.as_str() {
            "coherent" | "rayleigh" => Ok(Self::Coherent),
            "incoherent" | "compton" => Ok(Self::Incoherent),
            "photoelectric" | "photo" => Ok(Self::Photoelectric),
            "pair-nuclear" | "nuclear-pair" => Ok(Self::PairNuclear),
            "pair-electron" | "electron-pair" | "triplet" => Ok(Self::PairElectron),
            "total" | "total-with-coherent" => Ok(Self::TotalWithCoherent),
            "total-no-coherent" | "total-without-coherent" => Ok(Self::TotalWithoutCoherent),
            _ => Err(Error::InvalidReaction(s)),
        }
    }
}

impl std::str::FromStr for Reaction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for reaction in Reaction::ALL {
            assert_eq!(reaction.name().parse::<Reaction>(), Ok(reaction));
        }
    }

    #[test]
    fn enumeration_order_is_sorted() {
        let mut sorted = Reaction::ALL;
        sorted.sort();
        assert_eq!(sorted, Reaction::ALL);
    }

    #[test]
    fn aliases() {
        assert_eq!("Compton".parse::<Reaction>(), Ok(Reaction::Incoherent));
        assert_eq!("pair_nuclear".parse::<Reaction>(), Ok(Reaction::PairNuclear));
        assert!("fission".parse::<Reaction>().is_err());
    }
}
