//! Incident particle types

// crate modules
use crate::error::Error;

// xstools modules
use xstools_format::f;

/// Incident particle types known to the lookup
///
/// This is a closed set. Every variant has a rest mass and a name, but only
/// particles with a table layout (see [layout()](crate::policy::layout)) have
/// data that can be loaded. Currently that is only [Particle::Photon].
///
/// The particle can be inferred from several identifiers, all insensitive to
/// case.
///
/// ```rust
/// # use xstools_attenuation::Particle;
/// // From the name or a common alias
/// assert_eq!(Particle::Photon, Particle::try_from("photon").unwrap());
/// assert_eq!(Particle::Photon, Particle::try_from("Gamma").unwrap());
///
/// // From the numeric id
/// assert_eq!(Particle::Neutron, Particle::try_from(1).unwrap());
/// assert_eq!(Particle::Proton, "2".parse().unwrap());
/// ```
///
/// | ID | Name    | Aliases        | Rest mass (MeV) |
/// | -- | ------- | -------------- | --------------- |
/// | 0  | photon  | gamma, p, g    | 0               |
/// | 1  | neutron | n              | 939.56542194    |
/// | 2  | proton  | h              | 938.27208816    |
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Particle {
    Photon = 0,
    Neutron = 1,
    Proton = 2,
}

impl Particle {
    /// Every particle variant in id order
    pub const ALL: [Particle; 3] = [Particle::Photon, Particle::Neutron, Particle::Proton];

    /// An alternative to using `Particle::Photon as u8`
    ///
    /// ```rust
    /// # use xstools_attenuation::Particle;
    /// assert_eq!(Particle::Proton as u8, Particle::Proton.id());
    /// ```
    #[inline]
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Lower case name, also used in messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Photon => "photon",
            Self::Neutron => "neutron",
            Self::Proton => "proton",
        }
    }

    /// Rest mass in MeV
    pub fn mass(&self) -> f64 {
        match self {
            Self::Photon => 0.0,
            Self::Neutron => 939.565_421_94,
            Self::Proton => 938.272_088_16,
        }
    }

    /// True if the particle has a data layout and can be looked up
    pub fn is_configured(&self) -> bool {
        crate::policy::layout(*self).is_some()
    }
}

impl std::fmt::Display for Particle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Convert from a numerical id
impl TryFrom<u8> for Particle {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Photon),
            1 => Ok(Self::Neutron),
            2 => Ok(Self::Proton),
            _ => Err(Error::InvalidParticle(f!("{v}"))),
        }
    }
}

/// Convert from a name, alias, or numerical id
impl TryFrom<&str> for Particle {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "0" | "photon" | "gamma" | "p" | "g" => Ok(Self::Photon),
            "1" | "neutron" | "n" => Ok(Self::Neutron),
            "2" | "proton" | "h" => Ok(Self::Proton),
            _ => Err(Error::InvalidParticle(s)),
        }
    }
}

impl std::str::FromStr for Particle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
