//! Target elements and their reference data

// crate modules
use crate::error::{Error, Result};

// xstools modules
use xstools_format::capitalise;

/// A target element, Z = 1 (H) to Z = 100 (Fm)
///
/// Only the atomic number is stored. The symbol, name and atomic mass are
/// looked up from a static table.
///
/// Elements can be built from the atomic number directly, or parsed from a
/// symbol, name, or number. Parsing is insensitive to case.
///
/// ```rust
/// # use xstools_attenuation::Element;
/// let lead = Element::from_z(82).unwrap();
/// assert_eq!(lead.symbol(), "Pb");
/// assert_eq!(lead.name(), "lead");
///
/// // From a symbol, name or atomic number
/// assert_eq!(lead, "pb".parse().unwrap());
/// assert_eq!(lead, "Lead".parse().unwrap());
/// assert_eq!(lead, "82".parse().unwrap());
///
/// // Outside of the table is an error
/// assert!(Element::from_z(0).is_err());
/// assert!(Element::from_z(101).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    z: u8,
}

impl Element {
    /// Highest atomic number with reference data
    pub const MAX_Z: u8 = 100;

    /// Element for an atomic number in 1-100
    pub fn from_z(z: u8) -> Result<Self> {
        if (1..=Self::MAX_Z).contains(&z) {
            Ok(Self { z })
        } else {
            Err(Error::InvalidElement(z.to_string()))
        }
    }

    /// Element for a chemical symbol, e.g. "Fe" or "fe"
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        let symbol = capitalise(symbol.trim());
        ELEMENTS
            .iter()
            .position(|data| data.symbol == symbol)
            .map(Self::from_index)
            .ok_or(Error::InvalidElement(symbol))
    }

    /// Element for a full name, e.g. "iron"
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim().to_lowercase();
        ELEMENTS
            .iter()
            .position(|data| data.name == name)
            .map(Self::from_index)
            .ok_or(Error::InvalidElement(name))
    }

    /// Iterate over every element in order of atomic number
    pub fn all() -> impl Iterator<Item = Element> {
        (1..=Self::MAX_Z).map(|z| Self { z })
    }

    /// Atomic number
    #[inline]
    pub fn z(&self) -> u8 {
        self.z
    }

    /// Chemical symbol, e.g. "Pb"
    pub fn symbol(&self) -> &'static str {
        self.data().symbol
    }

    /// Lower case element name, e.g. "lead"
    pub fn name(&self) -> &'static str {
        self.data().name
    }

    /// Standard atomic weight (u)
    ///
    /// Elements with no stable isotopes use the mass number of the longest
    /// lived isotope.
    pub fn atomic_mass(&self) -> f64 {
        self.data().mass
    }

    fn data(&self) -> &'static ElementData {
        // z is always validated on construction
        &ELEMENTS[usize::from(self.z) - 1]
    }

    fn from_index(index: usize) -> Self {
        // ELEMENTS has exactly MAX_Z entries
        Self {
            z: (index + 1) as u8,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Convert from a symbol, name, or atomic number
impl std::str::FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(z) = s.parse::<u8>() {
            return Self::from_z(z);
        }
        Self::from_symbol(s)
            .or_else(|_| Self::from_name(s))
            .map_err(|_| Error::InvalidElement(s.to_string()))
    }
}

impl TryFrom<u8> for Element {
    type Error = Error;

    fn try_from(z: u8) -> Result<Self> {
        Self::from_z(z)
    }
}

struct ElementData {
    symbol: &'static str,
    name: &'static str,
    mass: f64,
}

const fn e(symbol: &'static str, name: &'static str, mass: f64) -> ElementData {
    ElementData { symbol, name, mass }
}

#[rustfmt::skip]
static ELEMENTS: [ElementData; Element::MAX_Z as usize] = [
    e("H", "hydrogen", 1.008),          e("He", "helium", 4.002602),
    e("Li", "lithium", 6.94),           e("Be", "beryllium", 9.0121831),
    e("B", "boron", 10.81),             e("C", "carbon", 12.011),
    e("N", "nitrogen", 14.007),         e("O", "oxygen", 15.999),
    e("F", "fluorine", 18.998403163),   e("Ne", "neon", 20.1797),
    e("Na", "sodium", 22.98976928),     e("Mg", "magnesium", 24.305),
    e("Al", "aluminium", 26.9815385),   e("Si", "silicon", 28.085),
    e("P", "phosphorus", 30.973761998), e("S", "sulfur", 32.06),
    e("Cl", "chlorine", 35.45),         e("Ar", "argon", 39.948),
    e("K", "potassium", 39.0983),       e("Ca", "calcium", 40.078),
    e("Sc", "scandium", 44.955908),     e("Ti", "titanium", 47.867),
    e("V", "vanadium", 50.9415),        e("Cr", "chromium", 51.9961),
    e("Mn", "manganese", 54.938044),    e("Fe", "iron", 55.845),
    e("Co", "cobalt", 58.933194),       e("Ni", "nickel", 58.6934),
    e("Cu", "copper", 63.546),          e("Zn", "zinc", 65.38),
    e("Ga", "gallium", 69.723),         e("Ge", "germanium", 72.630),
    e("As", "arsenic", 74.921595),      e("Se", "selenium", 78.971),
    e("Br", "bromine", 79.904),         e("Kr", "krypton", 83.798),
    e("Rb", "rubidium", 85.4678),       e("Sr", "strontium", 87.62),
    e("Y", "yttrium", 88.90584),        e("Zr", "zirconium", 91.224),
    e("Nb", "niobium", 92.90637),       e("Mo", "molybdenum", 95.95),
    e("Tc", "technetium", 98.0),        e("Ru", "ruthenium", 101.07),
    e("Rh", "rhodium", 102.90550),      e("Pd", "palladium", 106.42),
    e("Ag", "silver", 107.8682),        e("Cd", "cadmium", 112.414),
    e("In", "indium", 114.818),         e("Sn", "tin", 118.710),
    e("Sb", "antimony", 121.760),       e("Te", "tellurium", 127.60),
    e("I", "iodine", 126.90447),        e("Xe", "xenon", 131.293),
    e("Cs", "caesium", 132.90545196),   e("Ba", "barium", 137.327),
    e("La", "lanthanum", 138.90547),    e("Ce", "cerium", 140.116),
    e("Pr", "praseodymium", 140.90766), e("Nd", "neodymium", 144.242),
    e("Pm", "promethium", 145.0),       e("Sm", "samarium", 150.36),
    e("Eu", "europium", 151.964),       e("Gd", "gadolinium", 157.25),
    e("Tb", "terbium", 158.92535),      e("Dy", "dysprosium", 162.500),
    e("Ho", "holmium", 164.93033),      e("Er", "erbium", 167.259),
    e("Tm", "thulium", 168.93422),      e("Yb", "ytterbium", 173.045),
    e("Lu", "lutetium", 174.9668),      e("Hf", "hafnium", 178.49),
    e("Ta", "tantalum", 180.94788),     e("W", "tungsten", 183.84),
    e("Re", "rhenium", 186.207),        e("Os", "osmium", 190.23),
    e("Ir", "iridium", 192.217),        e("Pt", "platinum", 195.084),
    e("Au", "gold", 196.966569),        e("Hg", "mercury", 200.592),
    e("Tl", "thallium", 204.38),        e("Pb", "lead", 207.2),
    e("Bi", "bismuth", 208.98040),      e("Po", "polonium", 209.0),
    e("At", "astatine", 210.0),         e("Rn", "radon", 222.0),
    e("Fr", "francium", 223.0),         e("Ra", "radium", 226.0),
    e("Ac", "actinium", 227.0),         e("Th", "thorium", 232.0377),
    e("Pa", "protactinium", 231.03588), e("U", "uranium", 238.02891),
    e("Np", "neptunium", 237.0),        e("Pu", "plutonium", 244.0),
    e("Am", "americium", 243.0),        e("Cm", "curium", 247.0),
    e("Bk", "berkelium", 247.0),        e("Cf", "californium", 251.0),
    e("Es", "einsteinium", 252.0),      e("Fm", "fermium", 257.0),
];
