//! Attenuation coefficient lookups

// standard library
use std::collections::BTreeMap;
use std::sync::Arc;

// xstools modules
use xstools_format::f;
use xstools_utils::{loglog, SliceExt};

// external crates
use log::trace;
use rayon::prelude::*;

// crate modules
use crate::config::Config;
use crate::element::Element;
use crate::error::{Error, RangeSide, Result};
use crate::particle::Particle;
use crate::policy;
use crate::reaction::Reaction;
use crate::store::CrossSectionStore;
use crate::table::CrossSectionTable;

/// Mass attenuation coefficients (cm2/g) by energy, reaction, particle and
/// element
///
/// A thin layer over a shared [CrossSectionStore]. Every lookup checks that
/// the reaction is declared for the particle, loads the table if this is the
/// first time it is needed, then interpolates the coefficient.
///
/// Between tabulated energies the coefficient is interpolated linearly in
/// log-log space. An energy exactly on a tabulated point returns the stored
/// value, and an energy exactly on an absorption edge returns the value above
/// the edge.
///
/// The facade is cheap to clone, and clones share the same cache.
///
/// ```rust, no_run
/// # use xstools_attenuation::{Config, CrossSections, Element, Particle, Reaction};
/// let xs = CrossSections::from_config(&Config::new("./data"));
/// let lead = Element::from_z(82).unwrap();
///
/// let mu = xs
///     .atten_coef(1.0, Reaction::TotalWithCoherent, Particle::Photon, lead)
///     .unwrap();
/// println!("mu/rho = {mu} cm2/g");
/// ```
#[derive(Debug, Clone)]
pub struct CrossSections {
    store: Arc<CrossSectionStore>,
}

impl CrossSections {
    /// Lookups backed by an existing, possibly shared, cache
    pub fn new(store: Arc<CrossSectionStore>) -> Self {
        Self { store }
    }

    /// Lookups backed by a new cache reading files as described by a [Config]
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(CrossSectionStore::from_config(config)))
    }

    /// The underlying cache
    pub fn store(&self) -> &Arc<CrossSectionStore> {
        &self.store
    }

    /// Coefficient for one reaction at one energy (MeV)
    ///
    /// Fails with:
    /// - [Error::ReactionNotSupported] if the reaction is not declared for the
    ///   particle, before anything is loaded
    /// - any error from loading the table
    /// - [Error::RangeError] if the energy is outside of the table
    /// - [Error::DomainError] if the energy is not finite or log-log
    ///   interpolation is impossible, e.g. a zero coefficient
    pub fn atten_coef(
        &self,
        energy: f64,
        reaction: Reaction,
        particle: Particle,
        element: Element,
    ) -> Result<f64> {
        let column = policy::column_of(particle, reaction)?;
        let table = self.store.load_if_absent(particle, element)?;
        coefficient(&table, energy, reaction, column)
    }

    /// Coefficients for every reaction declared for the particle
    ///
    /// Reactions are in their fixed enumeration order. The table is loaded
    /// first, so a particle without data fails to load rather than returning
    /// nothing.
    ///
    /// Any single failure fails the whole call. Pair production is tabulated
    /// as zero below its threshold, and zero cannot be interpolated in log-log
    /// space, so any energy below the first non-zero pair row that is not
    /// itself a tabulated energy gives [Error::DomainError]. Energies just
    /// above the pair threshold fail this way, e.g. 1.01 MeV in lead. The
    /// electron-field channel has the higher threshold, 3 MeV for the bundled
    /// lead table. Tabulated energies return the stored zero. Use
    /// [atten_coef()](Self::atten_coef) per reaction to get the channels that
    /// can still be evaluated.
    pub fn all_atten_coefs(
        &self,
        energy: f64,
        particle: Particle,
        element: Element,
    ) -> Result<Vec<(Reaction, f64)>> {
        let table = self.store.load_if_absent(particle, element)?;
        policy::allowed_reactions(particle)
            .into_iter()
            .map(|reaction| {
                let column = policy::column_of(particle, reaction)?;
                Ok((reaction, coefficient(&table, energy, reaction, column)?))
            })
            .collect()
    }

    /// Coefficients for one reaction at many energies (MeV)
    ///
    /// Energies are evaluated in parallel. The output is in the same order as
    /// the input, and if any energy fails the first failure in input order is
    /// returned.
    pub fn atten_coefs(
        &self,
        energies: &[f64],
        reaction: Reaction,
        particle: Particle,
        element: Element,
    ) -> Result<Vec<f64>> {
        let column = policy::column_of(particle, reaction)?;
        let table = self.store.load_if_absent(particle, element)?;

        let results: Vec<Result<f64>> = energies
            .par_iter()
            .map(|&energy| coefficient(&table, energy, reaction, column))
            .collect();

        results.into_iter().collect()
    }

    /// Make sure the table for a particle and element is loaded
    pub fn add_data_single_file(&self, particle: Particle, element: Element) -> Result<()> {
        self.store.load_if_absent(particle, element).map(|_| ())
    }

    /// Load tables in order, stopping at the first failure
    ///
    /// Tables loaded before a failure are kept.
    pub fn add_data_multiple_files(&self, keys: &[(Particle, Element)]) -> Result<()> {
        self.store.add_multiple(keys)
    }

    /// Every successfully loaded table, ordered by particle then element
    pub fn all_data(&self) -> BTreeMap<(Particle, Element), Arc<CrossSectionTable>> {
        self.store.snapshot()
    }

    /// Number of successfully loaded tables
    pub fn cached_entry_count(&self) -> usize {
        self.store.count()
    }
}

/// Exact or log-log interpolated coefficient from a single table column
fn coefficient(
    table: &CrossSectionTable,
    energy: f64,
    reaction: Reaction,
    column: usize,
) -> Result<f64> {
    let (particle, element) = (table.particle(), table.element());
    let domain_error = |reason: String| Error::DomainError {
        particle,
        element,
        reaction,
        energy,
        reason,
    };

    let energies = table.energies();
    let coefs = table.column(column).ok_or_else(|| Error::DataFormatError {
        particle,
        element,
        line: None,
        column: Some(column + 1),
        reason: f!("table has no column for {reaction}"),
    })?;

    let bracket = energies.bracket(energy).map_err(|e| {
        let (min, max) = table.energy_range();
        let range_error = |side| Error::RangeError {
            particle,
            element,
            energy,
            side,
            min,
            max,
        };
        match e {
            xstools_utils::Error::ValueBelowRange { .. } => range_error(RangeSide::Below),
            xstools_utils::Error::ValueAboveRange { .. } => range_error(RangeSide::Above),
            xstools_utils::Error::UndefinedValue { .. } => {
                domain_error("energy is not a finite number".to_string())
            }
            other => domain_error(f!("unable to bracket energy: {other}")),
        }
    })?;

    trace!("{particle} {element} {reaction} at {energy} MeV: {bracket:?}");

    let (lower, upper) = bracket.indices();
    if bracket.is_exact() {
        return Ok(coefs[lower]);
    }

    loglog(
        energy,
        energies[lower],
        energies[upper],
        coefs[lower],
        coefs[upper],
    )
    .map_err(|e| match e {
        xstools_utils::Error::NonPositiveLogArgument { value } => {
            domain_error(f!("log-log interpolation needs positive values, found {value}"))
        }
        other => domain_error(f!("log-log interpolation failed: {other}")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FailurePolicy;
    use crate::loader::TableSource;
    use approx::assert_relative_eq;

    /// Two photoelectric rows, everything else a flat 1.0
    #[derive(Debug)]
    struct TwoRows;

    impl TableSource for TwoRows {
        fn load(&self, particle: Particle, element: Element) -> Result<CrossSectionTable> {
            let rows = vec![
                vec![1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0],
                vec![2.0, 1.0, 1.0, 0.3, 1.0, 1.0, 1.0, 1.0],
            ];
            CrossSectionTable::new(particle, element, rows)
        }
    }

    fn lookup() -> CrossSections {
        let store = CrossSectionStore::new(TwoRows, FailurePolicy::Sticky);
        CrossSections::new(Arc::new(store))
    }

    fn photoelectric(xs: &CrossSections, energy: f64) -> Result<f64> {
        let carbon = Element::from_z(6).unwrap();
        xs.atten_coef(energy, Reaction::Photoelectric, Particle::Photon, carbon)
    }

    #[test]
    fn two_row_scenario() {
        let xs = lookup();
        assert_eq!(photoelectric(&xs, 1.0), Ok(0.5));
        assert_eq!(photoelectric(&xs, 2.0), Ok(0.3));
        assert_relative_eq!(
            photoelectric(&xs, 1.5).unwrap(),
            0.370_848_737_602_428,
            max_relative = 1e-9
        );
        assert!(matches!(
            photoelectric(&xs, 0.5),
            Err(Error::RangeError {
                side: RangeSide::Below,
                ..
            })
        ));
        assert!(matches!(
            photoelectric(&xs, 2.5),
            Err(Error::RangeError {
                side: RangeSide::Above,
                ..
            })
        ));
    }

    #[test]
    fn non_finite_energy() {
        let xs = lookup();
        assert!(matches!(
            photoelectric(&xs, f64::NAN),
            Err(Error::DomainError { .. })
        ));
    }

    #[test]
    fn batch_matches_single() {
        let xs = lookup();
        let carbon = Element::from_z(6).unwrap();
        let energies = [1.0, 1.25, 1.5, 2.0];

        let batch = xs
            .atten_coefs(&energies, Reaction::Photoelectric, Particle::Photon, carbon)
            .unwrap();

        for (energy, value) in energies.iter().zip(batch) {
            assert_eq!(photoelectric(&xs, *energy), Ok(value));
        }
    }

    #[test]
    fn batch_reports_first_failure() {
        let xs = lookup();
        let carbon = Element::from_z(6).unwrap();
        let result = xs.atten_coefs(
            &[1.5, 0.5, 3.0],
            Reaction::Photoelectric,
            Particle::Photon,
            carbon,
        );
        assert!(matches!(
            result,
            Err(Error::RangeError {
                side: RangeSide::Below,
                ..
            })
        ));
    }
}
