//! In-memory cross-section tables

// xstools modules
use xstools_format::{f, NumFormat};
use xstools_utils::SliceExt;

// crate modules
use crate::element::Element;
use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::policy::ENERGY_COLUMN;

/// Tabulated coefficients for one particle type and element
///
/// Logically an ordered list of rows `[energy, coef_1, coef_2, ...]` as they
/// appear in the file. The values are kept column-major so that the energy
/// grid and each coefficient column are contiguous slices for searching.
///
/// The energy column is expected to be non-decreasing, with an energy repeated
/// on two consecutive rows at an absorption edge (below-edge value first). The
/// table does not enforce this, it is the responsibility of the data.
///
/// ```rust
/// # use xstools_attenuation::{CrossSectionTable, Element, Particle};
/// let table = CrossSectionTable::new(
///     Particle::Photon,
///     Element::from_z(6).unwrap(),
///     vec![vec![1.0, 0.5], vec![2.0, 0.3]],
/// ).unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.energies(), &[1.0, 2.0]);
/// assert_eq!(table.column(1), Some(&[0.5, 0.3][..]));
/// assert_eq!(table.row(1), Some(vec![2.0, 0.3]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionTable {
    particle: Particle,
    element: Element,
    columns: Vec<Vec<f64>>,
}

impl CrossSectionTable {
    /// Build a table from rows in file order
    ///
    /// Every row must have the same, non-zero, number of values and there must
    /// be at least one row.
    pub fn new(particle: Particle, element: Element, rows: Vec<Vec<f64>>) -> Result<Self> {
        let format_error = |reason: String| Error::DataFormatError {
            particle,
            element,
            line: None,
            column: None,
            reason,
        };

        let n_columns = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            Some(_) => return Err(format_error("rows contain no values".to_string())),
            None => return Err(format_error("table contains no data rows".to_string())),
        };

        let mut columns = vec![Vec::with_capacity(rows.len()); n_columns];
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_columns {
                return Err(format_error(f!(
                    "row {i} has {} values (expected {n_columns})",
                    row.len()
                )));
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        Ok(Self {
            particle,
            element,
            columns,
        })
    }

    /// Particle type the table was read for
    pub fn particle(&self) -> Particle {
        self.particle
    }

    /// Element the table was read for
    pub fn element(&self) -> Element {
        self.element
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.energies().len()
    }

    /// Always false for a constructed table, but expected alongside `len()`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of values on every row, including the energy
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// The energy grid (MeV)
    pub fn energies(&self) -> &[f64] {
        &self.columns[ENERGY_COLUMN]
    }

    /// All values in a column, if it exists
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(|c| c.as_slice())
    }

    /// Single value by row and column index
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.columns.get(column)?.get(row).copied()
    }

    /// Copy of a row in file order, if it exists
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.len() {
            return None;
        }
        Some(self.columns.iter().map(|c| c[index]).collect())
    }

    /// Iterate over copies of every row in file order
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.len()).map(|i| self.columns.iter().map(|c| c[i]).collect())
    }

    /// First and last tabulated energies
    pub fn energy_range(&self) -> (f64, f64) {
        let energies = self.energies();
        // a constructed table always has at least one row
        (energies[0], energies[energies.len() - 1])
    }

    /// Minimum and maximum of a column
    ///
    /// `None` if the column does not exist or contains non-finite values.
    pub fn column_range(&self, index: usize) -> Option<(f64, f64)> {
        let column = self.column(index)?;
        Some((column.try_min().ok()?, column.try_max().ok()?))
    }

    /// Energies of tabulated absorption edges
    ///
    /// These are the energies that appear on two consecutive rows.
    ///
    /// ```rust
    /// # use xstools_attenuation::{CrossSectionTable, Element, Particle};
    /// let rows = vec![
    ///     vec![0.08, 2.0],
    ///     vec![0.088, 1.5],
    ///     vec![0.088, 7.3],
    ///     vec![0.1, 5.3],
    /// ];
    /// let table = CrossSectionTable::new(Particle::Photon, Element::from_z(82).unwrap(), rows).unwrap();
    /// assert_eq!(table.edges(), vec![0.088]);
    /// ```
    pub fn edges(&self) -> Vec<f64> {
        self.energies()
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
            .collect()
    }
}

impl std::fmt::Display for CrossSectionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (emin, emax) = self.energy_range();
        writeln!(f, "Cross section table")?;
        writeln!(f, "  Particle       {}", self.particle)?;
        writeln!(
            f,
            "  Element        {} (Z={}, {} u)",
            self.element,
            self.element.z(),
            self.element.atomic_mass()
        )?;
        writeln!(f, "  Rows           {}", self.len())?;
        writeln!(f, "  Columns        {}", self.n_columns())?;
        writeln!(f, "  Energy range   {} - {} MeV", emin.sci(5, 2), emax.sci(5, 2))?;
        write!(f, "  Edges          {}", self.edges().len())?;
        for index in (ENERGY_COLUMN + 1)..self.n_columns() {
            match self.column_range(index) {
                Some((min, max)) => {
                    write!(f, "\n  Column {index:<7} {} - {}", min.sci(5, 2), max.sci(5, 2))?
                }
                None => write!(f, "\n  Column {index:<7} undefined values")?,
            }
        }
        Ok(())
    }
}
