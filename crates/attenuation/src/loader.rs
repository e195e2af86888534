//! Reading tables from disk

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// xstools modules
use xstools_format::{f, zero_pad};

// external crates
use log::{debug, trace};

// crate modules
use crate::config::Config;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::parsers;
use crate::particle::Particle;
use crate::policy::{self, Layout};
use crate::table::CrossSectionTable;

/// Anything that can produce a table for a particle type and element
///
/// [TableLoader] is the implementation used in practice. The cache only ever
/// sees this trait, so tables can come from anywhere, e.g. memory in tests.
pub trait TableSource: Send + Sync + std::fmt::Debug {
    /// Produce the table, or the reason it could not be produced
    fn load(&self, particle: Particle, element: Element) -> Result<CrossSectionTable>;
}

/// File name of the table for an element
///
/// Names are of the form `element_<ZZZ>_<Symbol>.txt` with the atomic number
/// zero-padded to three digits.
///
/// ```rust
/// # use xstools_attenuation::{resource_name, Element, Particle};
/// let lead = Element::from_z(82).unwrap();
/// assert_eq!(
///     resource_name(Particle::Photon, lead).unwrap(),
///     "element_082_Pb.txt"
/// );
/// ```
pub fn resource_name(particle: Particle, element: Element) -> Result<String> {
    let z = zero_pad(element.z() as u32, 3).ok_or_else(|| Error::DataFormatError {
        particle,
        element,
        line: None,
        column: None,
        reason: f!("atomic number {} does not fit in 3 digits", element.z()),
    })?;
    Ok(f!("element_{z}_{}.txt", element.symbol()))
}

/// Reads delimited text tables from a data directory
///
/// Tables are found at `<data_dir>/<particle>/element_<ZZZ>_<Symbol>.txt`,
/// where the particle directory, the number of header lines, and the number
/// of values per row come from the particle [Layout].
///
/// Header lines are skipped without being decoded, so they may contain
/// anything. Blank lines are skipped, and a single trailing delimiter on a row
/// is tolerated. Anything else that is not a finite number is an error reported
/// with its line and column.
///
/// ```rust, no_run
/// # use xstools_attenuation::{Element, Particle, TableLoader, TableSource};
/// let loader = TableLoader::new("./data");
/// let table = loader.load(Particle::Photon, Element::from_z(82).unwrap()).unwrap();
/// println!("{table}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableLoader {
    data_dir: PathBuf,
    delimiter: char,
}

impl TableLoader {
    /// Comma delimited tables under `data_dir`
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            delimiter: ',',
        }
    }

    /// Loader using the directory and delimiter of a [Config]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_dir).with_delimiter(config.delimiter)
    }

    /// Change the row delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Root data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Row delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Full path to the table for a particle type and element
    ///
    /// ```rust
    /// # use std::path::Path;
    /// # use xstools_attenuation::{Element, Particle, TableLoader};
    /// let loader = TableLoader::new("/opt/xs");
    /// let carbon = Element::from_z(6).unwrap();
    /// assert_eq!(
    ///     loader.resource_path(Particle::Photon, carbon).unwrap(),
    ///     Path::new("/opt/xs/photon/element_006_C.txt")
    /// );
    /// ```
    pub fn resource_path(&self, particle: Particle, element: Element) -> Result<PathBuf> {
        let layout = self.layout(particle, element)?;
        Ok(self
            .data_dir
            .join(layout.directory)
            .join(resource_name(particle, element)?))
    }

    fn layout(&self, particle: Particle, element: Element) -> Result<&'static Layout> {
        policy::layout(particle).ok_or_else(|| Error::ResourceNotFound {
            particle,
            element,
            path: self.data_dir.clone(),
            reason: f!("no table layout is configured for {particle}"),
        })
    }

    fn read_rows<R: BufRead>(
        &self,
        reader: R,
        layout: &Layout,
        particle: Particle,
        element: Element,
    ) -> Result<Vec<Vec<f64>>> {
        let format_error = |line: usize, column: Option<usize>, reason: String| {
            Error::DataFormatError {
                particle,
                element,
                line: Some(line),
                column,
                reason,
            }
        };

        let mut rows = Vec::new();
        for (i, bytes) in reader.split(b'\n').enumerate() {
            let number = i + 1;
            let bytes = bytes.map_err(|e| format_error(number, None, e.to_string()))?;

            // headers are free text in any encoding, only data rows are decoded
            if number <= layout.header_lines {
                continue;
            }

            let line = String::from_utf8(bytes)
                .map_err(|e| format_error(number, None, f!("row is not valid UTF-8: {e}")))?;
            if line.trim().is_empty() {
                continue;
            }

            let values = parsers::row(&line, self.delimiter).map_err(|e| {
                format_error(
                    number,
                    Some(e.column),
                    f!("unable to parse \"{}\" as a number", e.token),
                )
            })?;

            if values.len() != layout.columns {
                return Err(format_error(
                    number,
                    None,
                    f!("expected {} values, found {}", layout.columns, values.len()),
                ));
            }

            trace!("{particle} {element} line {number}: {values:?}");
            rows.push(values);
        }

        Ok(rows)
    }
}

impl TableSource for TableLoader {
    fn load(&self, particle: Particle, element: Element) -> Result<CrossSectionTable> {
        let layout = self.layout(particle, element)?;
        let path = self.resource_path(particle, element)?;
        debug!("Reading {particle} table for {element} from {path:?}");

        let file = File::open(&path).map_err(|e| Error::ResourceNotFound {
            particle,
            element,
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let rows = self.read_rows(BufReader::new(file), layout, particle, element)?;
        let table = CrossSectionTable::new(particle, element, rows)?;
        debug!("Read {} rows from {path:?}", table.len());
        Ok(table)
    }
}
