//! Integration tests for reading tables from disk

use std::io::Write;
use std::path::Path;

use rstest::{fixture, rstest};
use tempfile::TempDir;
use xstools_attenuation::{
    resource_name, CrossSectionTable, Element, Error, Particle, TableLoader, TableSource,
};

const HEADER: &str = "Photon cross sections (cm2/g)\nEnergy,Coh,Incoh,Photo,PairN,PairE,Tot,TotNoCoh\n";

#[fixture]
fn bundled() -> TableLoader {
    TableLoader::new("./data")
}

/// Scratch data directory with a photon sub-directory ready to write into
#[fixture]
fn scratch() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("photon")).unwrap();
    dir
}

fn write_table(dir: &Path, element: Element, content: &str) {
    write_raw(dir, element, content.as_bytes());
}

fn write_raw(dir: &Path, element: Element, content: &[u8]) {
    let name = resource_name(Particle::Photon, element).unwrap();
    let mut file = std::fs::File::create(dir.join("photon").join(name)).unwrap();
    file.write_all(content).unwrap();
}

fn carbon() -> Element {
    Element::from_z(6).unwrap()
}

fn load(dir: &Path) -> Result<CrossSectionTable, Error> {
    TableLoader::new(dir).load(Particle::Photon, carbon())
}

#[rstest]
#[case(6, 46, 1.0e-3)] // carbon
#[case(26, 48, 1.0e-3)] // iron
#[case(82, 48, 1.0e-2)] // lead
fn bundled_tables(
    bundled: TableLoader,
    #[case] z: u8,
    #[case] rows: usize,
    #[case] first_energy: f64,
) {
    let element = Element::from_z(z).unwrap();
    let table = bundled.load(Particle::Photon, element).unwrap();

    assert_eq!(table.particle(), Particle::Photon);
    assert_eq!(table.element(), element);
    assert_eq!(table.len(), rows);
    assert_eq!(table.n_columns(), 8);
    assert_eq!(table.energy_range(), (first_energy, 20.0));

    // non-decreasing energy grid
    assert!(table.energies().windows(2).all(|w| w[0] <= w[1]));
}

#[rstest]
fn bundled_edges(bundled: TableLoader) {
    let lead = Element::from_z(82).unwrap();
    let table = bundled.load(Particle::Photon, lead).unwrap();
    assert_eq!(table.edges(), vec![1.3035e-2, 1.52e-2, 1.5861e-2, 8.8005e-2]);

    let iron = Element::from_z(26).unwrap();
    let table = bundled.load(Particle::Photon, iron).unwrap();
    assert_eq!(table.edges(), vec![7.112e-3]);
}

#[rstest]
#[case(1, "element_001_H.txt")]
#[case(6, "element_006_C.txt")]
#[case(26, "element_026_Fe.txt")]
#[case(100, "element_100_Fm.txt")]
fn resource_names(#[case] z: u8, #[case] expected: &str) {
    let element = Element::from_z(z).unwrap();
    assert_eq!(resource_name(Particle::Photon, element).unwrap(), expected);
}

#[rstest]
fn resource_paths(bundled: TableLoader) {
    let path = bundled.resource_path(Particle::Photon, carbon()).unwrap();
    assert_eq!(path, Path::new("./data/photon/element_006_C.txt"));
    assert!(path.exists());
}

#[rstest]
fn missing_file(scratch: TempDir) {
    match load(scratch.path()) {
        Err(Error::ResourceNotFound { path, .. }) => {
            assert!(path.ends_with("photon/element_006_C.txt"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[rstest]
#[case(Particle::Neutron)]
#[case(Particle::Proton)]
fn unconfigured_particles(bundled: TableLoader, #[case] particle: Particle) {
    let result = bundled.load(particle, carbon());
    assert!(matches!(result, Err(Error::ResourceNotFound { .. })));
}

#[rstest]
fn trailing_delimiters_and_blank_lines(scratch: TempDir) {
    let content = lines(&[
        HEADER,
        "1.0,1,1,0.5,0,0,2.5,1.5,\n",
        "\n",
        "   \n",
        "2.0, 1, 1, 0.3, 0, 0, 2.3, 1.3\n",
        "\n",
    ]);
    write_table(scratch.path(), carbon(), &content);

    let table = load(scratch.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.column(3), Some(&[0.5, 0.3][..]));
}

#[rstest]
#[case(b"Photon cross sections (cm\xb2/g)\nEnergy,Coh,Incoh,Photo,PairN,PairE,Tot,TotNoCoh\n")] // latin-1 unit
#[case(b"\xff\xfe\x00\x01\nnot, numbers, at, all\n")] // binary junk
#[case(b"Photon cross sections\r\nEnergy\r\n")] // windows line endings
fn headers_are_skipped_unread(scratch: TempDir, #[case] header: &[u8]) {
    let mut content = header.to_vec();
    content.extend_from_slice(b"1.0,1,1,0.5,1,1,1,1\n2.0,1,1,0.3,1,1,1,1\n");
    write_raw(scratch.path(), carbon(), &content);

    let table = load(scratch.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.column(3), Some(&[0.5, 0.3][..]));
}

#[rstest]
fn data_rows_must_be_text(scratch: TempDir) {
    let content = lines(&[HEADER, "1.0,1,1,0.5,1,1,1,1\n"]);
    let mut content = content.into_bytes();
    content.extend_from_slice(b"2.0,1,1,0.\xb3,1,1,1,1\n");
    write_raw(scratch.path(), carbon(), &content);

    match load(scratch.path()) {
        Err(Error::DataFormatError { line, .. }) => assert_eq!(line, Some(4)),
        other => panic!("unexpected {other:?}"),
    }
}

#[rstest]
fn custom_delimiter(scratch: TempDir) {
    let content = lines(&[HEADER, "1.0|1|1|0.5|0|0|2.5|1.5\n"]);
    write_table(scratch.path(), carbon(), &content);

    let table = TableLoader::new(scratch.path())
        .with_delimiter('|')
        .load(Particle::Photon, carbon())
        .unwrap();
    assert_eq!(table.row(0), Some(vec![1.0, 1.0, 1.0, 0.5, 0.0, 0.0, 2.5, 1.5]));

    // the default delimiter cannot split the row
    assert!(matches!(
        load(scratch.path()),
        Err(Error::DataFormatError { .. })
    ));
}

#[rstest]
#[case("1.0,1,1,0.5,0,0,2.5,1.5\n2.0,1,1,abc,0,0,2.5,1.5\n", Some(4), Some(4))] // bad token
#[case("1.0,1,1,0.5,0,0,2.5,1.5\n2.0,1,1,,0,0,2.5,1.5\n", Some(4), Some(4))] // empty token
#[case("1.0,1,1,NaN,0,0,2.5,1.5\n", Some(3), Some(4))] // non-finite
#[case("1.0,1,1,0.5,0,0,2.5\n", Some(3), None)] // short row
#[case("1.0,1,1,0.5,0,0,2.5,1.5,9.9\n", Some(3), None)] // long row
#[case("", None, None)] // no data rows
fn malformed_tables(
    scratch: TempDir,
    #[case] body: &str,
    #[case] expected_line: Option<usize>,
    #[case] expected_column: Option<usize>,
) {
    write_table(scratch.path(), carbon(), &lines(&[HEADER, body]));

    match load(scratch.path()) {
        Err(Error::DataFormatError { line, column, .. }) => {
            assert_eq!(line, expected_line);
            assert_eq!(column, expected_column);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[rstest]
fn errors_name_the_table(scratch: TempDir) {
    write_table(scratch.path(), carbon(), &lines(&[HEADER, "1.0,x,1,1,1,1,1,1\n"]));
    let message = load(scratch.path()).unwrap_err().to_string();
    assert!(message.contains("photon"));
    assert!(message.contains("C"));
    assert!(message.contains("line 3"));
    assert!(message.contains("column 2"));
}

fn lines(parts: &[&str]) -> String {
    parts.concat()
}
