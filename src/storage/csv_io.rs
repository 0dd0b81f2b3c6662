//! Cohort files: one header row with the canonical column names, then one
//! row of five decimal values per observation.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::error::CohortErr;
use crate::observation::types::{Cohort, CohortPair, Observation, Variable};
use crate::storage::error::StorageErr;
use crate::storage::paths::CohortPaths;

fn header() -> [&'static str; 5] {
    Variable::ALL.map(Variable::column_name)
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StorageErr + '_ {
    move |source| StorageErr::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_err(path: &Path) -> impl FnOnce(csv::Error) -> StorageErr + '_ {
    move |source| StorageErr::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

fn write_rows(path: &Path, cohort: &Cohort) -> Result<(), StorageErr> {
    let file = File::create(path).map_err(io_err(path))?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record(header()).map_err(csv_err(path))?;
    for observation in cohort.observations() {
        wtr.serialize(observation).map_err(csv_err(path))?;
    }
    let file = wtr
        .into_inner()
        .map_err(|e| io_err(path)(e.into_error()))?;
    file.sync_all().map_err(io_err(path))
}

/// Writes a cohort to `path`. Rows go to a sibling staging file that is
/// renamed into place once fully written, so a failed write never leaves a
/// truncated cohort behind.
pub fn write_cohort(path: &Path, cohort: &Cohort) -> Result<(), CohortErr> {
    let staging = staging_path(path);
    if let Err(e) = write_rows(&staging, cohort) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    fs::rename(&staging, path).map_err(io_err(path))?;
    tracing::debug!(path = %path.display(), rows = cohort.len(), "wrote cohort");
    Ok(())
}

/// Reads a cohort written by [`write_cohort`]. Fields are taken in the
/// canonical column order; any malformed row fails the whole load.
pub fn load_cohort(path: &Path) -> Result<Cohort, CohortErr> {
    let file = File::open(path).map_err(io_err(path))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let found = rdr.headers().map_err(csv_err(path))?.clone();
    if found.is_empty() {
        return Err(StorageErr::EmptyFile(path.to_path_buf()).into());
    }
    let expected = header();
    if found.iter().ne(expected.iter().copied()) {
        return Err(StorageErr::HeaderMismatch {
            path: path.to_path_buf(),
            expected: expected.join(","),
            found: found.iter().collect::<Vec<_>>().join(","),
        }
        .into());
    }

    let mut observations = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(csv_err(path))?;
        let line = record.position().map_or(i as u64 + 2, |p| p.line());
        if record.len() != Variable::ALL.len() {
            return Err(StorageErr::FieldCount {
                line,
                expected: Variable::ALL.len(),
                found: record.len(),
            }
            .into());
        }
        let mut values = [0.0; 5];
        for (variable, field) in Variable::ALL.iter().zip(record.iter()) {
            let value = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| StorageErr::InvalidValue {
                    line,
                    column: variable.column_name(),
                    value: field.to_string(),
                })?;
            values[variable.index()] = value;
        }
        observations.push(Observation::from_values(values));
    }

    if observations.is_empty() {
        return Err(StorageErr::NoObservations(path.to_path_buf()).into());
    }
    tracing::debug!(path = %path.display(), rows = observations.len(), "loaded cohort");
    Ok(Cohort::new(observations))
}

pub fn write_cohort_pair(paths: &CohortPaths, pair: &CohortPair) -> Result<(), CohortErr> {
    write_cohort(&paths.week_1, &pair.week_1)?;
    write_cohort(&paths.week_2, &pair.week_2)
}

pub fn load_cohort_pair(paths: &CohortPaths) -> Result<CohortPair, CohortErr> {
    Ok(CohortPair {
        week_1: load_cohort(&paths.week_1)?,
        week_2: load_cohort(&paths.week_2)?,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_raw(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).expect("failed to create fixture");
        file.write_all(contents.as_bytes()).expect("failed to write fixture");
        path
    }

    #[test]
    fn writes_canonical_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week_1.csv");
        let cohort = Cohort::new(vec![Observation::from_values([1., 2., 3., 4., 5.])]);
        write_cohort(&path, &cohort).expect("failed to write cohort");
        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("numHelped,crowdSize,sessionsCompleted,difficulty,comfort")
        );
        assert_eq!(lines.next(), Some("1.0,2.0,3.0,4.0,5.0"));
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn round_trip_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cohort.csv");
        let cohort = Cohort::new(vec![
            Observation::from_values([0., 1., 2., 3., 4.]),
            Observation::from_values([4.5, 0.1, 2.25, 5., 0.]),
            Observation::from_values([1., 1., 1., 1., 1.]),
        ]);
        write_cohort(&path, &cohort).unwrap();
        assert_eq!(load_cohort(&path).unwrap(), cohort);
    }

    #[test]
    fn accepts_spaced_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(
            dir.path(),
            "spaced.csv",
            "numHelped, crowdSize, sessionsCompleted, difficulty, comfort\n1, 2, 3, 4, 5\n",
        );
        let cohort = load_cohort(&path).unwrap();
        assert_eq!(cohort.observations()[0].values(), [1., 2., 3., 4., 5.]);
    }

    #[test]
    fn empty_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(dir.path(), "empty.csv", "");
        let res = load_cohort(&path);
        assert!(matches!(res, Err(CohortErr::Storage(StorageErr::EmptyFile(_)))));
    }

    #[test]
    fn header_only_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(
            dir.path(),
            "header.csv",
            "numHelped,crowdSize,sessionsCompleted,difficulty,comfort\n",
        );
        let res = load_cohort(&path);
        assert!(matches!(res, Err(CohortErr::Storage(StorageErr::NoObservations(_)))));
    }

    #[test]
    fn reordered_header_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(
            dir.path(),
            "reordered.csv",
            "comfort,difficulty,sessionsCompleted,crowdSize,numHelped\n1,2,3,4,5\n",
        );
        let res = load_cohort(&path);
        assert!(matches!(res, Err(CohortErr::Storage(StorageErr::HeaderMismatch { .. }))));
    }

    #[test]
    fn short_row_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(
            dir.path(),
            "short.csv",
            "numHelped,crowdSize,sessionsCompleted,difficulty,comfort\n1,2,3,4,5\n1,2,3\n",
        );
        if let Err(e) = load_cohort(&path) {
            assert_eq!(
                String::from("while reading or writing cohort: line 3: expected 5 fields, got 3"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn non_numeric_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_raw(
            dir.path(),
            "text.csv",
            "numHelped,crowdSize,sessionsCompleted,difficulty,comfort\n1,2,three,4,5\n",
        );
        if let Err(e) = load_cohort(&path) {
            assert_eq!(
                String::from(
                    "while reading or writing cohort: line 2: value \"three\" in column \
                     sessionsCompleted is not a finite number"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn missing_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let res = load_cohort(&dir.path().join("absent.csv"));
        assert!(matches!(res, Err(CohortErr::Storage(StorageErr::Io { .. }))));
    }

    #[test]
    fn pair_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CohortPaths::in_dir(dir.path(), "no_correlation");
        let pair = CohortPair {
            week_1: Cohort::new(vec![Observation::from_values([1., 2., 3., 4., 5.])]),
            week_2: Cohort::new(vec![Observation::from_values([5., 4., 3., 2., 1.])]),
        };
        write_cohort_pair(&paths, &pair).unwrap();
        assert_eq!(load_cohort_pair(&paths).unwrap(), pair);
    }
}
