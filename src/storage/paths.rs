use std::path::{Path, PathBuf};

/// Locations of the two week files of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortPaths {
    pub week_1: PathBuf,
    pub week_2: PathBuf,
}

impl CohortPaths {
    pub fn new(week_1: impl Into<PathBuf>, week_2: impl Into<PathBuf>) -> Self {
        Self {
            week_1: week_1.into(),
            week_2: week_2.into(),
        }
    }

    /// `<dir>/<stem>_week_1.csv` and `<dir>/<stem>_week_2.csv`.
    pub fn in_dir(dir: impl AsRef<Path>, stem: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            week_1: dir.join(format!("{stem}_week_1.csv")),
            week_2: dir.join(format!("{stem}_week_2.csv")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_suffixes() {
        let paths = CohortPaths::in_dir("sample_data/normal", "neg_correlation");
        assert_eq!(
            paths.week_1,
            PathBuf::from("sample_data/normal/neg_correlation_week_1.csv")
        );
        assert_eq!(
            paths.week_2,
            PathBuf::from("sample_data/normal/neg_correlation_week_2.csv")
        );
    }
}
