use crate::version::Version;
use itertools::Itertools;
use std::{
    borrow::Cow,
    num::ParseIntError,
    path::{Path, PathBuf},
};

/// Numeric "TESS Object of Interest" identifier taken from a notebook
/// filename.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Toi(pub u32);

impl Toi {
    /// Extracts the id from a notebook path: the segment after the last
    /// `-` of the file stem, so `notebooks/v1/toi-101.ipynb` gives 101.
    pub fn from_notebook_path(path: &Path) -> Result<Toi, ScanError> {
        let stem = match path.file_stem() {
            Some(stem) => stem.to_string_lossy(),
            None => Cow::Borrowed(""),
        };
        let digits = stem
            .rsplit_once('-')
            .map(|(_, suffix)| suffix)
            .unwrap_or(&stem);
        digits
            .parse()
            .map(Toi)
            .map_err(|err| ScanError::InvalidToi(path.to_owned(), err))
    }

    pub fn list_item(&self) -> String {
        format!(r#"<li><a href="toi-{0}.html">TOI {0}</a></li>"#, self.0)
    }
}

/// A matched notebook file and the id parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    pub path: PathBuf,
    pub toi: Toi,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Plain filename sort, the historical page order; ids that aren't
    /// zero-padded come out in string order (toi-10 before toi-2)
    Lexicographic,
    /// Ascending by TOI id
    Numeric,
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("invalid notebook pattern '{0}'")]
    InvalidPattern(String, #[source] glob::PatternError),
    #[error("i/o error while matching notebook files")]
    Walk(#[from] glob::GlobError),
    #[error("no numeric TOI suffix in notebook filename {}", .0.display())]
    InvalidToi(PathBuf, #[source] ParseIntError),
}

/// Finds every notebook matching `pattern` and orders the result. Zero
/// matches yield an empty list, never an error; a single malformed
/// filename fails the whole scan.
pub fn discover(pattern: &str, order: SortOrder) -> Result<Vec<Notebook>, ScanError> {
    let mut paths = glob::glob(pattern)
        .map_err(|err| ScanError::InvalidPattern(pattern.to_owned(), err))?
        .collect::<Result<Vec<_>, glob::GlobError>>()?;
    paths.sort();
    tracing::debug!("{} notebook files match {}", paths.len(), pattern);

    let mut notebooks = paths
        .into_iter()
        .map(|path| {
            let toi = Toi::from_notebook_path(&path)?;
            Ok(Notebook { path, toi })
        })
        .collect::<Result<Vec<_>, ScanError>>()?;
    if order == SortOrder::Numeric {
        // stable sort, so duplicate ids keep their filename order
        notebooks.sort_by_key(|notebook| notebook.toi);
    }
    Ok(notebooks)
}

/// Convenience form of [discover] for one release, matching relative to
/// the working directory.
pub fn discover_release(version: &Version, order: SortOrder) -> Result<Vec<Notebook>, ScanError> {
    discover(&version.notebook_pattern(), order)
}

/// Joined `<li>` block for the index template, one line per notebook; the
/// empty list renders as the empty string.
pub fn toi_list(notebooks: &[Notebook]) -> String {
    notebooks
        .iter()
        .map(|notebook| notebook.toi.list_item())
        .join("\n")
}
