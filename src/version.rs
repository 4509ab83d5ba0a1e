use std::{fmt, path::PathBuf};

/// Release label the index page is generated for. Surrounding whitespace
/// from the command line is trimmed; nothing else is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    pub fn new(label: &str) -> Version {
        Version(label.trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Glob pattern selecting this release's notebook files, relative to
    /// the working directory.
    pub fn notebook_pattern(&self) -> String {
        format!("notebooks/{}/*.ipynb", self.0)
    }

    /// Where the rendered index page goes, relative to the working
    /// directory. The release directory must already exist.
    pub fn index_page_path(&self) -> PathBuf {
        PathBuf::from("../docs/notebooks")
            .join(&self.0)
            .join("index.html")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
