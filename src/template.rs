use crate::version::Version;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Literal token replaced with the release version.
pub const VERSION_TOKEN: &str = "{{{VERSION}}}";
/// Literal token replaced with the generated `<li>` block.
pub const TOILIST_TOKEN: &str = "{{{TOILIST}}}";

/// Index page template, relative to the working directory.
pub const TEMPLATE_PATH: &str = "../docs/notebooks/index.html.tpl";

#[derive(Debug, thiserror::Error)]
#[error("failed to read template {}", .0.display())]
pub struct TemplateLoadError(PathBuf, #[source] io::Error);

/// Static HTML page text carrying the two placeholder tokens. The tokens
/// are plain substrings, not a template language; everything around them
/// passes through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn new(text: impl Into<String>) -> Template {
        Template(text.into())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Template, TemplateLoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|err| TemplateLoadError(path.to_owned(), err))?;
        Ok(Template(text))
    }

    /// Replaces every occurrence of both tokens. The tokens are textually
    /// disjoint, so the replacement order does not matter.
    pub fn render(&self, version: &Version, toi_list: &str) -> String {
        self.0
            .replace(VERSION_TOKEN, version.as_str())
            .replace(TOILIST_TOKEN, toi_list)
    }
}
