use crate::notebooks::SortOrder;

/// Builds the static HTML index page for a release's TOI notebooks.
///
/// Scans notebooks/<VERSION>/*.ipynb under the working directory and
/// writes ../docs/notebooks/<VERSION>/index.html from the page template.
#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// The release version whose notebooks get indexed
    #[clap(value_name = "VERSION")]
    pub version: String,

    /// Order of the generated list entries
    #[clap(long, value_enum, default_value = "lexicographic")]
    pub sort: SortOrder,
}
