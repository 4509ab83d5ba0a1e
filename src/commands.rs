use crate::{
    cli,
    notebooks,
    template::{Template, TEMPLATE_PATH},
    version::Version,
};

/// Builds and writes the notebook index page for one release.
pub fn index(args: cli::Cli) -> eyre::Result<()> {
    use eyre::WrapErr;

    let version = Version::new(&args.version);
    let notebooks = notebooks::discover_release(&version, args.sort)?;
    let template = Template::load(TEMPLATE_PATH)?;
    let html = template.render(&version, &notebooks::toi_list(&notebooks));

    let index_page = version.index_page_path();
    std::fs::write(&index_page, html)
        .wrap_err_with(|| format!("failed to write index page {}", index_page.display()))?;
    println!(
        "{} notebooks indexed to {}",
        notebooks.len(),
        index_page.display()
    );
    Ok(())
}
