//! `configdocs` - CLI for generating settings reference docs
//!
//! Resolves options, loads the settings catalog and writes the rendered
//! AsciiDoc to stdout or to the given output file.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;
use tracing::error;

use configdocs::cli::Cli;
use configdocs::generator::{AsciiDocGenerator, Catalog};
use configdocs::{init_logging, print_usage, resolve, run, Config, Console};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?.with_catalog(cli.catalog.clone());

    let mut console = Console::stdout();
    print_usage(&mut console);

    let options = cli.option_map();
    let resolved = resolve(&options, cli.out_file.clone(), &mut console);

    let result = Catalog::load(config.catalog_path())
        .map(AsciiDocGenerator::new)
        .and_then(|generator| run(&resolved, &generator, &mut console));

    if let Err(e) = result {
        error!(error = %e, catalog = %config.catalog_path().display(), "Failed to generate settings docs");
        return Err(e.into());
    }
    Ok(())
}
