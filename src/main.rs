//! Skillscape viewer binary.
//!
//! ```text
//! skillscape [--catalog <catalog.toml>] [--options <preset.toml>] [--list]
//! ```
//!
//! `--list` prints the flat fallback view of the catalog and exits.

use std::{path::PathBuf, sync::Arc};

use skillscape::{
    catalog::fallback::FallbackView, Catalog, Options, SkillscapeError,
    Viewer,
};

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    catalog: Option<PathBuf>,
    options: Option<PathBuf>,
    list: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--catalog" => {
                args.catalog =
                    Some(it.next().ok_or("--catalog needs a path")?.into());
            }
            "--options" => {
                args.options =
                    Some(it.next().ok_or("--options needs a path")?.into());
            }
            "--list" => args.list = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(args)
}

#[allow(clippy::print_stdout)]
fn run(args: &Args) -> Result<(), SkillscapeError> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::reference()?,
    };

    if args.list {
        println!("{}", FallbackView::from_catalog(&catalog));
        return Ok(());
    }

    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    Viewer::builder()
        .with_catalog(Arc::new(catalog))
        .with_options(options)
        .build()
        .run()
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: skillscape [--catalog <file>] [--options <file>] [--list]"
            );
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
