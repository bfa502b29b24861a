//! Resolves an environment-set document and streams environments as NDJSON.
//!
//! The binary reads a JSON document (file or stdin) holding base
//! capabilities, environment descriptors, and an optional catalog of
//! available environments, resolves the matrix, and prints each concrete
//! environment on its own line. A `--catalog` file overrides the document's
//! embedded catalog.

use anyhow::{Context, Result, anyhow, bail};
use envmatrix::{load_catalog_from_path, load_environment_set, parse_environment_set};
use std::io::Read;
use std::{
    env,
    path::PathBuf,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;

    let set = match &cli.input {
        Some(path) => load_environment_set(path)?,
        None => {
            let mut data = String::new();
            std::io::stdin()
                .read_to_string(&mut data)
                .context("reading environment set from stdin")?;
            if data.trim().is_empty() {
                bail!("No input provided on stdin");
            }
            parse_environment_set(&data)?
        }
    };

    let available = match &cli.catalog {
        Some(path) => Some(load_catalog_from_path(path)?),
        None => set.available.clone(),
    };

    let cwd = env::current_dir().context("resolving current working directory")?;
    let resolved = envmatrix::resolve_environments(
        &set.capabilities,
        &set.environments,
        available.as_deref(),
        || cwd,
    )?;

    for environment in resolved {
        println!("{}", serde_json::to_string(&environment)?);
    }
    Ok(())
}

struct Cli {
    input: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();
        let mut input = None;
        let mut catalog = None;

        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
            match arg_str {
                "--input" => input = Some(next_path("--input", &mut args)?),
                "--catalog" => catalog = Some(next_path("--catalog", &mut args)?),
                "--help" | "-h" => usage(0),
                other => bail!("unknown argument: {other}"),
            }
        }

        Ok(Self { input, catalog })
    }
}

fn next_path(flag: &str, args: &mut env::ArgsOs) -> Result<PathBuf> {
    let value = args
        .next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?;
    let path = PathBuf::from(
        value
            .into_string()
            .map_err(|_| anyhow!("{flag} must be valid UTF-8"))?,
    );
    if path.as_os_str().is_empty() {
        bail!("{flag} must not be empty");
    }
    Ok(path)
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: resolve-matrix [--input PATH] [--catalog PATH]\n\nOptions:\n  --input PATH              Environment set document (defaults to stdin).\n  --catalog PATH            Override the document's catalog of available environments.\n  --help                    Show this help text."
    );
    std::process::exit(code);
}
