use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pkg_version_probe::{SearchPath, VersionReport, VersionResolver, config, logging};

#[derive(Debug, Parser)]
#[command(name = "pkg-version-probe")]
#[command(version, about = "Report the version of the package hosting a directory")]
struct Cli {
    /// Entry directory; defaults to the directory of this executable
    entry_dir: Option<PathBuf>,

    /// Explicit candidate `node_modules` directory, in search order (repeatable)
    #[arg(long = "path", value_name = "DIR")]
    paths: Vec<String>,

    /// Program name shown in the report line
    #[arg(long, default_value = "pkg-version-probe")]
    name: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also write logs to PATH (defaults to the data directory)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,
}

impl Cli {
    /// Explicit `--path` candidates win over the entry directory, which wins
    /// over the executable's own location.
    fn search_path(&self) -> anyhow::Result<SearchPath> {
        if !self.paths.is_empty() {
            return Ok(SearchPath::new(self.paths.iter().cloned()));
        }

        match &self.entry_dir {
            Some(dir) => SearchPath::from_entry_dir(dir)
                .with_context(|| format!("Failed to resolve entry directory {}", dir.display())),
            None => Ok(SearchPath::from_current_exe().unwrap_or_default()),
        }
    }

    fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_ref()
            .map(|path| path.clone().unwrap_or_else(config::log_path))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_path().as_deref())?;

    let search_path = cli.search_path()?;
    let resolution = VersionResolver::new()
        .locate(&search_path)
        .context("Failed to resolve host package version")?;
    let report = VersionReport::from_resolution(cli.name, resolution);

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
