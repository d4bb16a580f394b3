//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Point count used by `samples` when none is given.
const DEFAULT_SAMPLE_POINTS: u64 = 256;

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Run the criterion benchmarks of the core library.
    Bench,
    /// Write point listings for every curve into `target/samples/`.
    Samples {
        /// Number of points per curve (must be a power of 4).
        #[arg(default_value_t = DEFAULT_SAMPLE_POINTS)]
        npoints: u64,
    },
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
    /// `target/samples/` output directory.
    samples: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();

        Ok(Self {
            samples: root.join("target").join("samples"),
            root,
        })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Bench => bench(&paths),
        CommandName::Samples { npoints } => samples(&paths, npoints),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests using cargo nextest, then the doc tests nextest skips.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    cmd!(sh, "cargo test --doc --all").run()?;
    Ok(())
}

/// Run the core library benchmarks.
fn bench(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo bench -p spacefill").run()?;
    Ok(())
}

/// Generate labelled point listings for each curve with the release CLI.
fn samples(paths: &RepoPaths, npoints: u64) -> Result<()> {
    let sh = repo_shell(paths)?;
    sh.create_dir(&paths.samples)?;

    let npoints = npoints.to_string();
    for curve in ["hilbert", "moore"] {
        let out = sample_path(&paths.samples, curve, &npoints);
        cmd!(
            sh,
            "cargo run -q --release -p spacefill-cli -- {npoints} -t {curve} -o {out}"
        )
        .run()?;
        println!("wrote {}", out.display());
    }
    Ok(())
}

/// Output path for one sample listing.
fn sample_path(dir: &Path, curve: &str, npoints: &str) -> PathBuf {
    dir.join(format!("{curve}-{npoints}.txt"))
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}
