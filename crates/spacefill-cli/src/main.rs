//! Command‑line entry point for the `spacefill` tool.
//!
//! Generates the points of a Hilbert or Moore curve and either prints them or
//! plots them through gnuplot.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::{self, ExitStatus, Stdio},
};

use anyhow::{Context, Result};
use clap::Parser;
use spacefill::{
    Curve,
    placement::{Fit, Placement, order_for_points},
    point::Point,
    registry,
};
use tracing::{Level, debug, info};
use tracing_subscriber::fmt::SubscriberBuilder;

/// Plotting through an external gnuplot process.
mod gnuplot;
/// Plain-text point output.
mod output;

use crate::gnuplot::{Plotter, Terminal};

/// Validate that a point count is a power of 4.
fn parse_npoints(s: &str) -> Result<u64, String> {
    let count = s
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("invalid point count '{s}': expected a non-negative integer"))?;
    order_for_points(count).map_err(|_| "number of points is not a power of 4.".to_string())?;
    Ok(count)
}

/// Long help for `--type`: every registered curve with its description.
fn curve_help() -> String {
    let mut help = String::from("Generate a curve of the specified type:");
    for entry in registry::REGISTRY {
        help.push_str(&format!("\n  {}: {}", entry.key, entry.curve.info()));
    }
    help
}

#[derive(Parser, Debug)]
#[command(name = "spacefill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Moore or Hilbert curves.")]
/// Top‑level CLI options.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    #[arg(
        value_name = "NPOINTS",
        value_parser = parse_npoints,
        help = "Desired number of points (must be power of 4)"
    )]
    /// Number of points to generate.
    npoints: u64,

    #[arg(
        short = 'o',
        long = "output",
        help = "Output file (defaults to stdout)"
    )]
    /// Optional output file.
    output: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value = "hilbert",
        help = &format!("Generate a curve of the specified type (options: {})", registry::CURVE_NAMES.join(", ")),
        long_help = curve_help()
    )]
    /// Curve kind.
    curve: Curve,

    #[arg(
        short = 'g',
        long = "gnuplot",
        value_name = "TERM",
        num_args = 0..=1,
        default_missing_value = gnuplot::DUMB_TERMINAL,
        help = "Display the curve using gnuplot; TERM is the gnuplot terminal type \
                (defaults to 'dumb', ASCII art)"
    )]
    /// Gnuplot terminal, when plotting.
    gnuplot: Option<String>,

    #[arg(long = "no-labels", help = "Do not print the point labels")]
    /// Suppress point labels.
    no_labels: bool,

    #[arg(
        long = "fit",
        num_args = 4,
        value_names = ["XI", "YI", "XJ", "YJ"],
        allow_negative_numbers = true,
        help = "Orient/size the curve with the given X and Y vectors. The default is a \
                square giving all points non-negative coordinates at distance 1 from \
                each other; use N 0 0 M to fit an NxM rectangle"
    )]
    /// Explicit I and J vectors.
    fit: Option<Vec<f64>>,

    #[arg(
        long = "offset",
        num_args = 2,
        value_names = ["X0", "Y0"],
        allow_negative_numbers = true,
        help = "Translate the curve to the given position. The default puts a corner \
                of the curve at (0,0)"
    )]
    /// Explicit origin.
    offset: Option<Vec<f64>>,
}

impl Cli {
    /// Explicit fit, if one was given.
    fn fit(&self) -> Option<Fit> {
        match self.fit.as_deref() {
            Some(&[xi, yi, xj, yj]) => Some(Fit::from_components([xi, yi, xj, yj])),
            _ => None,
        }
    }

    /// Explicit offset, if one was given.
    fn offset(&self) -> Option<Point> {
        match self.offset.as_deref() {
            Some(&[x, y]) => Some(Point::new(x, y)),
            _ => None,
        }
    }
}

/// Install the stderr log subscriber for the requested verbosity.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Print the points as text to `output` or stdout.
fn handle_text(
    curve: Curve,
    placement: &Placement,
    labels: bool,
    output: Option<&Path>,
) -> Result<()> {
    let points = curve.points(placement.order, placement.frame);
    let written = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            output::write_points(&mut BufWriter::new(file), points, labels)
        }
        None => output::write_points(&mut io::stdout().lock(), points, labels),
    };
    match written {
        Ok(n) => {
            debug!(points = n, "points written");
            Ok(())
        }
        // A closed pipe (e.g. `| head`) just ends the output.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("failed to write points"),
    }
}

/// Plot the points through gnuplot and return its exit status.
fn handle_gnuplot(
    curve: Curve,
    placement: &Placement,
    labels: bool,
    term: &str,
    output: Option<&Path>,
) -> Result<ExitStatus> {
    // Both data blocks walk the same points, so materialize them once.
    let points = curve.collect_points(placement.order, placement.frame);
    let stdout = match output {
        Some(path) => Stdio::from(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Stdio::inherit(),
    };
    let terminal = Terminal::from_name(term, gnuplot::console_size());
    let plotter = Plotter::from_env();
    debug!(command = plotter.command(), ?terminal, "plotting");
    plotter.plot(&terminal, &points, labels, stdout)
}

/// Run the CLI, returning the process exit code.
fn run(cli: &Cli) -> Result<i32> {
    let placement = Placement::resolve(cli.npoints, cli.fit(), cli.offset())?;
    info!(
        curve = %cli.curve,
        order = placement.order,
        origin = ?placement.frame.origin,
        i = ?placement.frame.i,
        j = ?placement.frame.j,
        "resolved placement"
    );

    let labels = !cli.no_labels;
    match &cli.gnuplot {
        None => {
            handle_text(cli.curve, &placement, labels, cli.output.as_deref())?;
            Ok(0)
        }
        Some(term) => {
            let status = handle_gnuplot(
                cli.curve,
                &placement,
                labels,
                term,
                cli.output.as_deref(),
            )?;
            Ok(status.code().unwrap_or(1))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match run(&cli) {
        Ok(code) => {
            io::stdout().flush().ok();
            process::exit(code);
        }
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn parses_npoints() {
        assert_eq!(parse_npoints("16"), Ok(16));
        assert_eq!(parse_npoints("1"), Ok(1));
        assert_eq!(
            parse_npoints("15"),
            Err("number of points is not a power of 4.".to_string())
        );
        assert!(parse_npoints("0").is_err());
        assert!(parse_npoints("-4").is_err());
        assert!(parse_npoints("four").is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "spacefill",
            "64",
            "-t",
            "moore",
            "--fit",
            "2",
            "-1",
            "1",
            "2",
            "--offset",
            "-3",
            "0.5",
            "--no-labels",
            "-o",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.npoints, 64);
        assert_eq!(cli.curve, Curve::Moore);
        assert_eq!(cli.fit(), Some(Fit::from_components([2.0, -1.0, 1.0, 2.0])));
        assert_eq!(cli.offset(), Some(Point::new(-3.0, 0.5)));
        assert!(cli.no_labels);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.gnuplot, None);
    }

    #[test]
    fn gnuplot_terminal_defaults_to_dumb() {
        let cli = Cli::try_parse_from(["spacefill", "16", "-g"]).unwrap();
        assert_eq!(cli.gnuplot.as_deref(), Some("dumb"));

        let cli = Cli::try_parse_from(["spacefill", "16", "--gnuplot", "png"]).unwrap();
        assert_eq!(cli.gnuplot.as_deref(), Some("png"));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["spacefill", "12"]).is_err());
        assert!(Cli::try_parse_from(["spacefill", "16", "-t", "peano"]).is_err());
        assert!(Cli::try_parse_from(["spacefill", "16", "--fit", "1", "2"]).is_err());
    }

    #[test]
    fn type_help_describes_each_curve() {
        let help = Cli::command().render_long_help().to_string();
        for curve in [Curve::Hilbert, Curve::Moore] {
            assert!(
                help.contains(&format!("{}: {}", curve.key(), curve.info())),
                "missing {curve} in help:\n{help}"
            );
        }
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["spacefill", "4"]).unwrap();
        assert_eq!(cli.curve, Curve::Hilbert);
        assert_eq!(cli.fit(), None);
        assert_eq!(cli.offset(), None);
        assert!(!cli.no_labels);
    }
}
