//! Plotting through an external gnuplot process.
//!
//! The curve is sent to gnuplot as a script with inline data blocks: one block
//! for the line path and, when labels are on, a second block with each point's
//! index. Gnuplot's own stdout is routed to the caller's output.

use std::{
    env,
    io::{self, BufWriter, ErrorKind, Write},
    process::{Command, ExitStatus, Stdio},
};

use anyhow::{Context, Result};
use spacefill::point::Point;
use tracing::{debug, info, warn};

/// Environment variable naming the plotter command.
pub const COMMAND_ENV: &str = "GNUPLOT";
/// Plotter command used when [`COMMAND_ENV`] is unset.
pub const DEFAULT_COMMAND: &str = "gnuplot";
/// Terminal type that renders ASCII art sized to the console.
pub const DUMB_TERMINAL: &str = "dumb";
/// Console size assumed when `COLUMNS`/`LINES` are unavailable.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Gnuplot output terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Terminal {
    /// ASCII-art terminal sized to the console.
    Dumb {
        /// Console width in characters.
        columns: u16,
        /// Console height in lines.
        lines: u16,
    },
    /// Any other terminal, passed through verbatim.
    Named(String),
}

impl Terminal {
    /// Choose a terminal by name; `dumb` picks up the console `size`.
    pub fn from_name(name: &str, size: (u16, u16)) -> Self {
        if name == DUMB_TERMINAL {
            Self::Dumb {
                columns: size.0,
                lines: size.1,
            }
        } else {
            Self::Named(name.to_string())
        }
    }

    /// The `set term` line selecting this terminal.
    ///
    /// The dumb terminal leaves a two-character margin on each axis.
    fn set_command(&self) -> String {
        match self {
            Self::Dumb { columns, lines } => format!(
                "set term dumb {} {}",
                columns.saturating_sub(2),
                lines.saturating_sub(2)
            ),
            Self::Named(name) => format!("set term {name}"),
        }
    }
}

/// Console size from `COLUMNS` and `LINES`, falling back to 80×24.
pub fn console_size() -> (u16, u16) {
    console_size_from(
        env::var("COLUMNS").ok().as_deref(),
        env::var("LINES").ok().as_deref(),
    )
}

/// Parse a console size, using the fallback for missing or invalid values.
fn console_size_from(columns: Option<&str>, lines: Option<&str>) -> (u16, u16) {
    let parse = |v: Option<&str>, fallback: u16| {
        v.and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(fallback)
    };
    (
        parse(columns, FALLBACK_SIZE.0),
        parse(lines, FALLBACK_SIZE.1),
    )
}

/// Write the complete gnuplot script for `points` to `out`.
pub fn write_script<W: Write>(
    out: &mut W,
    terminal: &Terminal,
    points: &[Point],
    labels: bool,
) -> io::Result<()> {
    writeln!(out, "{}", terminal.set_command())?;
    writeln!(out, "set offsets graph 0.1,0.1,0.1,0.1")?;
    writeln!(out, "set tics out scale 0.5")?;
    writeln!(out, "set nokey")?;
    let also_labels = if labels { ", '-' with labels" } else { "" };
    writeln!(out, "plot '-' with lines{also_labels}")?;

    for point in points {
        writeln!(out, "{point}")?;
    }
    writeln!(out, "e")?;

    if labels {
        for (label, point) in points.iter().enumerate() {
            writeln!(out, "{point} {label}")?;
        }
        writeln!(out, "e")?;
    }

    writeln!(out, "quit")?;
    out.flush()
}

/// Spawns the plotter and streams scripts to it.
#[derive(Clone, Debug)]
pub struct Plotter {
    /// Shell command line that starts the plotter.
    command: String,
}

impl Plotter {
    /// A plotter running `command` through the system shell.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The plotter named by `GNUPLOT`, or plain `gnuplot`.
    pub fn from_env() -> Self {
        Self::new(env::var(COMMAND_ENV).unwrap_or_else(|_| DEFAULT_COMMAND.to_string()))
    }

    /// Shell command line that starts the plotter.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Plot `points`, sending the plotter's stdout to `stdout`, and wait for
    /// it to exit.
    ///
    /// A plotter that exits before reading the whole script is not an error
    /// here; its exit status tells the caller what went wrong.
    pub fn plot(
        &self,
        terminal: &Terminal,
        points: &[Point],
        labels: bool,
        stdout: Stdio,
    ) -> Result<ExitStatus> {
        info!(command = %self.command, points = points.len(), "starting plotter");
        let mut child = shell(&self.command)
            .stdin(Stdio::piped())
            .stdout(stdout)
            .spawn()
            .with_context(|| format!("failed to start plotter '{}'", self.command))?;

        let stdin = child
            .stdin
            .take()
            .context("plotter stdin is not available")?;
        let mut writer = BufWriter::new(stdin);
        match write_script(&mut writer, terminal, points, labels) {
            Ok(()) => debug!("script sent"),
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                warn!("plotter closed its input before the script was complete");
            }
            Err(e) => return Err(e).context("failed to write plotter script"),
        }
        // Close stdin so the plotter sees end of input.
        drop(writer);

        let status = child.wait().context("failed to wait for plotter")?;
        info!(%status, "plotter exited");
        Ok(status)
    }
}

/// A command running `line` through the platform shell.
#[cfg(not(windows))]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

/// A command running `line` through the platform shell.
#[cfg(windows)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}
