use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use treequery::{Printer, SearchConfig, SearchError, Searcher};

#[derive(Parser, Debug)]
#[command(name = "treequery")]
#[command(about = "Structural code search with tree-sitter queries", long_about = None)]
#[command(version)]
struct Cli {
    /// File to search, or directory whose files are searched (not recursive)
    path: PathBuf,

    /// Capture name whose nodes are printed
    capture: Option<String>,

    /// "Quiet" mode: print captured text without file locations
    #[arg(short, long)]
    quiet: bool,

    /// Read the query from this file instead of the language default
    #[arg(short = 'f', long = "query-file", value_name = "PATH")]
    query_file: Option<PathBuf>,

    /// Force the language instead of detecting it per file
    #[arg(short, long, value_name = "NAME")]
    lang: Option<String>,

    /// Skip files that fail instead of stopping at the first error
    #[arg(short, long)]
    keep_going: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            language: self.lang.clone().unwrap_or_default(),
            query_file: self.query_file.clone(),
            quiet: self.quiet,
            keep_going: self.keep_going,
        }
    }
}

/// Accept the single-dash `-lang` spelling alongside `--lang`.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut end_of_options = false;
    args.into_iter()
        .map(|arg| {
            if end_of_options {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    end_of_options = true;
                    arg
                }
                Some("-lang") => OsString::from("--lang"),
                Some(s) if s.starts_with("-lang=") => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let config = cli.config();
    debug!(?config, "starting search");

    let searcher = Searcher::new(&config)?;
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut printer = Printer::new(stdout.lock(), config.quiet).with_color(color);

    let capture = cli.capture.as_deref().unwrap_or_default();
    let summary = searcher.search_path(&cli.path, capture, &mut printer)?;
    debug!(?summary, "search finished");

    if summary.failed > 0 {
        anyhow::bail!("{} of {} files failed", summary.failed, summary.files);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse_from(normalize_args(env::args_os()));

    if let Err(err) = run(cli) {
        report(&err);
        std::process::exit(1);
    }
}

/// Print a fatal error on stdout. Nothing is printed when stdout itself
/// is gone, e.g. `treequery src name | head -1`.
fn report(err: &anyhow::Error) {
    if is_broken_pipe(err) {
        return;
    }

    let mut stdout = io::stdout();
    let message = if stdout.is_terminal() {
        err.to_string().red().to_string()
    } else {
        err.to_string()
    };
    let _ = writeln!(stdout, "{message}");
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<SearchError>(),
        Some(SearchError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe
    )
}
