//! `smi` - converts the plain-text markup dialect to HTML on stdout.

mod error;

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use smi_core::{DEFAULT_MAX_DEPTH, RenderOptions, render_html_sanitized, render_to};
use tracing_subscriber::EnvFilter;

use error::CliError;

#[derive(Parser)]
#[command(name = "smi", version, about)]
struct Cli {
    /// Input file; reads standard input when absent or `-`.
    file: Option<PathBuf>,

    /// Never pass raw HTML through and escape every `&`.
    #[arg(short = 'n', long = "no-html")]
    no_html: bool,

    /// Filter the output through an allow-list of known tags.
    #[arg(long)]
    sanitized: bool,

    /// Nesting limit before rendering is aborted.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log debug events to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose forces DEBUG; otherwise RUST_LOG, defaulting to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("smi: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let source = read_input(cli.file.as_deref())?;
    let options = RenderOptions {
        strict: cli.no_html,
        max_depth: cli.max_depth,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.sanitized {
        let html = render_html_sanitized(&String::from_utf8_lossy(&source), &options)?;
        out.write_all(html.as_bytes())?;
    } else {
        render_to(&source, &options, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) if path != Path::new("-") => fs::read(path).map_err(|source| CliError::Open {
            path: path.to_path_buf(),
            source,
        }),
        _ => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(CliError::Stdin)?;
            Ok(buffer)
        }
    }
}
