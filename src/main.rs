//! markline CLI - convert a README-style Markdown file to HTML

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use markline::{convert_file, Options};
use tracing::Level;

/// Convert a Markdown file to HTML.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Markdown file to read.
    source: PathBuf,

    /// HTML file to create or overwrite.
    dest: PathBuf,

    /// Leave `**` and `__` untouched.
    #[arg(long)]
    no_emphasis: bool,

    /// Leave `[[...]]` spans untouched.
    #[arg(long)]
    no_digest: bool,

    /// Leave `((...))` spans untouched.
    #[arg(long)]
    no_strip: bool,

    /// Treat `#` lines as plain text.
    #[arg(long)]
    no_headings: bool,

    /// More log output on stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            emphasis: !self.no_emphasis,
            digest_directive: !self.no_digest,
            strip_directive: !self.no_strip,
            headings: !self.no_headings,
        }
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match convert_file(&cli.source, &cli.dest, &cli.options()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "conversion failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
