//! Matches fully-parenthesized patterns against every line of a file.
//!
//! Usage:
//!   paren-grep -e `<pattern>` `<file>`   - evaluate one pattern, fail on a bad pattern
//!   paren-grep `<file>`                  - read patterns from stdin, one per line

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use paren_regex::{Regex, StarBound};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File of candidate lines
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Evaluate a single pattern instead of prompting for patterns
    #[arg(short = 'e', long, value_name = "PATTERN")]
    pattern: Option<String>,

    /// Cap star repetition at the input length
    #[arg(long)]
    legacy_star_bound: bool,

    /// Print the parse tree of each pattern
    #[arg(long)]
    tree: bool,

    /// Turn debugging information on
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn star_bound(&self) -> StarBound {
        match self.legacy_star_bound {
            true => StarBound::InputLength,
            false => StarBound::Progress,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.pattern {
        Some(pattern) => {
            let regex = Regex::new(pattern)
                .with_context(|| format!("invalid pattern {:?}", pattern))?
                .with_star_bound(cli.star_bound());
            report(&cli, &regex, &mut io::stdout().lock())
        }
        None => interactive(&cli),
    }
}

fn init_logging(verbose: bool) {
    let filter = match verbose {
        true => EnvFilter::new("debug"),
        false => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn interactive(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    loop {
        write!(stdout, "Regex: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }
        let pattern = line.trim_end_matches(['\n', '\r']);

        match Regex::new(pattern) {
            Ok(regex) => report(cli, &regex.with_star_bound(cli.star_bound()), &mut stdout)?,
            Err(err) => {
                debug!(pattern, %err, "skipping pattern");
                eprintln!("Error: {}", err);
            }
        }
    }
}

fn report(cli: &Cli, regex: &Regex, out: &mut impl Write) -> Result<()> {
    let lines = read_lines(&cli.file)?;
    info!(lines = lines.len(), "matching");

    if cli.tree {
        write!(out, "{}", regex.dump())?;
    }
    for line in &lines {
        writeln!(out, "{} - Matched: {}", line, regex.is_match(line))?;
    }
    writeln!(out)?;

    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(text.lines().map(str::to_owned).collect())
}
