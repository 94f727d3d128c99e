//! asciifold CLI - fold Unicode text to printable ASCII.
//!
//! Text comes from the positional arguments (joined by spaces) or, when there
//! are none, from stdin one line at a time. Each input line produces exactly
//! one output line.
//!
//! Options are layered: `~/.asciifold/config.toml` (or `--config`) first, then
//! command-line flags. Flags can only switch features on; `--field` replaces
//! the configured field kind.
//!
//! Logs go to stderr and are filtered by `ASCIIFOLD_LOG` (falling back to
//! `RUST_LOG`, then `warn`).

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use asciifold_config::AsciifoldConfig;
use asciifold_core::{ExtensionTable, FieldKind, FoldOptions, Folder, extensions};

const LOG_ENV_VAR: &str = "ASCIIFOLD_LOG";

#[derive(Parser)]
#[command(name = "asciifold")]
#[command(about = "Fold Unicode text (author names, titles, abstracts) to ASCII")]
struct Cli {
    /// Text to fold; stdin is read line by line when omitted
    text: Vec<String>,
    /// Spell Greek letters out (alpha, Beta) instead of folding them
    #[arg(long)]
    greek: bool,
    /// Escape <, > and & as XML entities
    #[arg(long)]
    xml: bool,
    /// Canonicalize look-alike beta and open-E glyphs
    #[arg(long)]
    homoglyphs: bool,
    /// How to settle sharp-s versus beta
    #[arg(long, value_enum)]
    field: Option<Field>,
    /// Only normalize glyphs; do not transliterate
    #[arg(long)]
    keep_unicode: bool,
    /// Extension table to use instead of the one beside the executable
    #[arg(long, value_name = "PATH", conflicts_with = "no_extensions")]
    extensions: Option<PathBuf>,
    /// Do not consult any extension table
    #[arg(long)]
    no_extensions: bool,
    /// Config file to use instead of ~/.asciifold/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Field {
    Plain,
    Author,
    Prose,
}

impl From<Field> for FieldKind {
    fn from(field: Field) -> Self {
        match field {
            Field::Plain => FieldKind::Plain,
            Field::Author => FieldKind::Author,
            Field::Prose => FieldKind::Prose,
        }
    }
}

impl Cli {
    fn fold_options(&self, config: &AsciifoldConfig) -> FoldOptions {
        let base = config.fold_options();
        FoldOptions {
            homoglyphs: base.homoglyphs || self.homoglyphs,
            field: self.field.map_or(base.field, FieldKind::from),
            transliterate: base.transliterate && !self.keep_unicode,
            spell_greek: base.spell_greek || self.greek,
            reencode_xml: base.reencode_xml || self.xml,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<AsciifoldConfig> {
    match &cli.config {
        Some(path) => Ok(AsciifoldConfig::load_from(path)?),
        None => Ok(AsciifoldConfig::load().unwrap_or_default()),
    }
}

/// Decide where extension lookups go. Returns `false` when they are disabled.
///
/// An explicit `--extensions` file must be readable and overrides the config's
/// `enabled = false`. A configured path is best-effort like the default
/// location.
fn prepare_extensions(cli: &Cli, config: &AsciifoldConfig) -> Result<bool> {
    if cli.no_extensions {
        return Ok(false);
    }

    let table = if let Some(path) = &cli.extensions {
        ExtensionTable::load(path)
            .with_context(|| format!("Failed to load extension table {}", path.display()))?
    } else if !config.extensions_enabled() {
        return Ok(false);
    } else if let Some(path) = config.extension_path() {
        ExtensionTable::load_or_empty(&path)
    } else {
        return Ok(true);
    };

    if !extensions::install(table) {
        tracing::warn!("Extension table already initialized; keeping the existing one");
    }
    Ok(true)
}

/// Strip one trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Fold stdin line by line. Bytes that are not UTF-8 become U+FFFD, which the
/// transliterator drops, so a bad line still yields one output line.
fn fold_lines(folder: &Folder<'_>, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read stdin")?;
        if read == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        writeln!(out, "{}", folder.fold(&line)).context("Failed to write output")?;
    }
}

fn run(folder: &Folder<'_>, cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.text.is_empty() {
        fold_lines(folder, &mut io::stdin().lock(), &mut out)?;
    } else {
        writeln!(out, "{}", folder.fold(&cli.text.join(" "))).context("Failed to write output")?;
    }

    out.flush().context("Failed to write output")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    let options = cli.fold_options(&config);
    tracing::debug!(?options, "Fold options resolved");

    let disabled = ExtensionTable::empty();
    let folder = if prepare_extensions(&cli, &config)? {
        Folder::new(options)
    } else {
        Folder::with_extensions(options, &disabled)
    };

    run(&folder, &cli)
}

#[cfg(test)]
mod tests {
    use asciifold_core::{ExtensionTable, FoldOptions, Folder};

    use super::{fold_lines, trim_line_ending};

    fn fold_bytes(input: &[u8]) -> String {
        let table = ExtensionTable::empty();
        let folder = Folder::with_extensions(FoldOptions::default(), &table);
        let mut out = Vec::new();
        fold_lines(&folder, &mut &input[..], &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn trims_lf_and_crlf() {
        assert_eq!(trim_line_ending(b"abc\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc"), b"abc");
        assert_eq!(trim_line_ending(b"\n"), b"");
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_the_stream() {
        assert_eq!(
            fold_bytes(b"caf\xe9\nStra\xc3\x9fe\n"),
            "caf\nStrasse\n"
        );
    }

    #[test]
    fn last_line_without_newline_is_folded() {
        assert_eq!(fold_bytes(b"a\r\n\nb"), "a\n\nb\n");
        assert_eq!(fold_bytes(b""), "");
    }
}
