//! CLI binary for pdf2xml.
//!
//! A thin shim over the library crate that maps subcommands to the
//! conversion and validation entry points and prints results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdf2xml::{convert_to_file, validate_file, Config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert next to the input (paper.pdf -> paper.xml)
  pdf2xml convert paper.pdf

  # Convert to an explicit output path with a config file
  pdf2xml convert paper.pdf -o out/article.xml -c pdf2xml.toml

  # Force the filename-based fallback reader
  echo 'reader: dummy' > dummy.cfg
  pdf2xml convert paper.pdf -c dummy.cfg

  # Machine-readable report
  pdf2xml convert paper.pdf --json

  # Validate an existing XML file (exit 2 on structural failure)
  pdf2xml validate article.xml

CONFIG FILE:
  JSON, TOML, or simple "key: value" lines. Recognised keys:
    reader                 pdf-extract | dummy        (default: pdf-extract)
    enable_ocr             bool                       (reserved)
    table_extractor        string                     (reserved)
    page_ranges            string                     (reserved)
    detect_columns         bool                       (reserved)
    strip_headers_footers  bool                       (reserved)
    normalize_affiliations bool                       (reserved)
    reference_style        string                     (reserved)
    emit_base64_figures    bool                       (reserved)
    emit_tables_as_html    bool                       (reserved)
    timeout_sec            integer                    (reserved)

EXIT CODES:
  0  success
  1  fatal error (bad input, missing config, malformed XML)
  2  validate: document is well-formed but structurally invalid
"#;

/// Extract PDF metadata and emit a minimal JATS-like XML article.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2xml",
    version,
    about = "Extract bibliographic metadata from academic PDFs into minimal JATS-like XML",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "PDF2XML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "PDF2XML_QUIET")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single PDF to XML.
    Convert {
        /// Path to the PDF file.
        input: String,

        /// Output XML path. Default: input path with a .xml extension.
        #[arg(short, long, env = "PDF2XML_OUTPUT")]
        output: Option<PathBuf>,

        /// Config file path (JSON, TOML, or "key: value" lines).
        #[arg(short, long, env = "PDF2XML_CONFIG")]
        config: Option<PathBuf>,

        /// Print the conversion report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Validate an XML file against the basic article structure.
    Validate {
        /// Path to the XML file.
        input: PathBuf,
    },

    /// Preview detected document structure (stub).
    Preview {
        /// Path to the PDF file.
        input: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", red("error:"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Convert {
            input,
            output,
            config,
            json,
        } => cmd_convert(input, output.as_deref(), config.as_deref(), *json, cli.quiet),
        Command::Validate { input } => cmd_validate(input),
        Command::Preview { .. } => {
            println!("Preview (stub): structure summary to be added in later steps.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_convert(
    input: &str,
    output: Option<&std::path::Path>,
    config_path: Option<&std::path::Path>,
    json: bool,
    quiet: bool,
) -> Result<ExitCode> {
    let config = Config::load(config_path).context("Failed to load configuration")?;

    let out_path = match output {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(input).with_extension("xml"),
    };

    let report = convert_to_file(input, &out_path, &config).context("Conversion failed")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialise report")?
        );
    } else {
        println!("{}", report.summary());
    }

    if !quiet {
        eprintln!(
            "{}  {}",
            if report.warnings.is_empty() {
                green("✔")
            } else {
                red("⚠")
            },
            bold(&out_path.display().to_string()),
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(input: &std::path::Path) -> Result<ExitCode> {
    let result = validate_file(input).context("Validation failed")?;
    println!("{}", result.summary());
    if result.ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}
