//! @acp:module "Generate Command"
//! @acp:summary "Prompt, generate, lay out and write a worksheet"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `mathgen generate` (also the default when no command is given).

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::MathGenError;
use crate::layout::{build_document, Document};
use crate::problem::{OperationMode, ProblemGenerator, Range};
use crate::render::{render, HostFontStore, OutputFormat};

use super::prompt::{ask, MODE_PROMPT, RANGE_PROMPT};

/// Path meaning "write to stdout"
pub const STDOUT_PATH: &str = "-";

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Operation choice (`1`, `2`, `3` or a mode name); prompted when absent
    pub mode: Option<String>,
    /// Outcome range `<min>-<max>`; prompted when absent
    pub range: Option<String>,
    /// Output file; defaults by mode and format
    pub output: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Seed for reproducible worksheets
    pub seed: Option<u64>,
    /// Extra font directories
    pub font_dirs: Vec<PathBuf>,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    execute_generate_to(options, config, &mut stdout.lock())
}

/// Execute the generate command, sending `--output -` worksheets to `stdout`
///
/// Status lines and prompts go to stderr so `stdout` carries only the worksheet.
pub fn execute_generate_to<W: Write>(
    options: GenerateOptions,
    config: &Config,
    stdout: &mut W,
) -> Result<()> {
    let to_stdout = options
        .output
        .as_deref()
        .is_some_and(|path| path.as_os_str() == STDOUT_PATH);
    if to_stdout && !options.format.is_textual() {
        bail!(
            "{} output cannot be written to stdout; use --format text or json, or an output file",
            options.format.extension().to_uppercase()
        );
    }

    let mode_answer = match options.mode {
        Some(mode) => mode,
        None => ask(MODE_PROMPT, "operation")?,
    };
    let range_answer = match options.range {
        Some(range) => range,
        None => ask(RANGE_PROMPT, "range")?,
    };

    let mode: OperationMode = mode_answer.parse()?;
    let range = Range::parse(&range_answer)?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    eprintln!(
        "{} Generating {} {} problems in {}",
        style("→").cyan(),
        mode.problem_count(),
        style(mode.label()).cyan(),
        range
    );
    let document = prepare_document(mode, range, config, &mut rng)?;

    let mut font_dirs = options.font_dirs;
    font_dirs.extend(config.font_dirs.iter().cloned());
    let fonts = HostFontStore::with_extra_dirs(font_dirs);

    let bytes = render(&document, options.format, &fonts)?;

    if to_stdout {
        stdout
            .write_all(&bytes)
            .and_then(|()| stdout.flush())
            .context("Failed to write worksheet to stdout")?;
        return Ok(());
    }

    let output = options
        .output
        .unwrap_or_else(|| default_output(mode, options.format));

    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), bytes = bytes.len(), "wrote worksheet");

    println!(
        "{} {} generated and saved as {} ({} pages)",
        style("✓").green(),
        options.format.extension().to_uppercase(),
        style(output.display()).bold(),
        document.pages.len()
    );
    Ok(())
}

/// Generate the mode's problem count and lay it out with the configured capacity
pub fn prepare_document<R: Rng>(
    mode: OperationMode,
    range: Range,
    config: &Config,
    rng: &mut R,
) -> Result<Document, MathGenError> {
    let problems = ProblemGenerator::new()
        .with_max_attempts(config.max_attempts)
        .generate(mode, range, mode.problem_count(), rng)?;
    Ok(build_document(&problems, config.layout))
}

/// `MathSums.pdf`, `MathProblems.txt`, ...
pub fn default_output(mode: OperationMode, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", mode.file_stem(), format.extension()))
}
