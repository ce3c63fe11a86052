#![forbid(unsafe_code)]
//! MathGen Command Line Interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use mathgen::commands::{execute_fonts, execute_generate, FontsOptions, GenerateOptions};
use mathgen::config::DEFAULT_CONFIG_FILE;
use mathgen::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "mathgen")]
#[command(about = "Printable arithmetic and algebra practice worksheets")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Generate flags, used when no command is given
    #[command(flatten)]
    generate: GenerateArgs,

    /// Config file path (used when it exists)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a worksheet (default command)
    Generate(GenerateArgs),

    /// Show font directories and the faces found in them
    Fonts {
        /// Extra font directory (can specify multiple)
        #[arg(long = "font-dir", env = "MATHGEN_FONT_DIR")]
        font_dirs: Vec<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Operation: 1 (add/subtract), 2 (multiply/divide), 3 (algebra)
    #[arg(short, long)]
    mode: Option<String>,

    /// Outcome range, e.g. 0-20
    #[arg(short, long)]
    range: Option<String>,

    /// Output file ('-' for stdout, text and json only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (pdf, text, json)
    #[arg(short, long, default_value = "pdf")]
    format: String,

    /// Seed for a reproducible worksheet
    #[arg(long)]
    seed: Option<u64>,

    /// Extra font directory (can specify multiple)
    #[arg(long = "font-dir", env = "MATHGEN_FONT_DIR")]
    font_dirs: Vec<PathBuf>,
}

impl GenerateArgs {
    fn into_options(self) -> anyhow::Result<GenerateOptions> {
        Ok(GenerateOptions {
            mode: self.mode,
            range: self.range,
            output: self.output,
            format: self.format.parse::<OutputFormat>()?,
            seed: self.seed,
            font_dirs: self.font_dirs,
        })
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "mathgen=debug" } else { "mathgen=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_if_exists(&cli.config)?;

    let command = cli.command.unwrap_or(Commands::Generate(cli.generate));

    match command {
        Commands::Generate(args) => {
            execute_generate(args.into_options()?, &config)?;
        }

        Commands::Fonts { font_dirs } => {
            let options = FontsOptions { font_dirs };
            execute_fonts(options, &config)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}
