// Command-line entry point for astgraph.

use anyhow::{bail, Context, Result};
use astgraph::application::{SourceInput, VisualizeUsecase};
use astgraph::config::VisualizerConfig;
use astgraph::domain::language::SourceLanguage;
use astgraph::domain::visualizers::standard_registry;
use astgraph::infrastructure::{concurrency, graphviz, JsonExporter, JsonTreeParser, SynSourceParser};
use astgraph::ports::dot_exporter::DotExporter;
use astgraph::ports::{GraphExporter, SourceParser};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Dot,
    Json,
    Svg,
    Png,
    Pdf,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Json => "json",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Image formats go through Graphviz and need a file to land in.
    fn is_image(self) -> bool {
        matches!(self, OutputFormat::Svg | OutputFormat::Png | OutputFormat::Pdf)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw syntax trees as graphs", long_about = None)]
struct Cli {
    /// Source files; stdin is read when none is given
    files: Vec<PathBuf>,

    /// Output file, or directory when several files are given.
    /// Text formats are printed to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Input language (rust, json); inferred from the file extension by default
    #[arg(short, long)]
    lang: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the full error chain and backtrace on failure
    #[arg(long)]
    with_traceback: bool,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_inputs(cli: &Cli) -> Result<Vec<SourceInput>> {
    let forced = cli.lang.as_deref().map(str::parse::<SourceLanguage>).transpose()?;

    if cli.files.is_empty() {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .context("Failed to read stdin")?;
        return Ok(vec![SourceInput {
            name: "<stdin>".to_string(),
            language: forced.unwrap_or_default(),
            code,
        }]);
    }

    let mut inputs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let code = fs::read_to_string(path)
            .with_context(|| format!("Cannot read input file {}", path.display()))?;
        let language = match forced.or_else(|| SourceLanguage::from_path(path)) {
            Some(language) => language,
            None => {
                let fallback = SourceLanguage::default();
                warn!(file = %path.display(), "unknown extension, assuming {}", fallback);
                fallback
            }
        };
        inputs.push(SourceInput {
            name: path.display().to_string(),
            language,
            code,
        });
    }
    Ok(inputs)
}

/// Where each input's result goes; `None` means stdout.
fn output_targets(cli: &Cli, format: OutputFormat) -> Result<Vec<Option<PathBuf>>> {
    if cli.files.len() <= 1 {
        if cli.output.is_none() && format.is_image() {
            bail!("--output is required for {} output", format.extension());
        }
        return Ok(vec![cli.output.clone()]);
    }

    let dir = cli
        .output
        .as_ref()
        .context("--output <DIR> is required when several files are given")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    Ok(cli
        .files
        .iter()
        .map(|file| {
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "graph".to_string());
            Some(dir.join(format!("{}.{}", stem, format.extension())))
        })
        .collect())
}

fn write_output(content: &str, format: OutputFormat, target: Option<&Path>) -> Result<()> {
    match target {
        Some(path) if format.is_image() => graphviz::render(content, format.extension(), path),
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };
    let registry = standard_registry(&config, config.kind_hierarchy()?);

    let inputs = read_inputs(cli)?;
    let targets = output_targets(cli, cli.format)?;

    let dot = DotExporter::new(config.render.clone());
    let exporter: &dyn GraphExporter = match cli.format {
        OutputFormat::Json => &JsonExporter,
        _ => &dot,
    };
    let parsers: [&dyn SourceParser; 2] = [&SynSourceParser, &JsonTreeParser];
    let usecase = VisualizeUsecase {
        parsers: &parsers,
        registry: &registry,
        exporter,
    };

    if inputs.len() == 1 {
        let content = usecase.run(&inputs[0])?;
        return write_output(&content, cli.format, targets[0].as_deref());
    }

    concurrency::init_thread_pool()?;
    let results = usecase.run_batch(&inputs);
    let mut failed = 0usize;
    for ((input, result), target) in inputs.iter().zip(results).zip(targets) {
        let written = result.and_then(|content| write_output(&content, cli.format, target.as_deref()));
        match written {
            Ok(()) => {
                if let Some(path) = target {
                    info!(
                        input = %input.name,
                        output = %path.display(),
                        format = exporter.format(),
                        "graph written"
                    );
                }
            }
            Err(err) => {
                warn!(input = %input.name, "skipped: {:#}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} inputs failed", failed, inputs.len());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        if cli.with_traceback {
            eprintln!("Error: {:?}", err);
        } else {
            eprintln!("Error: {:#}", err);
        }
        std::process::exit(1);
    }
}
